//! Lazily rebuilt user rankings.

use rd_core::UserId;
use rd_ranking::RankingTree;
use rd_registry::{User, UserRegistry};
use tracing::debug;

/// Statistic a leaderboard is ordered by.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RankBy {
    #[default]
    Rating,
    RideCount,
}

impl RankBy {
    pub fn key(self, user: &User) -> f64 {
        match self {
            RankBy::Rating => user.rating,
            RankBy::RideCount => user.ride_count as f64,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RankBy::Rating => "rating",
            RankBy::RideCount => "ride_count",
        }
    }
}

/// A [`RankingTree`] of user ids plus a note of which statistic it was built
/// from.  Any change to user statistics clears `built_for`; the next read
/// rebuilds the tree from the registry.
#[derive(Debug, Default)]
pub(crate) struct Leaderboard {
    tree:      RankingTree<f64, UserId>,
    built_for: Option<RankBy>,
}

impl Leaderboard {
    pub(crate) fn invalidate(&mut self) {
        self.built_for = None;
    }

    pub(crate) fn is_fresh(&self, by: RankBy) -> bool {
        self.built_for == Some(by)
    }

    /// Rebuild unless already current for `by`.  Users are inserted in id
    /// order so equal keys rank deterministically.
    pub(crate) fn refresh(&mut self, by: RankBy, users: &UserRegistry) {
        if self.is_fresh(by) {
            return;
        }
        let mut all: Vec<&User> = users.iter().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        self.tree = all.into_iter().map(|u| (by.key(u), u.id.clone())).collect();
        self.built_for = Some(by);
        debug!(by = by.as_str(), users = self.tree.len(), height = self.tree.height(), "leaderboard rebuilt");
    }

    /// User ids, lowest key first.
    pub(crate) fn ascending(&self) -> Vec<&UserId> {
        self.tree.ascending()
    }

    /// User ids, highest key first.  Ties stay in id order.
    pub(crate) fn descending(&self) -> Vec<&UserId> {
        self.tree.descending()
    }
}
