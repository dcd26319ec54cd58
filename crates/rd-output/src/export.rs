//! One-shot export of a dispatcher's rides and leaderboard.

use rd_dispatch::{Dispatcher, RankBy, UrgencyModel};
use rd_spatial::Router;
use tracing::info;

use crate::{LeaderboardRow, OutputResult, OutputWriter, RideRow};

/// Row counts written by [`export`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub rides: usize,
    pub users: usize,
}

/// Write every completed ride (oldest first) and the leaderboard ranked by
/// `by` (highest first) to `writer`, then finish it.
///
/// Takes the dispatcher mutably because reading the leaderboard may rebuild
/// its ranking tree.
pub fn export<U, R, W>(
    dispatcher: &mut Dispatcher<U, R>,
    by:         RankBy,
    writer:     &mut W,
) -> OutputResult<ExportSummary>
where
    U: UrgencyModel,
    R: Router,
    W: OutputWriter,
{
    let rides: Vec<RideRow> = dispatcher.history().iter().map(RideRow::from).collect();
    writer.write_rides(&rides)?;

    let board: Vec<LeaderboardRow> = dispatcher
        .top_users(by)
        .into_iter()
        .enumerate()
        .map(|(i, user)| LeaderboardRow::new(i + 1, user))
        .collect();
    writer.write_leaderboard(&board)?;
    writer.finish()?;

    let summary = ExportSummary { rides: rides.len(), users: board.len() };
    info!(rides = summary.rides, users = summary.users, by = by.as_str(), "export complete");
    Ok(summary)
}
