//! Location-indexed search over completed rides.

use rd_core::VehicleCategory;
use rustc_hash::FxHashMap;

use crate::RideLog;

/// Filter for [`RideSearchIndex::search`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchCriteria {
    /// End location of the ride; required.
    pub location:   String,
    pub category:   Option<VehicleCategory>,
    /// Inclusive lower bound on the ride's rating.
    pub min_rating: Option<f64>,
}

impl SearchCriteria {
    pub fn at(location: impl Into<String>) -> Self {
        Self { location: location.into(), ..Self::default() }
    }

    pub fn category(mut self, category: VehicleCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    fn matches(&self, log: &RideLog) -> bool {
        let category_ok = self.category.is_none_or(|c| c == log.category);
        let rating_ok = self.min_rating.is_none_or(|min| log.rating >= min);
        category_ok && rating_ok
    }
}

/// Sort key for [`sort_rides`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Completion tick.
    #[default]
    Date,
    /// Rider rating.
    Rating,
}

/// Completed rides bucketed by end location.
#[derive(Debug, Default, Clone)]
pub struct RideSearchIndex {
    by_location: FxHashMap<String, Vec<RideLog>>,
    len:         usize,
}

impl RideSearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, log: RideLog) {
        self.by_location
            .entry(log.end_location.clone())
            .or_default()
            .push(log);
        self.len += 1;
    }

    /// Rides ending at `criteria.location` that pass the optional filters, in
    /// insertion order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&RideLog> {
        self.by_location
            .get(&criteria.location)
            .map(|rides| rides.iter().filter(|r| criteria.matches(r)).collect())
            .unwrap_or_default()
    }

    /// Number of distinct end locations seen.
    pub fn location_count(&self) -> usize {
        self.by_location.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Stable ascending sort of `rides` by `by`.  Equal keys keep their input
/// order.
pub fn sort_rides<'a>(mut rides: Vec<&'a RideLog>, by: SortBy) -> Vec<&'a RideLog> {
    match by {
        SortBy::Date => rides.sort_by_key(|r| r.completed_at),
        SortBy::Rating => rides.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
    }
    rides
}
