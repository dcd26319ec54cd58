//! Engine configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to the dispatcher builder.  The `Default`
//! impl scores every available vehicle by great-circle distance with an
//! urgency draw in `[0, 5]`.

use crate::{CoreError, CoreResult};

/// How the distance term of the dispatch score is measured.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMetric {
    /// Great-circle distance between the vehicle and pickup coordinates.
    #[default]
    Haversine,
    /// Shortest road distance between the vehicle's and pickup's named
    /// locations.  Vehicles with no road path to the pickup are not scored.
    Road,
}

/// Top-level dispatch configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Upper bound of the uniform urgency draw.  Default 5.0.
    pub max_urgency: f64,

    /// Distance term of the score.
    pub distance_metric: DistanceMetric,

    /// Only score vehicles whose category equals the requested one.  Off by
    /// default: every available vehicle is a candidate.
    pub require_category_match: bool,

    /// Tombstone fraction of the priority queue heap above which the heap
    /// is rebuilt from live entries.
    pub compaction_ratio: f64,

    /// Rating applied by `end_ride` when the caller supplies none.
    pub default_rating: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            seed:                   0,
            max_urgency:            5.0,
            distance_metric:        DistanceMetric::Haversine,
            require_category_match: false,
            compaction_ratio:       0.5,
            default_rating:         5.0,
        }
    }
}

impl DispatchConfig {
    /// Reject values the engine cannot score with.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.max_urgency.is_finite() && self.max_urgency >= 0.0) {
            return Err(CoreError::Config(format!(
                "max_urgency must be finite and >= 0, got {}",
                self.max_urgency
            )));
        }
        if !(self.compaction_ratio.is_finite() && self.compaction_ratio > 0.0) {
            return Err(CoreError::Config(format!(
                "compaction_ratio must be finite and > 0, got {}",
                self.compaction_ratio
            )));
        }
        if !(0.0..=5.0).contains(&self.default_rating) {
            return Err(CoreError::Config(format!(
                "default_rating must lie in [0, 5], got {}",
                self.default_rating
            )));
        }
        Ok(())
    }
}
