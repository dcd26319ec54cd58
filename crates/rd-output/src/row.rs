//! Plain data row types written by output backends.

use rd_registry::{RideLog, User};

/// One completed ride.
#[derive(Debug, Clone, PartialEq)]
pub struct RideRow {
    pub ride_id:      u32,
    pub user_id:      String,
    pub vehicle_id:   String,
    pub end_location: String,
    pub category:     &'static str,
    pub rating:       f64,
    /// Engine tick at which the ride ended.
    pub completed_at: u64,
}

impl From<&RideLog> for RideRow {
    fn from(log: &RideLog) -> Self {
        Self {
            ride_id:      log.ride.0,
            user_id:      log.user.to_string(),
            vehicle_id:   log.vehicle.to_string(),
            end_location: log.end_location.clone(),
            category:     log.category.as_str(),
            rating:       log.rating,
            completed_at: log.completed_at.0,
        }
    }
}

/// One leaderboard position.  `rank` starts at 1 for the top user.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub rank:       usize,
    pub user_id:    String,
    pub name:       String,
    pub role:       &'static str,
    pub rating:     f64,
    pub ride_count: u32,
}

impl LeaderboardRow {
    pub fn new(rank: usize, user: &User) -> Self {
        Self {
            rank,
            user_id:    user.id.to_string(),
            name:       user.name.clone(),
            role:       user.role.as_str(),
            rating:     user.rating,
            ride_count: user.ride_count,
        }
    }
}
