//! Completed-ride log and per-user history.

use rd_core::{RideId, Tick, UserId, VehicleCategory, VehicleId};

use crate::RideRequest;

/// Record of one completed ride.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideLog {
    pub ride:         RideId,
    pub user:         UserId,
    pub vehicle:      VehicleId,
    pub end_location: String,
    pub category:     VehicleCategory,
    /// Rating the rider gave the driver.
    pub rating:       f64,
    pub completed_at: Tick,
    /// The request that produced this ride; used to rebook it.
    pub request:      RideRequest,
}

/// Append-only stack of completed rides, newest on top.
#[derive(Debug, Default, Clone)]
pub struct RideHistory {
    stack: Vec<RideLog>,
}

impl RideHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, log: RideLog) {
        self.stack.push(log);
    }

    /// Rides taken by `user`, most recent first.
    pub fn view(&self, user: &UserId) -> Vec<&RideLog> {
        self.stack.iter().rev().filter(|l| &l.user == user).collect()
    }

    /// The most recent ride taken by `user`.
    pub fn last_for(&self, user: &UserId) -> Option<&RideLog> {
        self.stack.iter().rev().find(|l| &l.user == user)
    }

    /// The most recent ride overall.
    pub fn peek(&self) -> Option<&RideLog> {
        self.stack.last()
    }

    /// All rides, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &RideLog> + '_ {
        self.stack.iter()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
