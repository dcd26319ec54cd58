//! `Vehicle` record and its two-state availability machine.

use rd_core::{GeoPoint, Place, UserId, VehicleCategory, VehicleId};

/// Availability of a vehicle.
///
/// `Available → Assigned` happens in dispatch; `Assigned → Available` happens
/// when the ride ends.  No other transition is performed by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleStatus {
    #[default]
    Available,
    Assigned,
}

impl VehicleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Assigned => "assigned",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered vehicle.
///
/// `pending` holds the destination of the ride in progress; it is `Some`
/// exactly while `status == Assigned`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:       VehicleId,
    pub category: VehicleCategory,
    pub driver:   UserId,
    pub status:   VehicleStatus,
    pub location: Place,
    pub pending:  Option<Place>,
}

impl Vehicle {
    pub fn new(
        id: impl Into<VehicleId>,
        category: VehicleCategory,
        driver: impl Into<UserId>,
        location: Place,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            driver: driver.into(),
            status: VehicleStatus::Available,
            location,
            pending: None,
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    #[inline]
    pub fn geo(&self) -> GeoPoint {
        self.location.geo
    }

    /// Mark the vehicle as serving a ride bound for `destination`.
    pub fn assign(&mut self, destination: Place) {
        self.status = VehicleStatus::Assigned;
        self.pending = Some(destination);
    }

    /// End the current ride: move to `at`, clear the pending destination and
    /// become available again.
    pub fn release(&mut self, at: Place) {
        self.location = at;
        self.pending = None;
        self.status = VehicleStatus::Available;
    }
}

/// Partial update for [`Fleet::update`](crate::Fleet::update).  `None` fields
/// are left unchanged.
#[derive(Clone, Debug, Default)]
pub struct VehicleUpdate {
    pub category: Option<VehicleCategory>,
    pub driver:   Option<UserId>,
    pub location: Option<Place>,
}

impl VehicleUpdate {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.driver.is_none() && self.location.is_none()
    }
}
