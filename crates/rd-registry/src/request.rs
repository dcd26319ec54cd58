//! Ride requests.

use rd_core::{Place, RequestId, UserId, VehicleCategory};

/// A rider's request for a trip from `pickup` to `destination`.
///
/// The id is assigned by the dispatcher when the request is submitted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RideRequest {
    pub id:          RequestId,
    pub user:        UserId,
    pub pickup:      Place,
    pub destination: Place,
    pub category:    VehicleCategory,
}

impl RideRequest {
    pub fn new(
        id: RequestId,
        user: impl Into<UserId>,
        pickup: Place,
        destination: Place,
        category: VehicleCategory,
    ) -> Self {
        Self { id, user: user.into(), pickup, destination, category }
    }

    /// Great-circle length of the trip in kilometres.
    pub fn trip_km(&self) -> f64 {
        self.pickup.geo.distance_km(self.destination.geo)
    }
}
