//! Candidate scoring: `distance + delay - urgency`, lower is better.

use rd_core::DistanceMetric;
use rd_registry::{RideRequest, Vehicle};
use rd_spatial::{GraphRouter, Router};

/// The three terms of one candidate's score.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScoreBreakdown {
    /// Vehicle-to-pickup distance in kilometres (great-circle or road).
    pub distance: f64,
    pub delay:    f64,
    pub urgency:  f64,
}

impl ScoreBreakdown {
    #[inline]
    pub fn total(&self) -> f64 {
        self.distance + self.delay - self.urgency
    }
}

/// Distance from `vehicle` to the request's pickup under `metric`.
///
/// `None` when the road metric is selected and the vehicle's location has no
/// road path to the pickup.
pub fn pickup_distance<R: Router>(
    metric:  DistanceMetric,
    nav:     &GraphRouter<R>,
    vehicle: &Vehicle,
    request: &RideRequest,
) -> Option<f64> {
    match metric {
        DistanceMetric::Haversine => Some(vehicle.geo().distance_km(request.pickup.geo)),
        DistanceMetric::Road => nav.distance(&vehicle.location.name, &request.pickup.name),
    }
}
