//! Values returned by the dispatcher's ride operations.

use rd_core::{GeoPoint, Place, RequestId, VehicleHandle, VehicleId};

use crate::ScoreBreakdown;

/// The vehicle a request was matched with.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub request:   RequestId,
    pub vehicle:   VehicleId,
    pub handle:    VehicleHandle,
    pub score:     f64,
    pub breakdown: ScoreBreakdown,
    /// Number of vehicles scored in this cycle.
    pub scored:    usize,
}

/// Result of one dispatch cycle.
///
/// `NoAvailability` is a normal business outcome, not an error: every
/// structural failure is reported through `DispatchError` instead.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchOutcome {
    Assigned(Assignment),
    NoAvailability { request: RequestId },
}

impl DispatchOutcome {
    pub fn is_assigned(&self) -> bool {
        matches!(self, DispatchOutcome::Assigned(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            DispatchOutcome::Assigned(a) => Some(a),
            DispatchOutcome::NoAvailability { .. } => None,
        }
    }

    pub fn request(&self) -> RequestId {
        match self {
            DispatchOutcome::Assigned(a) => a.request,
            DispatchOutcome::NoAvailability { request } => *request,
        }
    }
}

/// How a ride ended, passed to
/// [`Dispatcher::end_ride`](crate::Dispatcher::end_ride).
///
/// Either `arrived` is set (the vehicle is at the booked destination) or both
/// current-location fields must be present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RideCompletion {
    pub arrived:              bool,
    pub current_location:     Option<String>,
    pub current_location_geo: Option<GeoPoint>,
    /// Rating for the driver; the configured default applies when `None`.
    pub rating:               Option<f64>,
}

impl RideCompletion {
    /// The vehicle reached the booked destination.
    pub fn arrived() -> Self {
        Self { arrived: true, ..Self::default() }
    }

    /// The ride ended early at `place`.
    pub fn stopped_at(place: Place) -> Self {
        Self {
            arrived: false,
            current_location: Some(place.name),
            current_location_geo: Some(place.geo),
            rating: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Where the vehicle is when the ride ends, if the caller said so.
    pub(crate) fn reported_place(&self) -> Option<Place> {
        match (&self.current_location, self.current_location_geo) {
            (Some(name), Some(geo)) => Some(Place::new(name.clone(), geo)),
            _ => None,
        }
    }
}
