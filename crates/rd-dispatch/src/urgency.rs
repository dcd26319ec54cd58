//! Pluggable urgency term of the dispatch score.

use rd_core::{DispatchConfig, DispatchRng};
use rd_registry::RideRequest;

/// How urgent a request is.  Higher values lower every candidate's score.
///
/// Called once per scored candidate, so a randomized model gives each vehicle
/// its own draw.
///
/// # Example
///
/// ```rust,ignore
/// struct LongTripsFirst;
///
/// impl UrgencyModel for LongTripsFirst {
///     fn urgency(&mut self, request: &RideRequest) -> f64 {
///         request.trip_km().min(5.0)
///     }
/// }
/// ```
pub trait UrgencyModel {
    fn urgency(&mut self, request: &RideRequest) -> f64;
}

/// Uniform draw in `[0, max]` from a seeded stream.
#[derive(Debug)]
pub struct RandomUrgency {
    rng: DispatchRng,
    max: f64,
}

impl RandomUrgency {
    pub fn new(rng: DispatchRng, max: f64) -> Self {
        Self { rng, max }
    }

    /// Seeded from `config.seed`, bounded by `config.max_urgency`.
    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::new(DispatchRng::new(config.seed), config.max_urgency)
    }
}

impl UrgencyModel for RandomUrgency {
    fn urgency(&mut self, _request: &RideRequest) -> f64 {
        self.rng.gen_range(0.0..=self.max)
    }
}

/// Same urgency for every request.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedUrgency(pub f64);

impl UrgencyModel for FixedUrgency {
    fn urgency(&mut self, _request: &RideRequest) -> f64 {
        self.0
    }
}

/// Urgency of zero: vehicles are ranked by distance plus delay alone.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoUrgency;

impl UrgencyModel for NoUrgency {
    fn urgency(&mut self, _request: &RideRequest) -> f64 {
        0.0
    }
}

impl<M: UrgencyModel + ?Sized> UrgencyModel for Box<M> {
    fn urgency(&mut self, request: &RideRequest) -> f64 {
        (**self).urgency(request)
    }
}
