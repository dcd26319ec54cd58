//! Per-vehicle traffic delay table.

use rd_core::VehicleId;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{RegistryError, RegistryResult};

/// Latest reported delay (in score units, comparable to kilometres) for each
/// vehicle.  Vehicles with no report have a delay of `0.0`.
#[derive(Debug, Default, Clone)]
pub struct TrafficTable {
    delays: FxHashMap<VehicleId, f64>,
}

impl TrafficTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `delay` for `vehicle`, replacing any earlier report.  Returns the
    /// previous value.  Negative and non-finite delays are rejected.
    pub fn update(&mut self, vehicle: &VehicleId, delay: f64) -> RegistryResult<Option<f64>> {
        if !delay.is_finite() || delay < 0.0 {
            warn!(%vehicle, delay, "rejected traffic delay");
            return Err(RegistryError::InvalidDelay { vehicle: vehicle.clone(), delay });
        }
        debug!(%vehicle, delay, "traffic delay updated");
        Ok(self.delays.insert(vehicle.clone(), delay))
    }

    #[inline]
    pub fn delay(&self, vehicle: &VehicleId) -> f64 {
        self.delays.get(vehicle).copied().unwrap_or(0.0)
    }

    pub fn remove(&mut self, vehicle: &VehicleId) -> Option<f64> {
        self.delays.remove(vehicle)
    }

    /// Vehicle with the smallest reported delay.  Ties resolve to the
    /// lexicographically smallest id so the answer does not depend on hash
    /// order.
    pub fn least_delayed(&self) -> Option<(&VehicleId, f64)> {
        self.delays
            .iter()
            .min_by(|(ia, da), (ib, db)| da.total_cmp(db).then_with(|| ia.cmp(ib)))
            .map(|(id, d)| (id, *d))
    }

    pub fn len(&self) -> usize {
        self.delays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delays.is_empty()
    }
}
