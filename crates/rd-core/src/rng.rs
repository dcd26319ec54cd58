//! Seeded RNG wrapper.
//!
//! Urgency draws go through a `DispatchRng` seeded from
//! `DispatchConfig::seed`, so a run with the same seed and the same call
//! sequence reproduces the same assignments.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Engine-level deterministic RNG.  Only used from the single coordinator
/// thread.
pub struct DispatchRng(SmallRng);

impl DispatchRng {
    pub fn new(seed: u64) -> Self {
        DispatchRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

impl std::fmt::Debug for DispatchRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DispatchRng")
    }
}
