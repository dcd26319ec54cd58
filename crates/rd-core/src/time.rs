//! Logical time for the dispatch engine.
//!
//! The engine has no wall clock.  A `Tick` is a monotonically increasing
//! event counter advanced by the coordinator once per dispatch cycle and once
//! per ride completion, so ride logs can be ordered by "date" without
//! depending on system time.

use std::fmt;

/// An absolute logical timestamp.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self` (saturating at zero).
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Event clock owned by the coordinator.
#[derive(Clone, Debug, Default)]
pub struct EventClock {
    current: Tick,
}

impl EventClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.current
    }

    /// Advance by one tick and return the new value.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current = self.current.offset(1);
        self.current
    }
}
