//! Strongly typed identifier wrappers.
//!
//! Two families live here:
//!
//! - **Handles** (`VehicleHandle`, `NodeId`, `RideId`, `RequestId`) are dense
//!   integers minted by the owning store.  They are `Copy + Ord + Hash` and
//!   index straight into arena `Vec`s via `.index()`.
//! - **Names** (`VehicleId`, `UserId`) are the caller-facing string keys
//!   ("V001", "u-42").  Stores map them to handles through a hash index.

use std::fmt;

/// Generate a typed handle wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid handle".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized handles are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

/// Generate a string-backed external identifier.
macro_rules! named_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id! {
    /// Stable slot of a vehicle in the fleet arena.  Never reused after removal.
    pub struct VehicleHandle(u32);
}

typed_id! {
    /// Index of a named location in the road graph.
    pub struct NodeId(u32);
}

typed_id! {
    /// Sequential identifier of a completed ride.
    pub struct RideId(u32);
}

typed_id! {
    /// Sequential identifier of a submitted ride request.
    pub struct RequestId(u32);
}

named_id! {
    /// Caller-facing vehicle identifier (plate, fleet number, …).
    pub struct VehicleId;
}

named_id! {
    /// Caller-facing user identifier, shared by drivers and passengers.
    pub struct UserId;
}
