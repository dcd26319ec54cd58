//! Vehicle category enum shared by the fleet, requests, and ride search.
//!
//! Parsing is case-insensitive ("SUV", "suv" and "Suv" are the same
//! category), which is what lets ride search match categories without
//! lowercasing strings at query time.

use std::str::FromStr;

use crate::CoreError;

/// The kind of vehicle a driver operates or a passenger asks for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum VehicleCategory {
    #[default]
    Car,
    Sedan,
    Suv,
    Van,
    Bike,
    Bus,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 6] = [
        VehicleCategory::Car,
        VehicleCategory::Sedan,
        VehicleCategory::Suv,
        VehicleCategory::Van,
        VehicleCategory::Bike,
        VehicleCategory::Bus,
    ];

    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleCategory::Car   => "car",
            VehicleCategory::Sedan => "sedan",
            VehicleCategory::Suv   => "suv",
            VehicleCategory::Van   => "van",
            VehicleCategory::Bike  => "bike",
            VehicleCategory::Bus   => "bus",
        }
    }
}

impl FromStr for VehicleCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        VehicleCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CoreError::Parse(format!("unknown vehicle category {s:?}")))
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
