//! `rd-core` — foundational types for the `ride_dispatch` workspace.
//!
//! This crate is a dependency of every other `rd-*` crate.  It has no `rd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`ids`]      | `VehicleHandle`, `NodeId`, `RideId`, `RequestId`, `VehicleId`, `UserId` |
//! | [`geo`]      | `GeoPoint`, `Place`, haversine distance in km              |
//! | [`time`]     | `Tick`, `EventClock`                                       |
//! | [`category`] | `VehicleCategory` enum                                     |
//! | [`rng`]      | `DispatchRng`                                              |
//! | [`config`]   | `DispatchConfig`, `DistanceMetric`                         |
//! | [`error`]    | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod category;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::VehicleCategory;
pub use config::{DispatchConfig, DistanceMetric};
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, Place};
pub use ids::{NodeId, RequestId, RideId, UserId, VehicleHandle, VehicleId};
pub use rng::DispatchRng;
pub use time::{EventClock, Tick};
