//! `rd-registry` — mutable world state for the `ride_dispatch` engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`vehicle`] | `Vehicle`, `VehicleStatus`, `VehicleUpdate`                |
//! | [`fleet`]   | `Fleet` arena indexed by `VehicleHandle` and `VehicleId`   |
//! | [`user`]    | `User`, `Role`, `UserRegistry`                             |
//! | [`traffic`] | `TrafficTable` (per-vehicle delay)                         |
//! | [`request`] | `RideRequest`                                              |
//! | [`history`] | `RideLog`, `RideHistory` (newest-first stack)              |
//! | [`pending`] | `PendingRequests` (FIFO of unserved requests)              |
//! | [`search`]  | `RideSearchIndex`, `SearchCriteria`, `SortBy`, `sort_rides` |
//! | [`error`]   | `RegistryError`, `RegistryResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on records and enums.    |

pub mod error;
pub mod fleet;
pub mod history;
pub mod pending;
pub mod request;
pub mod search;
pub mod traffic;
pub mod user;
pub mod vehicle;


pub use error::{RegistryError, RegistryResult};
pub use fleet::Fleet;
pub use history::{RideHistory, RideLog};
pub use pending::PendingRequests;
pub use request::RideRequest;
pub use search::{RideSearchIndex, SearchCriteria, SortBy, sort_rides};
pub use traffic::TrafficTable;
pub use user::{Role, User, UserRegistry};
pub use vehicle::{Vehicle, VehicleStatus, VehicleUpdate};
