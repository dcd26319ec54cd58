//! `rd-spatial` — road graph and shortest-path routing.
//!
//! # Crate layout
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`network`]      | `RoadGraph` (interned names + adjacency lists)        |
//! | [`router`]       | `Router` trait, `Route`, `DijkstraRouter`             |
//! | [`graph_router`] | `GraphRouter` — graph + router bundle                 |
//! | [`loader`]       | `load_roads_csv`, `load_roads_reader`                 |
//! | [`error`]        | `SpatialError`, `SpatialResult<T>`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `rd-core` types.        |

pub mod error;
pub mod graph_router;
pub mod loader;
pub mod network;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use graph_router::GraphRouter;
pub use loader::{load_roads_csv, load_roads_reader};
pub use network::{RoadEdge, RoadGraph};
pub use router::{DijkstraRouter, Route, Router};
