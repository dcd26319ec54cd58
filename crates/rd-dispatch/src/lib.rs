//! `rd-dispatch` — the ride-matching coordinator.
//!
//! For each ride request the [`Dispatcher`] scores every available vehicle as
//! `distance + traffic delay - urgency`, loads the scores into an
//! [`IndexedPriorityQueue`](rd_queue::IndexedPriorityQueue), and assigns the
//! minimum.  Ending a ride returns the vehicle to the pool, logs the trip and
//! updates the rider's and driver's statistics, which feed a lazily rebuilt
//! [`RankingTree`](rd_ranking::RankingTree) leaderboard.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`coordinator`] | `Dispatcher`                                               |
//! | [`builder`]     | `DispatcherBuilder`                                        |
//! | [`urgency`]     | `UrgencyModel` trait, `RandomUrgency`, `FixedUrgency`, `NoUrgency` |
//! | [`scoring`]     | `ScoreBreakdown`, `pickup_distance`                        |
//! | [`outcome`]     | `DispatchOutcome`, `Assignment`, `RideCompletion`          |
//! | [`leaderboard`] | `RankBy`                                                   |
//! | [`error`]       | `DispatchError`, `DispatchResult`                          |

pub mod builder;
pub mod coordinator;
pub mod error;
pub mod leaderboard;
pub mod outcome;
pub mod scoring;
pub mod urgency;


pub use builder::DispatcherBuilder;
pub use coordinator::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use leaderboard::RankBy;
pub use outcome::{Assignment, DispatchOutcome, RideCompletion};
pub use scoring::{ScoreBreakdown, pickup_distance};
pub use urgency::{FixedUrgency, NoUrgency, RandomUrgency, UrgencyModel};
