//! `rd-output` — output writers for the `ride_dispatch` engine.
//!
//! | Backend | Files created                     |
//! |---------|-----------------------------------|
//! | CSV     | `rides.csv`, `leaderboard.csv`    |
//!
//! Backends implement [`OutputWriter`]; [`export`] drives one from a
//! [`Dispatcher`](rd_dispatch::Dispatcher).
//!
//! # Usage
//!
//! ```rust,ignore
//! use rd_output::{CsvWriter, export};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! export(&mut dispatcher, RankBy::Rating, &mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::{ExportSummary, export};
pub use row::{LeaderboardRow, RideRow};
pub use writer::OutputWriter;
