//! The `OutputWriter` trait implemented by backend writers.

use crate::{LeaderboardRow, OutputResult, RideRow};

pub trait OutputWriter {
    /// Write a batch of completed rides.
    fn write_rides(&mut self, rows: &[RideRow]) -> OutputResult<()>;

    /// Write a full leaderboard, top rank first.
    fn write_leaderboard(&mut self, rows: &[LeaderboardRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
