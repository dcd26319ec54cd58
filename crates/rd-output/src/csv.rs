//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `rides.csv`
//! - `leaderboard.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{LeaderboardRow, OutputResult, RideRow};

pub const RIDES_FILE: &str = "rides.csv";
pub const LEADERBOARD_FILE: &str = "leaderboard.csv";

/// Writes dispatch output to two CSV files.
pub struct CsvWriter {
    rides:       Writer<File>,
    leaderboard: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rides = Writer::from_path(dir.join(RIDES_FILE))?;
        rides.write_record([
            "ride_id",
            "user_id",
            "vehicle_id",
            "end_location",
            "category",
            "rating",
            "completed_at",
        ])?;

        let mut leaderboard = Writer::from_path(dir.join(LEADERBOARD_FILE))?;
        leaderboard.write_record(["rank", "user_id", "name", "role", "rating", "ride_count"])?;

        Ok(Self { rides, leaderboard, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_rides(&mut self, rows: &[RideRow]) -> OutputResult<()> {
        for row in rows {
            self.rides.write_record(&[
                row.ride_id.to_string(),
                row.user_id.clone(),
                row.vehicle_id.clone(),
                row.end_location.clone(),
                row.category.to_owned(),
                row.rating.to_string(),
                row.completed_at.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_leaderboard(&mut self, rows: &[LeaderboardRow]) -> OutputResult<()> {
        for row in rows {
            self.leaderboard.write_record(&[
                row.rank.to_string(),
                row.user_id.clone(),
                row.name.clone(),
                row.role.to_owned(),
                row.rating.to_string(),
                row.ride_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rides.flush()?;
        self.leaderboard.flush()?;
        Ok(())
    }
}
