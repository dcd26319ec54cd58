//! Integration tests for rd-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, LEADERBOARD_FILE, RIDES_FILE};
    use crate::row::{LeaderboardRow, RideRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn ride_row(ride_id: u32) -> RideRow {
        RideRow {
            ride_id,
            user_id:      "p1".into(),
            vehicle_id:   "V001".into(),
            end_location: "Dubai Mall".into(),
            category:     "car",
            rating:       4.5,
            completed_at: ride_id as u64 * 2,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(RIDES_FILE).exists());
        assert!(dir.path().join(LEADERBOARD_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(
            headers(dir.path().join(RIDES_FILE)),
            ["ride_id", "user_id", "vehicle_id", "end_location", "category", "rating", "completed_at"]
        );
        assert_eq!(
            headers(dir.path().join(LEADERBOARD_FILE)),
            ["rank", "user_id", "name", "role", "rating", "ride_count"]
        );
    }

    #[test]
    fn ride_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_rides(&[ride_row(0), ride_row(1)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(RIDES_FILE)).unwrap();
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][0], "1");
        assert_eq!(&records[1][3], "Dubai Mall");
        assert_eq!(&records[1][5], "4.5");
        assert_eq!(&records[1][6], "2");
    }

    #[test]
    fn leaderboard_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = LeaderboardRow {
            rank:       1,
            user_id:    "d1".into(),
            name:       "Ali".into(),
            role:       "driver",
            rating:     5.0,
            ride_count: 3,
        };
        w.write_leaderboard(&[row]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(LEADERBOARD_FILE)).unwrap();
        let rec = rdr.records().next().unwrap().unwrap();
        assert_eq!(rec.iter().collect::<Vec<_>>(), ["1", "d1", "Ali", "driver", "5", "3"]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod export_tests {
    use rd_core::{DispatchConfig, Place, VehicleCategory};
    use rd_dispatch::{DispatcherBuilder, NoUrgency, RankBy, RideCompletion};
    use rd_registry::{Role, User, Vehicle};

    use crate::csv::{CsvWriter, LEADERBOARD_FILE, RIDES_FILE};
    use crate::export;

    #[test]
    fn export_writes_rides_and_ranked_users() {
        let mut d = DispatcherBuilder::new(DispatchConfig::default())
            .urgency(NoUrgency)
            .user(User::new("d1", "Ali", Role::Driver))
            .user(User::new("p1", "Sara", Role::Passenger))
            .user(User::new("p2", "Nassir", Role::Passenger))
            .vehicle(Vehicle::new(
                "V001",
                VehicleCategory::Sedan,
                "d1",
                Place::new("Burj Khalifa", (25.1972, 55.2744)),
            ))
            .build()
            .unwrap();
        let outcome = d
            .request_ride(
                &"p1".into(),
                Place::new("Dubai Mall", (25.1975, 55.2790)),
                Place::new("Marina", (25.0772, 55.1330)),
                VehicleCategory::Sedan,
            )
            .unwrap();
        assert!(outcome.is_assigned());
        d.end_ride(&"V001".into(), RideCompletion::arrived().with_rating(4.0)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let summary = export(&mut d, RankBy::Rating, &mut w).unwrap();
        assert_eq!(summary.rides, 1);
        assert_eq!(summary.users, 3);

        let mut rides = csv::Reader::from_path(dir.path().join(RIDES_FILE)).unwrap();
        let ride = rides.records().next().unwrap().unwrap();
        assert_eq!(ride.iter().collect::<Vec<_>>(), ["0", "p1", "V001", "Marina", "sedan", "4", "2"]);

        let mut board = csv::Reader::from_path(dir.path().join(LEADERBOARD_FILE)).unwrap();
        let rows: Vec<csv::StringRecord> = board.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "d1");
        assert_eq!(&rows[0][4], "4");
        // p1 and p2 tie on rating 0; ties stay in user-id order.
        assert_eq!(&rows[1][1], "p1");
        assert_eq!(&rows[2][1], "p2");
        assert_eq!(&rows[2][0], "3");
    }
}
