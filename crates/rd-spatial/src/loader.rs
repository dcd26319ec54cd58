//! CSV road loader.
//!
//! # CSV format
//!
//! One row per undirected road:
//!
//! ```csv
//! from,to,distance
//! Dubai Marina,Dubai Mall,22.5
//! Dubai Mall,Burj Khalifa,1.2
//! ```
//!
//! Rows are applied in file order.  Loading stops at the first bad row; roads
//! from earlier rows stay in the graph.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{RoadGraph, SpatialError, SpatialResult};

#[derive(Deserialize)]
struct RoadRecord {
    from:     String,
    to:       String,
    distance: f64,
}

/// Load roads from a CSV file into `graph`.  Returns the number of roads added.
pub fn load_roads_csv(path: &Path, graph: &mut RoadGraph) -> SpatialResult<usize> {
    let file = std::fs::File::open(path)?;
    load_roads_reader(file, graph)
}

/// Like [`load_roads_csv`] but accepts any `Read` source.
pub fn load_roads_reader<R: Read>(reader: R, graph: &mut RoadGraph) -> SpatialResult<usize> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut added = 0;
    for result in csv_reader.deserialize::<RoadRecord>() {
        let row = result.map_err(|e| SpatialError::Parse(e.to_string()))?;
        graph.add_road(&row.from, &row.to, row.distance)?;
        added += 1;
    }
    Ok(added)
}
