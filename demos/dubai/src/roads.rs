//! Embedded road network between the demo's named locations.
//!
//! Weights are approximate driving distances in kilometres.

use std::io::Cursor;

use rd_spatial::{RoadGraph, SpatialResult, load_roads_reader};

const ROADS_CSV: &str = "\
from,to,distance\n\
Burj Khalifa,Dubai Mall,1.2\n\
Burj Khalifa,Burjuman Metro Station,8.5\n\
Dubai Mall,Mall of the Emirates,15.8\n\
Mall of the Emirates,Dubai Marina,9.1\n\
Dubai Marina,JBR,1.6\n\
JBR,Mall of the Emirates,10.4\n\
Burjuman Metro Station,Dubai Mall,9.7\n\
";

pub fn build_roads() -> SpatialResult<RoadGraph> {
    let mut graph = RoadGraph::new();
    load_roads_reader(Cursor::new(ROADS_CSV), &mut graph)?;
    Ok(graph)
}
