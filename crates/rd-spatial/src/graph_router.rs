//! `GraphRouter` — a long-lived road graph bundled with its routing engine.

use crate::{DijkstraRouter, RoadGraph, Route, Router, SpatialResult};

/// Owns the road graph and answers shortest-path queries against it.
///
/// The graph only ever grows: [`add_road`](Self::add_road) is the sole
/// mutation.
///
/// # Example
///
/// ```
/// use rd_spatial::GraphRouter;
///
/// let mut nav: GraphRouter = GraphRouter::default();
/// nav.add_road("A", "B", 5.0).unwrap();
/// nav.add_road("A", "C", 10.0).unwrap();
/// nav.add_road("B", "C", 2.0).unwrap();
///
/// let route = nav.shortest_path("A", "C");
/// assert_eq!(route.distance, 7.0);
/// assert_eq!(route.path, ["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphRouter<R: Router = DijkstraRouter> {
    graph:  RoadGraph,
    router: R,
}

impl<R: Router> GraphRouter<R> {
    pub fn new(router: R) -> Self {
        Self { graph: RoadGraph::new(), router }
    }

    /// Wrap an already-populated graph.
    pub fn with_graph(graph: RoadGraph, router: R) -> Self {
        Self { graph, router }
    }

    /// Add an undirected road; see [`RoadGraph::add_road`].
    pub fn add_road(&mut self, a: &str, b: &str, weight: f64) -> SpatialResult<()> {
        self.graph.add_road(a, b, weight)
    }

    /// Shortest route from `start` to `end`.
    pub fn shortest_path(&self, start: &str, end: &str) -> Route {
        self.router.shortest_path(&self.graph, start, end)
    }

    /// Shortest distance, or `None` when unreachable.
    pub fn distance(&self, start: &str, end: &str) -> Option<f64> {
        let route = self.shortest_path(start, end);
        (!route.is_unreachable()).then_some(route.distance)
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    /// Mutable graph access for bulk loading.
    pub fn graph_mut(&mut self) -> &mut RoadGraph {
        &mut self.graph
    }
}
