//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The dispatcher calls routing via the [`Router`] trait, so applications can
//! swap in A* or a precomputed table without touching the coordinator.
//!
//! # Unreachable vs. trivial
//!
//! | Result                         | Meaning                       |
//! |--------------------------------|-------------------------------|
//! | `distance = ∞`, `path = []`    | no path exists                |
//! | `distance = 0`, `path = [x]`   | start and end are the same    |
//!
//! A zero-weight road between two distinct locations yields `distance = 0`
//! with a two-element path, which is distinguishable from both.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rd_core::NodeId;

use crate::network::RoadGraph;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Sum of road weights along `path`; `f64::INFINITY` when unreachable.
    pub distance: f64,
    /// Location names from start to end inclusive; empty when unreachable.
    pub path: Vec<String>,
}

impl Route {
    /// The "no path exists" sentinel.
    pub fn unreachable() -> Self {
        Self { distance: f64::INFINITY, path: Vec::new() }
    }

    /// Zero-length route that never leaves `at`.
    pub fn trivial(at: &str) -> Self {
        Self { distance: 0.0, path: vec![at.to_owned()] }
    }

    pub fn is_unreachable(&self) -> bool {
        self.path.is_empty()
    }

    /// `true` if the start and end are the same location.
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }

    /// Number of roads travelled.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait Router {
    /// Shortest route from `start` to `end`.
    ///
    /// Locations the graph has never seen are unreachable, except that
    /// `start == end` is always the trivial route.
    fn shortest_path(&self, graph: &RoadGraph, start: &str, end: &str) -> Route;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm with the partial path carried in each frontier entry.
///
/// Carrying the path costs an allocation per relaxation but needs no
/// predecessor array, which keeps a query independent of graph size when the
/// target is close to the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(&self, graph: &RoadGraph, start: &str, end: &str) -> Route {
        if start == end {
            return Route::trivial(start);
        }
        let (Some(from), Some(to)) = (graph.node_id(start), graph.node_id(end)) else {
            return Route::unreachable();
        };
        match dijkstra(graph, from, to) {
            Some((distance, nodes)) => Route {
                distance,
                path: nodes.into_iter().map(|n| graph.name(n).to_owned()).collect(),
            },
            None => Route::unreachable(),
        }
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Frontier entry ordered so that `BinaryHeap` (a max-heap) pops the
/// smallest accumulated distance first.
struct Frontier {
    distance: f64,
    node:     NodeId,
    path:     Vec<NodeId>,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

fn dijkstra(graph: &RoadGraph, from: NodeId, to: NodeId) -> Option<(f64, Vec<NodeId>)> {
    // best[v] = best known distance to v.
    let mut best = vec![f64::INFINITY; graph.node_count()];
    best[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(Frontier { distance: 0.0, node: from, path: Vec::new() });

    while let Some(Frontier { distance, node, mut path }) = heap.pop() {
        if node == to {
            path.push(to);
            return Some((distance, path));
        }

        // Skip stale frontier entries.
        if distance > best[node.index()] {
            continue;
        }

        path.push(node);
        for edge in graph.neighbors(node) {
            let candidate = distance + edge.weight;
            if candidate < best[edge.to.index()] {
                best[edge.to.index()] = candidate;
                heap.push(Frontier {
                    distance: candidate,
                    node:     edge.to,
                    path:     path.clone(),
                });
            }
        }
    }

    None
}
