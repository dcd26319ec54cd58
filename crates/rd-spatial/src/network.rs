//! Road graph over named locations.
//!
//! # Data layout
//!
//! Location names are interned once into dense [`NodeId`]s; adjacency is a
//! `Vec<Vec<RoadEdge>>` indexed by `NodeId`, so Dijkstra's inner loop is a
//! contiguous slice scan with no string hashing.  Unlike a frozen CSR layout
//! the graph stays mutable: roads can be added at any time.
//!
//! Every road is undirected and stored as two directed adjacency entries.
//! Adding the same pair twice keeps both entries; they are alternative
//! parallel roads, not duplicates.

use rustc_hash::FxHashMap;
use tracing::debug;

use rd_core::NodeId;

use crate::{SpatialError, SpatialResult};

/// One directed adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadEdge {
    pub to:     NodeId,
    /// Distance or travel time; always finite and `>= 0`.
    pub weight: f64,
}

/// Undirected weighted graph of named locations.
///
/// # Example
///
/// ```
/// use rd_spatial::RoadGraph;
///
/// let mut g = RoadGraph::new();
/// g.add_road("A", "B", 5.0).unwrap();
/// g.add_road("A", "C", 10.0).unwrap();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 4); // two directed entries per road
/// assert!(g.add_road("A", "D", -1.0).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    names:     Vec<String>,
    index:     FxHashMap<String, NodeId>,
    adjacency: Vec<Vec<RoadEdge>>,
    edges:     usize,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Intern `name`, returning its existing id or a fresh one.
    pub fn add_location(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add an undirected road between `a` and `b`.
    ///
    /// # Errors
    ///
    /// [`SpatialError::InvalidEdge`] if `weight` is negative or not finite.
    /// The graph is left untouched in that case (no locations are interned).
    pub fn add_road(&mut self, a: &str, b: &str, weight: f64) -> SpatialResult<()> {
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(SpatialError::InvalidEdge {
                from: a.to_owned(),
                to: b.to_owned(),
                weight,
            });
        }
        let na = self.add_location(a);
        let nb = self.add_location(b);
        self.adjacency[na.index()].push(RoadEdge { to: nb, weight });
        self.adjacency[nb.index()].push(RoadEdge { to: na, weight });
        self.edges += 2;
        debug!(from = a, to = b, weight, "road added");
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// The id of `name`, or `None` if it has never been added.
    #[inline]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// The name of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` was not produced by this graph.
    #[inline]
    pub fn name(&self, node: NodeId) -> &str {
        &self.names[node.index()]
    }

    /// Outgoing adjacency entries of `node`.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[RoadEdge] {
        &self.adjacency[node.index()]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All location names in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed adjacency entries (twice the number of roads).
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
