//! Weighted directed graph and route queries
//!
//! Provides the graph registry and the algorithms that run over it:
//! - `path_length` for measuring a named walk
//! - `num_trips` for counting walks under a hop or weight budget
//! - `shortest_path` for Dijkstra-style distances, including return cycles

pub mod algos;
pub mod priority_queue;
pub mod types;

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Result, WaypathError};

pub use priority_queue::PriorityQueue;
pub use types::{
    Distance, Edge, Node, NodeId, Route, RouteLength, TripBudget, Weight, DEFAULT_WEIGHT,
};

/// Directed graph over element values `T`.
///
/// Each distinct element maps to exactly one node. Outgoing edges are kept
/// per node in declaration order, which decides ties between parallel edges.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    index: HashMap<T, NodeId>,
    nodes: Vec<Node<T>>,
    adjacency: Vec<Vec<Edge>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            nodes: Vec::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the node for `elt`, creating it on first sight
    pub fn add_node(&mut self, elt: T) -> NodeId {
        if let Some(id) = self.get_node(&elt) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.index.insert(elt.clone(), id);
        self.nodes.push(Node::new(id, elt));
        self.adjacency.push(Vec::new());
        id
    }

    /// Append a directed edge to `from`'s adjacency list.
    ///
    /// Parallel edges and self-loops are accepted as given.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<Edge> {
        if to.0 >= self.nodes.len() {
            return Err(WaypathError::UnknownNode { id: to.0 });
        }
        let edges = self
            .adjacency
            .get_mut(from.0)
            .ok_or(WaypathError::UnknownNode { id: from.0 })?;

        let edge = Edge::new(from, to, weight);
        edges.push(edge);
        Ok(edge)
    }

    /// Add both endpoints (if new) and the edge between them
    pub fn connect(&mut self, from: T, to: T, weight: Weight) -> Edge {
        let from = self.add_node(from);
        let to = self.add_node(to);
        let edge = Edge::new(from, to, weight);
        self.adjacency[from.0].push(edge);
        edge
    }

    pub fn get_node(&self, elt: &T) -> Option<NodeId> {
        self.index.get(elt).copied()
    }

    /// Outgoing edges of `node`; `None` when the handle is not ours
    pub fn get_node_edges(&self, node: NodeId) -> Option<&[Edge]> {
        self.adjacency.get(node.0).map(Vec::as_slice)
    }

    /// Every node handle in creation order
    pub fn get_all_nodes(&self) -> Vec<NodeId> {
        self.nodes.iter().map(Node::id).collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    pub fn element(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::elt)
    }

    /// Every edge, grouped by source node in creation order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.iter().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Outgoing edges of a handle known to belong to this graph
    pub(crate) fn out_edges(&self, node: NodeId) -> &[Edge] {
        self.get_node_edges(node).unwrap_or(&[])
    }

    /// Cumulative weight of the walk through `path`
    pub fn path_length(&self, path: &[T]) -> RouteLength {
        algos::path_length(self, path)
    }

    /// Count walks from `start` to `finish` within `budget`.
    ///
    /// Weight mode rejects graphs whose walks would never exhaust the budget;
    /// see [`algos::num_trips`].
    pub fn num_trips(
        &self,
        start: &T,
        finish: &T,
        budget: i64,
        mode: TripBudget,
    ) -> Result<u64> {
        algos::num_trips(self, start, finish, budget, mode)
    }

    /// Flag-based form of [`Graph::num_trips`]
    pub fn num_trips_with(
        &self,
        start: &T,
        finish: &T,
        budget: i64,
        use_weight: bool,
        first_call: bool,
    ) -> Result<u64> {
        self.num_trips(
            start,
            finish,
            budget,
            TripBudget::from_flags(use_weight, first_call),
        )
    }

    /// Shortest distance from `start` to `finish`; for `start == finish` the
    /// shortest non-empty cycle
    pub fn shortest_path(&self, start: &T, finish: &T) -> Distance {
        algos::shortest_path(self, start, finish)
    }

    /// Shortest walk from `start` to `finish` with its node sequence
    pub fn shortest_route(&self, start: &T, finish: &T) -> Option<Route<T>> {
        algos::shortest_route(self, start, finish)
    }
}

#[cfg(test)]
pub(crate) mod test_support;
