use crate::graph::priority_queue::PriorityQueue;
use crate::graph::types::{Distance, NodeId, Route};
use crate::graph::Graph;
use crate::trace_time;
use std::hash::Hash;
use std::time::Instant;

/// Distances and predecessors from one source, indexed by node
#[derive(Debug)]
pub(crate) struct ShortestPathTable {
    start: NodeId,
    pub(crate) dist: Vec<Distance>,
    prev: Vec<Option<NodeId>>,
}

impl ShortestPathTable {
    /// Walk predecessors back from `finish` to `start`.
    ///
    /// For `finish == start` this follows the cycle recorded by the cycle pass.
    fn route(&self, finish: NodeId) -> Option<Vec<NodeId>> {
        let mut nodes = vec![finish];
        let mut curr = self.prev[finish.0]?;
        while curr != self.start {
            // A predecessor chain is a tree path, so it cannot be longer
            // than the node count
            if nodes.len() > self.dist.len() {
                return None;
            }
            nodes.push(curr);
            curr = self.prev[curr.0]?;
        }
        nodes.push(self.start);
        nodes.reverse();
        Some(nodes)
    }
}

/// Dijkstra relaxation from `start`; `dist[start]` stays 0
pub(crate) fn relax<T>(graph: &Graph<T>, start: NodeId) -> ShortestPathTable
where
    T: Eq + Hash + Clone,
{
    let n = graph.node_count();
    let mut dist = vec![Distance::Infinite; n];
    let mut prev = vec![None; n];
    dist[start.0] = Distance::ZERO;

    let mut queue = PriorityQueue::new(
        graph
            .get_all_nodes()
            .into_iter()
            .map(|id| (id, dist[id.0])),
    );

    while let Some(curr) = queue.extract_min() {
        for edge in graph.out_edges(curr) {
            let next = edge.to_node();
            let candidate = dist[curr.0] + edge.weight();
            if dist[next.0] > candidate {
                dist[next.0] = candidate;
                queue.update_priority(&next, candidate);
                prev[next.0] = Some(curr);
            }
        }
    }

    ShortestPathTable { start, dist, prev }
}

/// Dijkstra relaxation from `start` followed by the return-cycle pass
fn solve<T>(graph: &Graph<T>, start: NodeId) -> ShortestPathTable
where
    T: Eq + Hash + Clone,
{
    let started = Instant::now();
    let ShortestPathTable {
        start,
        mut dist,
        mut prev,
    } = relax(graph, start);

    // Replace the trivial zero-length path with the shortest way back
    let finalized = dist.clone();
    dist[start.0] = Distance::Infinite;
    for edge in graph.edges() {
        if edge.to_node() != start {
            continue;
        }
        let source = edge.from_node();
        if !finalized[source.0].is_finite() {
            continue;
        }
        let candidate = finalized[source.0] + edge.weight();
        if dist[start.0] > candidate {
            dist[start.0] = candidate;
            prev[start.0] = Some(source);
        }
    }

    trace_time!(started, "shortest_path_solve", nodes = dist.len());
    ShortestPathTable { start, dist, prev }
}

/// Shortest distance from `start` to `finish`.
///
/// When `start == finish` the answer is the shortest non-empty cycle through
/// `start`, not 0. Unknown elements and unreachable targets give
/// [`Distance::Infinite`]. Edge weights must be non-negative.
#[tracing::instrument(skip_all)]
pub fn shortest_path<T>(graph: &Graph<T>, start: &T, finish: &T) -> Distance
where
    T: Eq + Hash + Clone,
{
    let (Some(start), Some(finish)) = (graph.get_node(start), graph.get_node(finish)) else {
        return Distance::Infinite;
    };

    let table = solve(graph, start);
    let distance = table.dist[finish.0];
    tracing::debug!(%start, %finish, %distance, "shortest path");
    distance
}

/// Shortest walk from `start` to `finish`, with the elements it visits.
///
/// `None` when the target is unreachable. A cycle query returns a walk that
/// begins and ends at `start`.
#[tracing::instrument(skip_all)]
pub fn shortest_route<T>(graph: &Graph<T>, start: &T, finish: &T) -> Option<Route<T>>
where
    T: Eq + Hash + Clone,
{
    let start = graph.get_node(start)?;
    let finish = graph.get_node(finish)?;

    let table = solve(graph, start);
    let distance = table.dist[finish.0].finite()?;
    let nodes = table
        .route(finish)?
        .into_iter()
        .filter_map(|id| graph.element(id).cloned())
        .collect();

    Some(Route { distance, nodes })
}

#[cfg(test)]
mod tests;
