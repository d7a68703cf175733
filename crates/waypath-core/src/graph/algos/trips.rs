use super::shortest_path::relax;
use crate::error::{Result, WaypathError};
use crate::graph::types::{Distance, NodeId, TripBudget};
use crate::graph::Graph;
use std::hash::Hash;

/// Pending walk prefix: where it stands and what budget remains
struct Frame {
    node: NodeId,
    budget: i64,
    first: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Count walks from `start` to `finish` under `budget`.
///
/// In [`TripBudget::Hops`] mode every walk of exactly `budget` edges that
/// ends at `finish` is counted. In [`TripBudget::Weight`] mode each arrival at
/// `finish` with budget still positive counts once, and the walk keeps going,
/// so one walk passing `finish` twice contributes two trips.
///
/// Walks may revisit nodes and edges. Unknown elements yield 0.
///
/// Weight mode fails with [`WaypathError::InvalidValue`] when a negative edge
/// is reachable from `start`, or when a zero-weight cycle can be entered with
/// budget left, since either would make the walk count unbounded.
#[tracing::instrument(skip(graph, start, finish))]
pub fn num_trips<T>(
    graph: &Graph<T>,
    start: &T,
    finish: &T,
    budget: i64,
    mode: TripBudget,
) -> Result<u64>
where
    T: Eq + Hash + Clone,
{
    let (Some(start), Some(finish)) = (graph.get_node(start), graph.get_node(finish)) else {
        return Ok(0);
    };

    if matches!(mode, TripBudget::Weight { .. }) && budget > 0 {
        check_weighted_walks(graph, start, budget)?;
    }

    let first_call = matches!(mode, TripBudget::Weight { first_call: true });
    let mut stack = vec![Frame {
        node: start,
        budget,
        first: first_call,
    }];
    let mut count = 0u64;

    while let Some(Frame {
        node,
        budget,
        first,
    }) = stack.pop()
    {
        match mode {
            TripBudget::Hops => {
                if budget == 0 {
                    count += u64::from(node == finish);
                    continue;
                }
                if budget < 0 {
                    continue;
                }
            }
            TripBudget::Weight { .. } => {
                if budget <= 0 {
                    continue;
                }
                if node == finish && !first {
                    count += 1;
                }
            }
        }

        for edge in graph.out_edges(node) {
            let cost = match mode {
                TripBudget::Hops => 1,
                TripBudget::Weight { .. } => edge.weight(),
            };
            stack.push(Frame {
                node: edge.to_node(),
                budget: budget.saturating_sub(cost),
                first: false,
            });
        }
    }

    tracing::debug!(count, "trips counted");
    Ok(count)
}

/// Reject graphs on which weighted enumeration from `start` never ends
fn check_weighted_walks<T>(graph: &Graph<T>, start: NodeId, budget: i64) -> Result<()>
where
    T: Eq + Hash + Clone,
{
    // Dijkstra still finds every reachable node when weights are negative
    let dist = relax(graph, start).dist;

    if let Some(edge) = graph
        .edges()
        .find(|edge| edge.weight() < 0 && dist[edge.from_node().0].is_finite())
    {
        return Err(WaypathError::invalid_value(
            "edge weight",
            format!(
                "{} on {} -> {}; weighted trips need non-negative weights",
                edge.weight(),
                edge.from_node(),
                edge.to_node()
            ),
        ));
    }

    if let Some(node) = zero_weight_cycle(graph, &dist, budget) {
        return Err(WaypathError::invalid_value(
            "trip graph",
            format!(
                "zero-weight cycle through {} is reachable within budget {}",
                node, budget
            ),
        ));
    }

    Ok(())
}

/// A node on a cycle of zero-weight edges whose nodes all sit closer to the
/// start than `budget`. Such a cycle is where weighted walks never run out of
/// budget.
fn zero_weight_cycle<T>(graph: &Graph<T>, dist: &[Distance], budget: i64) -> Option<NodeId>
where
    T: Eq + Hash + Clone,
{
    let limit = Distance::Finite(budget);
    let mut marks = vec![Mark::Unvisited; dist.len()];

    for root in graph.get_all_nodes() {
        if marks[root.0] != Mark::Unvisited || dist[root.0] >= limit {
            continue;
        }

        marks[root.0] = Mark::OnPath;
        let mut path = vec![(root, 0usize)];

        while let Some((node, next_edge)) = path.last_mut() {
            let node = *node;
            match graph.out_edges(node).get(*next_edge) {
                Some(edge) => {
                    *next_edge += 1;
                    if edge.weight() != 0 {
                        continue;
                    }
                    let to = edge.to_node();
                    match marks[to.0] {
                        Mark::OnPath => return Some(to),
                        Mark::Unvisited => {
                            marks[to.0] = Mark::OnPath;
                            path.push((to, 0));
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[node.0] = Mark::Done;
                    path.pop();
                }
            }
        }
    }

    None
}
