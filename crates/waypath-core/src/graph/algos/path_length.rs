use crate::graph::types::{RouteLength, Weight};
use crate::graph::Graph;
use std::hash::Hash;

/// Sum the edge weights along `path`.
///
/// Each consecutive pair must name two nodes joined by an edge; the first
/// matching edge in declaration order is taken. An empty path, an unknown
/// element in a pair, a missing edge or a total beyond the `Weight` range
/// yields `NoSuchRoute`. A single element has no pair to check and measures 0.
#[tracing::instrument(skip_all, fields(len = path.len()))]
pub fn path_length<T>(graph: &Graph<T>, path: &[T]) -> RouteLength
where
    T: Eq + Hash + Clone,
{
    if path.is_empty() {
        return RouteLength::NoSuchRoute;
    }

    let mut dist: Weight = 0;
    for pair in path.windows(2) {
        let (Some(from), Some(to)) = (graph.get_node(&pair[0]), graph.get_node(&pair[1])) else {
            return RouteLength::NoSuchRoute;
        };

        let Some(edge) = graph.out_edges(from).iter().find(|edge| edge.to_node() == to) else {
            tracing::debug!(%from, %to, "no connecting edge");
            return RouteLength::NoSuchRoute;
        };

        let Some(total) = dist.checked_add(edge.weight()) else {
            tracing::warn!(%from, %to, "walk length overflows");
            return RouteLength::NoSuchRoute;
        };
        dist = total;
    }

    RouteLength::Distance(dist)
}
