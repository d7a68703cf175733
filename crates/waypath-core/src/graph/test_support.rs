use super::{Graph, Weight};

/// The nine-edge town graph used throughout the query tests
pub(crate) const REFERENCE_EDGES: [(char, char, Weight); 9] = [
    ('A', 'B', 5),
    ('B', 'C', 4),
    ('C', 'D', 8),
    ('D', 'C', 8),
    ('D', 'E', 6),
    ('A', 'D', 5),
    ('C', 'E', 2),
    ('E', 'B', 3),
    ('A', 'E', 7),
];

pub(crate) fn graph_from(edges: &[(char, char, Weight)]) -> Graph<char> {
    let mut graph = Graph::new();
    for &(from, to, weight) in edges {
        graph.connect(from, to, weight);
    }
    graph
}

pub(crate) fn reference_graph() -> Graph<char> {
    graph_from(&REFERENCE_EDGES)
}
