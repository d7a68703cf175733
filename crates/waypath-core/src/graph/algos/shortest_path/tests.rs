use super::*;
use crate::graph::test_support::{graph_from, reference_graph};

#[test]
fn test_reference_shortest_distance() {
    let graph = reference_graph();
    assert_eq!(shortest_path(&graph, &'A', &'C'), Distance::Finite(9));
}

#[test]
fn test_cycle_query_returns_shortest_return_trip() {
    let graph = reference_graph();
    assert_eq!(shortest_path(&graph, &'B', &'B'), Distance::Finite(9));
    assert_eq!(shortest_path(&graph, &'C', &'C'), Distance::Finite(9));
}

#[test]
fn test_node_without_return_has_no_cycle() {
    let graph = reference_graph();
    assert_eq!(shortest_path(&graph, &'A', &'A'), Distance::Infinite);
}

#[test]
fn test_unreachable_target_is_infinite() {
    let graph = reference_graph();
    assert_eq!(shortest_path(&graph, &'C', &'A'), Distance::Infinite);
}

#[test]
fn test_unknown_elements_are_infinite() {
    let graph = reference_graph();
    assert_eq!(shortest_path(&graph, &'Z', &'A'), Distance::Infinite);
    assert_eq!(shortest_path(&graph, &'A', &'Z'), Distance::Infinite);
}

#[test]
fn test_self_loop_is_a_cycle() {
    let graph = graph_from(&[('X', 'X', 2), ('X', 'Y', 1), ('Y', 'X', 5)]);
    assert_eq!(shortest_path(&graph, &'X', &'X'), Distance::Finite(2));
}

#[test]
fn test_cheaper_later_parallel_edge_is_used() {
    let graph = graph_from(&[('A', 'B', 9), ('A', 'B', 2), ('B', 'A', 4), ('B', 'A', 1)]);
    assert_eq!(shortest_path(&graph, &'A', &'B'), Distance::Finite(2));
    assert_eq!(shortest_path(&graph, &'A', &'A'), Distance::Finite(3));
}

#[test]
fn test_zero_weight_edges() {
    let graph = graph_from(&[('A', 'B', 0), ('B', 'C', 0), ('A', 'C', 1)]);
    assert_eq!(shortest_path(&graph, &'A', &'C'), Distance::ZERO);
}

#[test]
fn test_route_reconstruction() {
    let graph = reference_graph();
    assert_eq!(
        shortest_route(&graph, &'A', &'C'),
        Some(Route {
            distance: 9,
            nodes: vec!['A', 'B', 'C'],
        })
    );
    assert_eq!(
        shortest_route(&graph, &'A', &'D'),
        Some(Route {
            distance: 5,
            nodes: vec!['A', 'D'],
        })
    );
}

#[test]
fn test_cycle_route_starts_and_ends_at_start() {
    let graph = reference_graph();
    let route = shortest_route(&graph, &'B', &'B').unwrap();
    assert_eq!(route.distance, 9);
    assert_eq!(route.nodes, vec!['B', 'C', 'E', 'B']);
}

#[test]
fn test_route_unreachable_is_none() {
    let graph = reference_graph();
    assert_eq!(shortest_route(&graph, &'C', &'A'), None);
    assert_eq!(shortest_route(&graph, &'A', &'A'), None);
}

#[test]
fn test_distance_beyond_weight_range_is_unreachable() {
    let graph = graph_from(&[('A', 'B', i64::MAX), ('B', 'C', 1), ('B', 'A', 1)]);
    assert_eq!(shortest_path(&graph, &'A', &'B'), Distance::Finite(i64::MAX));
    assert_eq!(shortest_path(&graph, &'A', &'C'), Distance::Infinite);
    assert_eq!(shortest_path(&graph, &'A', &'A'), Distance::Infinite);
    assert!(shortest_route(&graph, &'A', &'C').is_none());
}
