//! Shared helpers for `hakimi-core` integration tests.

use hakimi_core::{AdjacencyMap, DegreeSequence, OrderMode};

/// Every order mode.
pub const ORDER_MODES: [OrderMode; 3] = [
    OrderMode::SmallestFirst,
    OrderMode::LargestFirst,
    OrderMode::Randomized,
];

/// Asserts that `graph` is a simple undirected graph realizing `sequence`.
#[expect(clippy::expect_used, reason = "tests require contextual panics")]
pub fn assert_realizes(graph: &AdjacencyMap, sequence: &DegreeSequence) {
    assert_eq!(graph.node_count(), sequence.len());
    assert_eq!(graph.degrees(), sequence.as_slice());
    assert_eq!(
        u128::try_from(graph.edge_count() * 2).ok(),
        Some(sequence.degree_sum())
    );
    for node in graph.nodes() {
        let neighbours = graph.neighbours(node).expect("node must exist");
        assert!(!neighbours.contains(&node), "self-loop on {node}");
        for &other in neighbours {
            assert!(
                graph.contains_edge(other, node),
                "edge {node}-{other} is missing its mirror"
            );
        }
    }
}
