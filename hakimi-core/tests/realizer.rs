//! Tests for the realization API and its diagnostics.
#![expect(clippy::expect_used, reason = "tests require contextual panics")]

mod common;

use common::{ORDER_MODES, assert_realizes};
use hakimi_core::{
    DegreeSequence, NodeId, OrderMode, RealizeError, RealizerBuilder, Validation, realize,
};
use hakimi_test_support::tracing::RecordingLayer;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn complete_k4() -> DegreeSequence {
    DegreeSequence::new(vec![3, 3, 3, 3])
}

#[rstest]
fn complete_graph_is_realized_by_every_mode(complete_k4: DegreeSequence) {
    for order_mode in ORDER_MODES {
        let graph = realize(&complete_k4, order_mode).expect("K4 is graphical");
        assert_realizes(&graph, &complete_k4);
        assert_eq!(graph.edge_count(), 6);
        for (u, v) in [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)] {
            assert!(graph.contains_edge(NodeId::new(u), NodeId::new(v)));
        }
    }
}

#[rstest]
#[case::pair(vec![1, 1])]
#[case::star(vec![4, 1, 1, 1, 1])]
#[case::path(vec![1, 2, 2, 1])]
#[case::isolated_tail(vec![2, 2, 2, 0, 0])]
#[case::petersen(vec![3; 10])]
#[case::mixed(vec![5, 4, 3, 3, 2, 2, 2, 1])]
fn graphical_sequences_are_realized(#[case] degrees: Vec<usize>) {
    let sequence = DegreeSequence::new(degrees);
    for order_mode in ORDER_MODES {
        let graph = RealizerBuilder::new()
            .with_order_mode(order_mode)
            .with_rng_seed(42)
            .build()
            .realize(&sequence)
            .expect("sequence is graphical");
        assert_realizes(&graph, &sequence);
    }
}

#[rstest]
fn single_pair_produces_one_edge() {
    let graph = realize(&DegreeSequence::new(vec![1, 1]), OrderMode::SmallestFirst)
        .expect("pair is graphical");
    let edges: Vec<String> = graph.edges().map(|edge| edge.to_string()).collect();
    assert_eq!(edges, vec!["0 1".to_owned()]);
}

#[rstest]
fn all_zero_sequence_has_no_edges() {
    let sequence = DegreeSequence::new(vec![0; 6]);
    let graph = realize(&sequence, OrderMode::LargestFirst).expect("zeros are graphical");
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 0);
}

#[rstest]
#[case::odd(vec![1, 1, 1], RealizeError::OddDegreeSum { sum: 3 })]
#[case::too_large(
    vec![3, 1, 1, 1, 0, 2, 2, 8],
    RealizeError::DegreeTooLarge { node: NodeId::new(7), degree: 8, nodes: 8 },
)]
#[case::erdos_gallai(vec![3, 3, 1, 1], RealizeError::NotGraphical { k: 2, lhs: 6, rhs: 4 })]
fn upfront_validation_names_the_failure(#[case] degrees: Vec<usize>, #[case] expected: RealizeError) {
    for order_mode in ORDER_MODES {
        let err = realize(&DegreeSequence::new(degrees.clone()), order_mode)
            .expect_err("sequence is not graphical");
        assert_eq!(err, expected);
        assert!(!err.is_reduction_failure());
    }
}

#[rstest]
fn reduction_validation_fails_for_every_mode() {
    let sequence = DegreeSequence::new(vec![5, 1, 1, 1, 1]);
    for order_mode in ORDER_MODES {
        let err = RealizerBuilder::new()
            .with_order_mode(order_mode)
            .with_validation(Validation::DuringReduction)
            .with_rng_seed(3)
            .build()
            .realize(&sequence)
            .expect_err("hub cannot reach five neighbours");
        assert!(
            matches!(err, RealizeError::InsufficientNodes { .. }),
            "{order_mode}: unexpected {err:?}"
        );
        assert!(err.is_reduction_failure());
    }
}

#[rstest]
fn reduction_validation_reports_exhausted_neighbours() {
    let err = RealizerBuilder::new()
        .with_order_mode(OrderMode::LargestFirst)
        .with_validation(Validation::DuringReduction)
        .build()
        .realize(&DegreeSequence::new(vec![2, 0, 0]))
        .expect_err("hub needs two neighbours with spare degree");
    assert_eq!(
        err,
        RealizeError::DegreeExhausted {
            node: NodeId::new(0),
            neighbour: NodeId::new(1),
        }
    );
}

#[rstest]
#[case(OrderMode::SmallestFirst)]
#[case(OrderMode::LargestFirst)]
fn deterministic_modes_repeat_exactly(#[case] order_mode: OrderMode) {
    let sequence = DegreeSequence::new(vec![4, 3, 3, 2, 2, 2, 1, 1]);
    let first = realize(&sequence, order_mode).expect("sequence is graphical");
    let second = realize(&sequence, order_mode).expect("sequence is graphical");
    assert_eq!(first, second);
}

#[rstest]
fn injected_rng_drives_randomized_order() {
    let sequence = DegreeSequence::new(vec![3, 3, 2, 2, 2, 2, 1, 1]);
    let realizer = RealizerBuilder::new()
        .with_order_mode(OrderMode::Randomized)
        .build();
    let first = realizer
        .realize_with_rng(&sequence, &mut SmallRng::seed_from_u64(99))
        .expect("sequence is graphical");
    let second = realizer
        .realize_with_rng(&sequence, &mut SmallRng::seed_from_u64(99))
        .expect("sequence is graphical");
    assert_eq!(first, second);
    assert_realizes(&first, &sequence);
}

#[rstest]
fn realize_records_span_and_completion_event(complete_k4: DegreeSequence) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let realizer = RealizerBuilder::new()
        .with_order_mode(OrderMode::LargestFirst)
        .build();

    tracing::subscriber::with_default(subscriber, || realizer.realize(&complete_k4))
        .expect("K4 is graphical");

    let span = layer.span("core.realize").expect("core.realize span must exist");
    assert_eq!(span.field("nodes"), Some("4"));
    assert_eq!(span.field("degree_sum"), Some("12"));
    assert_eq!(span.field("order"), Some("largest-first"));
    assert_eq!(span.field("validation"), Some("Upfront"));
    assert!(layer.has_event(Level::INFO, "realization completed"));
    let completed = layer
        .events()
        .into_iter()
        .find(|event| event.message() == Some("realization completed"))
        .expect("completion event");
    assert_eq!(completed.fields.get("edges"), Some(&"6".to_owned()));
}

#[rstest]
#[case(OrderMode::SmallestFirst, NodeId::new(1), 2)]
#[case(OrderMode::LargestFirst, NodeId::new(0), usize::MAX)]
fn oversized_degrees_fail_inside_the_recorded_span(
    #[case] order_mode: OrderMode,
    #[case] node: NodeId,
    #[case] degree: usize,
) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let realizer = RealizerBuilder::new()
        .with_order_mode(order_mode)
        .with_validation(Validation::DuringReduction)
        .build();

    let err = tracing::subscriber::with_default(subscriber, || {
        realizer.realize(&DegreeSequence::new(vec![usize::MAX, 2]))
    })
    .expect_err("no node can reach that many neighbours");

    assert_eq!(
        err,
        RealizeError::InsufficientNodes {
            node,
            degree,
            available: 1,
        }
    );
    let span = layer.span("core.realize").expect("core.realize span must exist");
    assert_eq!(span.field("degree_sum"), Some("18446744073709551617"));
}

#[rstest]
fn failed_realization_records_error_event() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let result = tracing::subscriber::with_default(subscriber, || {
        realize(&DegreeSequence::new(vec![1, 1, 1]), OrderMode::SmallestFirst)
    });
    assert!(result.is_err());
    assert!(
        layer
            .events()
            .iter()
            .any(|event| event.level == Level::ERROR)
    );
    assert!(!layer.has_event(Level::INFO, "realization completed"));
}
