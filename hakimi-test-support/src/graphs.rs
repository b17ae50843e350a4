//! Proptest strategies over simple graphs.

use proptest::prelude::*;

/// Generates degree sequences of random simple graphs on up to `max_nodes`
/// nodes, so every value is graphical by construction.
///
/// Each sequence is read off a random subset of the possible edges; degrees
/// are listed in node-ID order.
///
/// # Examples
///
/// ```
/// use hakimi_test_support::graphs::graphical_degrees;
/// use proptest::strategy::{Strategy, ValueTree};
/// use proptest::test_runner::TestRunner;
///
/// let mut runner = TestRunner::deterministic();
/// let degrees = graphical_degrees(6).new_tree(&mut runner)?.current();
/// assert!(degrees.len() <= 6);
/// assert!(degrees.iter().sum::<usize>().is_multiple_of(2));
/// # Ok::<(), proptest::test_runner::Reason>(())
/// ```
pub fn graphical_degrees(max_nodes: usize) -> impl Strategy<Value = Vec<usize>> {
    (0..=max_nodes)
        .prop_flat_map(|nodes| {
            let pairs: Vec<(usize, usize)> = (0..nodes)
                .flat_map(|u| ((u + 1)..nodes).map(move |v| (u, v)))
                .collect();
            let picks = proptest::sample::subsequence(pairs.clone(), 0..=pairs.len());
            (Just(nodes), picks)
        })
        .prop_map(|(nodes, edges)| degrees_of(nodes, &edges))
}

fn degrees_of(nodes: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut degrees = vec![0; nodes];
    for &(u, v) in edges {
        for endpoint in [u, v] {
            if let Some(degree) = degrees.get_mut(endpoint) {
                *degree += 1;
            }
        }
    }
    degrees
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::no_edges(3, vec![], vec![0, 0, 0])]
    #[case::triangle(3, vec![(0, 1), (0, 2), (1, 2)], vec![2, 2, 2])]
    #[case::star(4, vec![(0, 1), (0, 2), (0, 3)], vec![3, 1, 1, 1])]
    fn degrees_count_edge_endpoints(
        #[case] nodes: usize,
        #[case] edges: Vec<(usize, usize)>,
        #[case] expected: Vec<usize>,
    ) {
        assert_eq!(degrees_of(nodes, &edges), expected);
    }

    proptest! {
        #[test]
        fn degrees_are_bounded_and_sum_evenly(degrees in graphical_degrees(10)) {
            let nodes = degrees.len();
            prop_assert!(nodes <= 10);
            prop_assert!(degrees.iter().all(|&degree| degree < nodes.max(1)));
            prop_assert!(degrees.iter().sum::<usize>().is_multiple_of(2));
        }
    }
}
