//! Degree sequences and graphicality checks.

use std::{cmp::Reverse, str::FromStr};

use crate::{
    error::{DegreeSequenceError, RealizeError},
    node::NodeId,
};

/// Requested degrees, one per node, in node-ID order.
///
/// # Examples
/// ```
/// use hakimi_core::DegreeSequence;
///
/// let sequence: DegreeSequence = "3 3 3 3".parse()?;
/// assert_eq!(sequence.len(), 4);
/// assert_eq!(sequence.degree_sum(), 12);
/// assert!(sequence.is_graphical());
/// # Ok::<(), hakimi_core::DegreeSequenceError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct DegreeSequence {
    degrees: Vec<usize>,
}

impl DegreeSequence {
    /// Wraps the requested degrees. Node `i` requests `degrees[i]` neighbours.
    #[must_use]
    pub const fn new(degrees: Vec<usize>) -> Self {
        Self { degrees }
    }

    /// Parses degrees separated by whitespace or commas.
    ///
    /// A `#` starts a comment that runs to the end of the line.
    ///
    /// # Errors
    /// Returns [`DegreeSequenceError::NegativeDegree`] for negative integers
    /// and [`DegreeSequenceError::InvalidToken`] for anything else that is not
    /// a non-negative integer.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::DegreeSequence;
    ///
    /// let sequence = DegreeSequence::parse("# hub first\n4, 1 1\n1 1\n")?;
    /// assert_eq!(sequence.as_slice(), &[4, 1, 1, 1, 1]);
    /// # Ok::<(), hakimi_core::DegreeSequenceError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, DegreeSequenceError> {
        let mut degrees = Vec::new();
        for (index, raw_line) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw_line.split('#').next().unwrap_or_default();
            for token in content
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
            {
                degrees.push(parse_degree(line, token)?);
            }
        }
        Ok(Self { degrees })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Returns `true` when the sequence has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Returns the degrees in node-ID order.
    #[must_use]
    pub const fn as_slice(&self) -> &[usize] {
        self.degrees.as_slice()
    }

    /// Returns the requested degree of `node`.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> Option<usize> {
        self.degrees.get(node.get()).copied()
    }

    /// Returns the sum of all requested degrees (twice the edge count of any realization).
    ///
    /// The sum is widened to `u128` so arbitrarily large degrees cannot
    /// overflow it.
    #[must_use]
    pub fn degree_sum(&self) -> u128 {
        self.degrees.iter().map(|&degree| widen(degree)).sum()
    }

    /// Returns the largest requested degree.
    #[must_use]
    pub fn max_degree(&self) -> Option<usize> {
        self.degrees.iter().copied().max()
    }

    /// Returns `true` when some simple graph realizes this sequence.
    #[must_use]
    pub fn is_graphical(&self) -> bool {
        self.check_graphical().is_ok()
    }

    /// Checks that the sequence is graphical.
    ///
    /// Checks run in order: even degree sum, every degree below the node
    /// count, then the Erdős–Gallai inequalities
    /// `sum(d[..k]) <= k(k-1) + sum(min(d[i], k) for i >= k)` over the
    /// degrees sorted in descending order.
    ///
    /// # Errors
    /// Returns [`RealizeError::OddDegreeSum`], [`RealizeError::DegreeTooLarge`],
    /// or [`RealizeError::NotGraphical`] for the first check that fails.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{DegreeSequence, RealizeError};
    ///
    /// let sequence = DegreeSequence::new(vec![3, 3, 1, 1]);
    /// assert!(matches!(
    ///     sequence.check_graphical(),
    ///     Err(RealizeError::NotGraphical { k: 2, .. })
    /// ));
    /// ```
    pub fn check_graphical(&self) -> Result<(), RealizeError> {
        let nodes = self.degrees.len();
        let sum = self.degree_sum();
        if !sum.is_multiple_of(2) {
            return Err(RealizeError::OddDegreeSum { sum });
        }
        if let Some((index, &degree)) = self
            .degrees
            .iter()
            .enumerate()
            .find(|(_, degree)| **degree >= nodes)
        {
            return Err(RealizeError::DegreeTooLarge {
                node: NodeId::new(index),
                degree,
                nodes,
            });
        }
        erdos_gallai(&self.degrees)
    }
}

fn parse_degree(line: usize, token: &str) -> Result<usize, DegreeSequenceError> {
    token.parse::<usize>().map_err(|_| match token.parse::<i64>() {
        Ok(value) if value < 0 => DegreeSequenceError::NegativeDegree { line, value },
        _ => DegreeSequenceError::InvalidToken {
            line,
            token: token.to_owned(),
        },
    })
}

const fn widen(value: usize) -> u128 {
    value as u128
}

/// Checks every Erdős–Gallai inequality in linear time after sorting.
///
/// Sums are kept in `u128`; with fewer than `2^64` degrees each below
/// `2^64`, no term can overflow.
fn erdos_gallai(degrees: &[usize]) -> Result<(), RealizeError> {
    let mut sorted = degrees.to_vec();
    sorted.sort_unstable_by_key(|&degree| Reverse(degree));

    let mut prefix = Vec::with_capacity(sorted.len() + 1);
    prefix.push(0u128);
    for &degree in &sorted {
        let last = prefix.last().copied().unwrap_or_default();
        prefix.push(last + widen(degree));
    }
    let prefix_at = |index: usize| prefix.get(index).copied().unwrap_or_default();
    let total = prefix_at(sorted.len());

    // `at_least` counts the entries with degree >= k; it only shrinks as k grows.
    let mut at_least = sorted.len();
    for k in 1..=sorted.len() {
        while at_least > 0 && sorted.get(at_least - 1).is_some_and(|&degree| degree < k) {
            at_least -= 1;
        }
        let lhs = prefix_at(k);
        let capped_until = at_least.max(k);
        let capped = widen(capped_until - k) * widen(k);
        let uncapped = total - prefix_at(capped_until);
        let rhs = widen(k) * widen(k - 1) + capped + uncapped;
        if lhs > rhs {
            return Err(RealizeError::NotGraphical { k, lhs, rhs });
        }
    }
    Ok(())
}

impl From<Vec<usize>> for DegreeSequence {
    fn from(degrees: Vec<usize>) -> Self {
        Self::new(degrees)
    }
}

impl FromIterator<usize> for DegreeSequence {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for DegreeSequence {
    type Err = DegreeSequenceError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rstest::rstest;

    use crate::test_utils::{graphical_sequence_strategy, suite_proptest_config};

    #[rstest]
    #[case::empty(vec![])]
    #[case::single_isolated(vec![0])]
    #[case::single_edge(vec![1, 1])]
    #[case::complete_k4(vec![3, 3, 3, 3])]
    #[case::star(vec![4, 1, 1, 1, 1])]
    #[case::path(vec![1, 2, 2, 1])]
    #[case::petersen(vec![3; 10])]
    fn accepts_graphical_sequences(#[case] degrees: Vec<usize>) {
        assert_eq!(DegreeSequence::new(degrees).check_graphical(), Ok(()));
    }

    #[rstest]
    #[case::odd_sum(vec![1, 1, 1], RealizeError::OddDegreeSum { sum: 3 })]
    #[case::odd_hub(vec![5, 1, 1, 1, 1], RealizeError::OddDegreeSum { sum: 9 })]
    #[case::hub_too_large(
        vec![4, 2, 1, 1],
        RealizeError::DegreeTooLarge { node: NodeId::new(0), degree: 4, nodes: 4 },
    )]
    #[case::self_loop_needed(
        vec![0, 2],
        RealizeError::DegreeTooLarge { node: NodeId::new(1), degree: 2, nodes: 2 },
    )]
    #[case::two_hubs(vec![3, 3, 1, 1], RealizeError::NotGraphical { k: 2, lhs: 6, rhs: 4 })]
    #[case::dense_tail(vec![4, 4, 4, 1, 1], RealizeError::NotGraphical { k: 2, lhs: 8, rhs: 6 })]
    #[case::huge_even_sum(
        vec![usize::MAX, usize::MAX],
        RealizeError::DegreeTooLarge { node: NodeId::new(0), degree: usize::MAX, nodes: 2 },
    )]
    #[case::huge_odd_sum(
        vec![usize::MAX, 2],
        RealizeError::OddDegreeSum { sum: widen(usize::MAX) + 2 },
    )]
    fn rejects_non_graphical_sequences(#[case] degrees: Vec<usize>, #[case] expected: RealizeError) {
        assert_eq!(DegreeSequence::new(degrees).check_graphical(), Err(expected));
    }

    #[rstest]
    #[case("1 2 3", vec![1, 2, 3])]
    #[case("1,2,3", vec![1, 2, 3])]
    #[case(" 4 ,\n\t2\n", vec![4, 2])]
    #[case("# header only\n", vec![])]
    #[case("3 3 # trailing comment\n3 3", vec![3, 3, 3, 3])]
    fn parse_accepts_separators_and_comments(#[case] text: &str, #[case] expected: Vec<usize>) {
        let sequence = DegreeSequence::parse(text).expect("input must parse");
        assert_eq!(sequence.as_slice(), expected.as_slice());
    }

    #[rstest]
    #[case(
        "1 2\n3 -4",
        DegreeSequenceError::NegativeDegree { line: 2, value: -4 },
    )]
    #[case(
        "1 two",
        DegreeSequenceError::InvalidToken { line: 1, token: "two".to_owned() },
    )]
    #[case(
        "1.5",
        DegreeSequenceError::InvalidToken { line: 1, token: "1.5".to_owned() },
    )]
    fn parse_rejects_invalid_tokens(#[case] text: &str, #[case] expected: DegreeSequenceError) {
        assert_eq!(DegreeSequence::parse(text), Err(expected));
    }

    #[test]
    fn summary_accessors_report_sequence_shape() {
        let sequence = DegreeSequence::new(vec![2, 0, 3, 1]);
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.degree_sum(), 6);
        assert_eq!(sequence.max_degree(), Some(3));
        assert_eq!(sequence.degree(NodeId::new(2)), Some(3));
        assert_eq!(sequence.degree(NodeId::new(4)), None);
        assert!(DegreeSequence::default().is_empty());
    }

    #[test]
    fn degree_sum_does_not_wrap() {
        let sequence = DegreeSequence::new(vec![usize::MAX; 3]);
        assert_eq!(sequence.degree_sum(), widen(usize::MAX) * 3);
    }

    /// Reference Erdős–Gallai check written directly from the definition.
    fn quadratic_erdos_gallai(degrees: &[usize]) -> bool {
        let mut sorted = degrees.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        (1..=sorted.len()).all(|k| {
            let lhs: usize = sorted[..k].iter().sum();
            let rhs = k * (k - 1) + sorted[k..].iter().map(|&d| d.min(k)).sum::<usize>();
            lhs <= rhs
        })
    }

    proptest! {
        #![proptest_config(suite_proptest_config(256))]

        #[test]
        fn sequences_of_real_graphs_are_graphical(sequence in graphical_sequence_strategy(24)) {
            prop_assert!(sequence.is_graphical());
        }

        #[test]
        fn linear_check_matches_definition(
            degrees in proptest::collection::vec(0usize..8, 0..10),
        ) {
            let sequence = DegreeSequence::new(degrees.clone());
            let sum_even = sequence.degree_sum().is_multiple_of(2);
            let bounded = degrees.iter().all(|&d| d < degrees.len());
            let expected = sum_even && bounded && quadratic_erdos_gallai(&degrees);
            prop_assert_eq!(sequence.is_graphical(), expected);
        }
    }
}
