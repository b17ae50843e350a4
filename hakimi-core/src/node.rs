//! Node identifiers and canonical undirected edges.

use std::{cmp::Ordering, fmt};

/// Identifier of a node, assigned from zero in degree-sequence input order.
///
/// # Examples
/// ```
/// use hakimi_core::NodeId;
///
/// let node = NodeId::new(4);
/// assert_eq!(node.get(), 4);
/// assert_eq!(node.to_string(), "4");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw zero-based index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw zero-based index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected edge stored in canonical form, lower endpoint first.
///
/// # Examples
/// ```
/// use hakimi_core::{Edge, NodeId};
///
/// let edge = Edge::new(NodeId::new(7), NodeId::new(2)).expect("distinct endpoints");
/// assert_eq!((edge.u().get(), edge.v().get()), (2, 7));
/// assert!(Edge::new(NodeId::new(3), NodeId::new(3)).is_none());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    u: NodeId,
    v: NodeId,
}

impl Edge {
    /// Builds the canonical edge joining `a` and `b`.
    ///
    /// Returns `None` when both endpoints are the same node, since self-loops
    /// cannot appear in a simple graph.
    #[must_use]
    pub fn new(a: NodeId, b: NodeId) -> Option<Self> {
        match a.cmp(&b) {
            Ordering::Less => Some(Self { u: a, v: b }),
            Ordering::Greater => Some(Self { u: b, v: a }),
            Ordering::Equal => None,
        }
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub const fn u(self) -> NodeId {
        self.u
    }

    /// Returns the higher endpoint.
    #[must_use]
    pub const fn v(self) -> NodeId {
        self.v
    }
}

/// Formats the edge as a uel line body: `"<u> <v>"`.
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.u, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0, 1, (0, 1))]
    #[case(1, 0, (0, 1))]
    #[case(9, 3, (3, 9))]
    fn edge_new_orders_endpoints(#[case] a: usize, #[case] b: usize, #[case] expected: (usize, usize)) {
        let edge = Edge::new(NodeId::new(a), NodeId::new(b)).expect("distinct endpoints");
        assert_eq!((edge.u().get(), edge.v().get()), expected);
    }

    #[test]
    fn edge_new_rejects_self_loops() {
        assert_eq!(Edge::new(NodeId::new(5), NodeId::new(5)), None);
    }

    #[test]
    fn edge_display_matches_uel_line() {
        let edge = Edge::new(NodeId::new(12), NodeId::new(3)).expect("distinct endpoints");
        assert_eq!(edge.to_string(), "3 12");
    }
}
