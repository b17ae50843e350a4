//! Adjacency storage for realized graphs.

use std::collections::BTreeSet;

use crate::node::{Edge, NodeId};

/// Undirected simple graph stored as one ordered neighbour set per node.
///
/// Every edge is stored in both directions. Nodes are numbered in input
/// order and isolated nodes keep an empty neighbour set, so
/// [`Self::node_count`] always equals the length of the realized sequence.
///
/// # Examples
/// ```
/// use hakimi_core::{DegreeSequence, NodeId, OrderMode, realize};
///
/// let graph = realize(&DegreeSequence::new(vec![1, 1, 0]), OrderMode::SmallestFirst)?;
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.contains_edge(NodeId::new(0), NodeId::new(1)));
/// assert_eq!(graph.degree(NodeId::new(2)), Some(0));
/// # Ok::<(), hakimi_core::RealizeError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdjacencyMap {
    neighbours: Vec<BTreeSet<NodeId>>,
    edge_count: usize,
}

impl AdjacencyMap {
    pub(crate) fn with_nodes(node_count: usize) -> Self {
        Self {
            neighbours: vec![BTreeSet::new(); node_count],
            edge_count: 0,
        }
    }

    /// Inserts the undirected edge `a`–`b`.
    ///
    /// Returns `false` without modifying the map when the edge would be a
    /// self-loop, a parallel edge, or touch an unknown node.
    pub(crate) fn connect(&mut self, a: NodeId, b: NodeId) -> bool {
        if a == b || a.get() >= self.neighbours.len() || b.get() >= self.neighbours.len() {
            return false;
        }
        let inserted = self
            .neighbours
            .get_mut(a.get())
            .is_some_and(|set| set.insert(b));
        if !inserted {
            return false;
        }
        if let Some(set) = self.neighbours.get_mut(b.get()) {
            set.insert(a);
        }
        self.edge_count += 1;
        true
    }

    /// Returns the number of nodes, including isolated ones.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.neighbours.len()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` when the map holds no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Iterates over all node identifiers in ascending order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.neighbours.len()).map(NodeId::new)
    }

    /// Returns the neighbour set of `node`, or `None` for unknown nodes.
    #[must_use]
    pub fn neighbours(&self, node: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.neighbours.get(node.get())
    }

    /// Returns the realized degree of `node`, or `None` for unknown nodes.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> Option<usize> {
        self.neighbours(node).map(BTreeSet::len)
    }

    /// Returns the realized degree of every node in node-ID order.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.neighbours.iter().map(BTreeSet::len).collect()
    }

    /// Returns `true` when `a` and `b` are adjacent.
    #[must_use]
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbours(a).is_some_and(|set| set.contains(&b))
    }

    /// Iterates over every undirected edge exactly once.
    ///
    /// For each node `u` in ascending order, each neighbour `v` is visited in
    /// ascending order and the pair is yielded only when `v > u`. The mirrored
    /// direction stored under `v` is skipped, so the sequence is canonical and
    /// sorted.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.neighbours
            .iter()
            .enumerate()
            .flat_map(|(index, set)| {
                let u = NodeId::new(index);
                set.range(NodeId::new(index + 1)..)
                    .filter_map(move |&v| Edge::new(u, v))
            })
    }
}
