//! Havel–Hakimi reduction state.
//!
//! Remaining degrees live in a single arena indexed by node ID. The two
//! views the algorithm needs, the degree-sorted candidate list and the
//! processing order, hold node IDs only and look degrees up in the arena, so
//! a decrement is visible to both views at once and they cannot drift apart.

use std::cmp::Reverse;

use rand::{Rng, seq::SliceRandom};
use tracing::{debug, trace};

use crate::{
    Result,
    adjacency::AdjacencyMap,
    builder::OrderMode,
    error::RealizeError,
    node::NodeId,
    sequence::DegreeSequence,
};

pub(crate) struct Reduction {
    remaining: Vec<usize>,
    /// Unprocessed nodes by remaining degree, highest first.
    candidates: Vec<NodeId>,
    /// Unprocessed nodes in processing order.
    node_order: Vec<NodeId>,
    order_mode: OrderMode,
    adjacency: AdjacencyMap,
    steps: usize,
}

impl Reduction {
    pub(crate) fn new<R: Rng + ?Sized>(
        sequence: &DegreeSequence,
        order_mode: OrderMode,
        rng: &mut R,
    ) -> Self {
        let remaining = sequence.as_slice().to_vec();
        let candidates: Vec<NodeId> = (0..remaining.len()).map(NodeId::new).collect();
        let mut node_order = candidates.clone();
        if order_mode == OrderMode::Randomized {
            node_order.shuffle(rng);
        }
        Self {
            adjacency: AdjacencyMap::with_nodes(remaining.len()),
            remaining,
            candidates,
            node_order,
            order_mode,
            steps: 0,
        }
    }

    /// Runs the reduction to completion, returning the graph and the number
    /// of nodes processed.
    pub(crate) fn run(mut self) -> Result<(AdjacencyMap, usize)> {
        loop {
            self.sort_views();
            trace!(
                step = self.steps,
                node_order = ?self.view(&self.node_order),
                degree_sequence = ?self.view(&self.candidates),
                "reduction views",
            );
            if self.is_exhausted() {
                return Ok((self.adjacency, self.steps));
            }
            let Some(current) = self.pop_next() else {
                return Ok((self.adjacency, self.steps));
            };
            self.connect_to_candidates(current)?;
            self.steps += 1;
        }
    }

    fn remaining_of(remaining: &[usize], node: NodeId) -> usize {
        remaining.get(node.get()).copied().unwrap_or_default()
    }

    /// Re-sorts both views with stable sorts so equal degrees keep their prior order.
    fn sort_views(&mut self) {
        let remaining = &self.remaining;
        self.candidates
            .sort_by_key(|&node| Reverse(Self::remaining_of(remaining, node)));
        match self.order_mode {
            OrderMode::SmallestFirst => self
                .node_order
                .sort_by_key(|&node| Self::remaining_of(remaining, node)),
            OrderMode::LargestFirst => self
                .node_order
                .sort_by_key(|&node| Reverse(Self::remaining_of(remaining, node))),
            OrderMode::Randomized => {}
        }
    }

    /// `candidates` is sorted descending, so its head bounds every remaining degree.
    fn is_exhausted(&self) -> bool {
        self.candidates
            .first()
            .is_none_or(|&node| Self::remaining_of(&self.remaining, node) == 0)
    }

    /// Removes the next node to process from both views.
    fn pop_next(&mut self) -> Option<NodeId> {
        if self.node_order.is_empty() {
            return None;
        }
        let current = self.node_order.remove(0);
        if let Some(position) = self.candidates.iter().position(|&node| node == current) {
            self.candidates.remove(position);
        }
        Some(current)
    }

    /// Joins `current` to the candidates with the highest remaining degrees.
    fn connect_to_candidates(&mut self, current: NodeId) -> Result<()> {
        let degree = Self::remaining_of(&self.remaining, current);
        let available = self.candidates.len();
        debug!(node = %current, degree, available, "processing node");
        if degree > available {
            return Err(RealizeError::InsufficientNodes {
                node: current,
                degree,
                available,
            });
        }

        let Self {
            remaining,
            candidates,
            adjacency,
            ..
        } = self;
        for &neighbour in candidates.iter().take(degree) {
            match remaining.get_mut(neighbour.get()) {
                Some(value) if *value > 0 => *value -= 1,
                _ => {
                    return Err(RealizeError::DegreeExhausted {
                        node: current,
                        neighbour,
                    });
                }
            }
            adjacency.connect(current, neighbour);
        }
        if let Some(value) = remaining.get_mut(current.get()) {
            *value = 0;
        }
        Ok(())
    }

    fn view(&self, nodes: &[NodeId]) -> Vec<(usize, usize)> {
        nodes
            .iter()
            .map(|&node| (node.get(), Self::remaining_of(&self.remaining, node)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};

    fn run(degrees: Vec<usize>, order_mode: OrderMode) -> Result<(AdjacencyMap, usize)> {
        let mut rng = SmallRng::seed_from_u64(1);
        Reduction::new(&DegreeSequence::new(degrees), order_mode, &mut rng).run()
    }

    fn edges(map: &AdjacencyMap) -> Vec<(usize, usize)> {
        map.edges().map(|edge| (edge.u().get(), edge.v().get())).collect()
    }

    #[test]
    fn views_start_with_the_same_nodes() {
        let mut rng = SmallRng::seed_from_u64(9);
        let reduction = Reduction::new(
            &DegreeSequence::new(vec![2, 2, 1, 1, 0]),
            OrderMode::Randomized,
            &mut rng,
        );
        let mut ordered = reduction.node_order.clone();
        ordered.sort();
        assert_eq!(ordered, reduction.candidates);
    }

    #[test]
    fn largest_first_builds_the_hub_first() {
        let (map, steps) = run(vec![3, 1, 1, 1], OrderMode::LargestFirst).expect("star is graphical");
        assert_eq!(edges(&map), vec![(0, 1), (0, 2), (0, 3)]);
        assert_eq!(steps, 1);
    }

    #[test]
    fn smallest_first_processes_leaves_before_the_hub() {
        let (map, steps) =
            run(vec![3, 1, 1, 1], OrderMode::SmallestFirst).expect("star is graphical");
        assert_eq!(edges(&map), vec![(0, 1), (0, 2), (0, 3)]);
        assert_eq!(steps, 3);
    }

    #[test]
    fn zero_degree_nodes_terminate_immediately() {
        let (map, steps) = run(vec![0, 0, 0], OrderMode::SmallestFirst).expect("empty graph");
        assert_eq!(map.edge_count(), 0);
        assert_eq!(map.node_count(), 3);
        assert_eq!(steps, 0);
    }

    #[test]
    fn decrementing_a_zero_degree_candidate_is_reported() {
        let err = run(vec![2, 0, 0], OrderMode::LargestFirst).expect_err("[2, 0, 0] is infeasible");
        assert_eq!(
            err,
            RealizeError::DegreeExhausted {
                node: NodeId::new(0),
                neighbour: NodeId::new(1),
            }
        );
    }

    #[test]
    fn processed_nodes_leave_both_views() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut reduction = Reduction::new(
            &DegreeSequence::new(vec![1, 1, 2]),
            OrderMode::LargestFirst,
            &mut rng,
        );
        reduction.sort_views();
        let current = reduction.pop_next().expect("views are non-empty");
        assert_eq!(current, NodeId::new(2));
        assert!(!reduction.candidates.contains(&current));
        assert!(!reduction.node_order.contains(&current));
        assert_eq!(reduction.candidates.len(), reduction.node_order.len());
    }
}
