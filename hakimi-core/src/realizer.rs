//! Havel–Hakimi realization entry point.
//!
//! Provides the [`Realizer`] runtime and the [`realize`] convenience
//! function.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    Result,
    adjacency::AdjacencyMap,
    builder::{OrderMode, RealizerBuilder, Validation},
    reduction::Reduction,
    sequence::DegreeSequence,
};

/// Realizes degree sequences as simple undirected graphs.
///
/// Each step takes the next node from the processing order and joins it to
/// the unprocessed nodes with the highest remaining degrees. The run ends
/// successfully once every remaining degree is zero, or fails at the first
/// infeasibility; no partial graph is ever returned.
///
/// # Examples
/// ```
/// use hakimi_core::{DegreeSequence, NodeId, OrderMode, RealizerBuilder};
///
/// let realizer = RealizerBuilder::new()
///     .with_order_mode(OrderMode::LargestFirst)
///     .build();
/// let graph = realizer.realize(&DegreeSequence::new(vec![1, 1]))?;
/// assert!(graph.contains_edge(NodeId::new(0), NodeId::new(1)));
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), hakimi_core::RealizeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Realizer {
    order_mode: OrderMode,
    validation: Validation,
    rng_seed: Option<u64>,
}

impl Realizer {
    pub(crate) const fn new(
        order_mode: OrderMode,
        validation: Validation,
        rng_seed: Option<u64>,
    ) -> Self {
        Self {
            order_mode,
            validation,
            rng_seed,
        }
    }

    /// Returns the node-ordering policy.
    #[must_use]
    pub const fn order_mode(&self) -> OrderMode {
        self.order_mode
    }

    /// Returns the validation policy.
    #[must_use]
    pub const fn validation(&self) -> Validation {
        self.validation
    }

    /// Returns the shuffle seed, if one was configured.
    #[must_use]
    pub const fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Realizes `sequence`, seeding the shuffle from the configured seed or
    /// from process entropy when none was set.
    ///
    /// # Errors
    /// With [`Validation::Upfront`], returns
    /// [`crate::RealizeError::OddDegreeSum`],
    /// [`crate::RealizeError::DegreeTooLarge`], or
    /// [`crate::RealizeError::NotGraphical`] for non-graphical sequences.
    /// With [`Validation::DuringReduction`], returns
    /// [`crate::RealizeError::InsufficientNodes`] when the processed node needs
    /// more neighbours than remain, or
    /// [`crate::RealizeError::DegreeExhausted`] when a neighbour has no degree
    /// left to give.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{DegreeSequence, RealizeError, RealizerBuilder, Validation};
    ///
    /// let realizer = RealizerBuilder::new()
    ///     .with_validation(Validation::DuringReduction)
    ///     .build();
    /// let err = realizer
    ///     .realize(&DegreeSequence::new(vec![5, 1, 1, 1, 1]))
    ///     .expect_err("a node cannot have five neighbours among four others");
    /// assert!(matches!(err, RealizeError::InsufficientNodes { .. }));
    /// ```
    pub fn realize(&self, sequence: &DegreeSequence) -> Result<AdjacencyMap> {
        let mut rng = match self.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.realize_with_rng(sequence, &mut rng)
    }

    /// Realizes `sequence` drawing the shuffle for [`OrderMode::Randomized`]
    /// from `rng`. The configured seed is ignored.
    ///
    /// # Errors
    /// Same as [`Self::realize`].
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{DegreeSequence, OrderMode, RealizerBuilder};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let realizer = RealizerBuilder::new()
    ///     .with_order_mode(OrderMode::Randomized)
    ///     .build();
    /// let sequence = DegreeSequence::new(vec![2, 2, 2, 1, 1]);
    /// let first = realizer.realize_with_rng(&sequence, &mut SmallRng::seed_from_u64(5))?;
    /// let second = realizer.realize_with_rng(&sequence, &mut SmallRng::seed_from_u64(5))?;
    /// assert_eq!(first, second);
    /// # Ok::<(), hakimi_core::RealizeError>(())
    /// ```
    #[instrument(
        name = "core.realize",
        err,
        skip(self, sequence, rng),
        fields(
            nodes = sequence.len(),
            degree_sum = sequence.degree_sum(),
            order = %self.order_mode,
            validation = ?self.validation,
        ),
    )]
    pub fn realize_with_rng<R: Rng + ?Sized>(
        &self,
        sequence: &DegreeSequence,
        rng: &mut R,
    ) -> Result<AdjacencyMap> {
        if self.validation == Validation::Upfront {
            sequence.check_graphical()?;
        }
        let (adjacency, steps) = Reduction::new(sequence, self.order_mode, rng).run()?;
        info!(
            edges = adjacency.edge_count(),
            steps, "realization completed"
        );
        Ok(adjacency)
    }
}

/// Realizes `sequence` with the given order mode, upfront validation, and an
/// entropy-seeded shuffle.
///
/// # Errors
/// Same as [`Realizer::realize`] under [`Validation::Upfront`].
///
/// # Examples
/// ```
/// use hakimi_core::{DegreeSequence, OrderMode, RealizeError, realize};
///
/// let err = realize(&DegreeSequence::new(vec![3, 3, 1, 1]), OrderMode::SmallestFirst)
///     .expect_err("two hubs cannot share two leaves");
/// assert!(matches!(err, RealizeError::NotGraphical { .. }));
/// ```
pub fn realize(sequence: &DegreeSequence, order_mode: OrderMode) -> Result<AdjacencyMap> {
    RealizerBuilder::new()
        .with_order_mode(order_mode)
        .build()
        .realize(sequence)
}
