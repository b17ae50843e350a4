//! Builder utilities for configuring Havel–Hakimi realization.
//!
//! Exposes the node-ordering and validation selection surface used before
//! constructing [`Realizer`] instances.

use std::fmt;

use crate::realizer::Realizer;

/// Policy deciding which node the reduction processes next.
///
/// Whatever the mode, the processed node is always joined to the unprocessed
/// nodes with the highest remaining degree; the mode only changes the order
/// in which nodes take their turn.
///
/// # Examples
/// ```
/// use hakimi_core::OrderMode;
///
/// assert_eq!(OrderMode::from_selector(0), OrderMode::SmallestFirst);
/// assert_eq!(OrderMode::from_selector(1), OrderMode::LargestFirst);
/// assert_eq!(OrderMode::from_selector(7), OrderMode::Randomized);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderMode {
    /// Process the node with the smallest remaining degree first.
    #[default]
    SmallestFirst,
    /// Process the node with the largest remaining degree first.
    LargestFirst,
    /// Process nodes in an order fixed by a single shuffle before the first step.
    Randomized,
}

impl OrderMode {
    /// Maps the integer selector used on the command line to a mode.
    ///
    /// `0` selects [`Self::SmallestFirst`], `1` selects
    /// [`Self::LargestFirst`], and every other value selects
    /// [`Self::Randomized`].
    #[must_use]
    pub const fn from_selector(selector: i64) -> Self {
        match selector {
            0 => Self::SmallestFirst,
            1 => Self::LargestFirst,
            _ => Self::Randomized,
        }
    }

    /// Returns a stable lowercase name for logs and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SmallestFirst => "smallest-first",
            Self::LargestFirst => "largest-first",
            Self::Randomized => "randomized",
        }
    }
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When infeasible sequences are detected.
///
/// `Upfront` rejects non-graphical sequences before any edge is placed, with
/// an error naming the violated condition. `DuringReduction` skips that check
/// and reports infeasibility only when the greedy reduction first runs into
/// it, exactly at the two in-loop checks.
///
/// # Examples
/// ```
/// use hakimi_core::Validation;
///
/// assert_eq!(Validation::default(), Validation::Upfront);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Validation {
    /// Check parity, degree bounds, and Erdős–Gallai before reducing.
    #[default]
    Upfront,
    /// Rely solely on the checks inside the reduction loop.
    DuringReduction,
}

/// Configures and constructs [`Realizer`] instances.
///
/// # Examples
/// ```
/// use hakimi_core::{OrderMode, RealizerBuilder, Validation};
///
/// let realizer = RealizerBuilder::new()
///     .with_order_mode(OrderMode::Randomized)
///     .with_rng_seed(7)
///     .build();
/// assert_eq!(realizer.order_mode(), OrderMode::Randomized);
/// assert_eq!(realizer.validation(), Validation::Upfront);
/// assert_eq!(realizer.rng_seed(), Some(7));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RealizerBuilder {
    order_mode: OrderMode,
    validation: Validation,
    rng_seed: Option<u64>,
}

impl RealizerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{OrderMode, RealizerBuilder, Validation};
    ///
    /// let builder = RealizerBuilder::new();
    /// assert_eq!(builder.order_mode(), OrderMode::SmallestFirst);
    /// assert_eq!(builder.validation(), Validation::Upfront);
    /// assert_eq!(builder.rng_seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node-ordering policy.
    #[must_use]
    pub const fn with_order_mode(mut self, order_mode: OrderMode) -> Self {
        self.order_mode = order_mode;
        self
    }

    /// Returns the configured node-ordering policy.
    #[must_use]
    pub const fn order_mode(&self) -> OrderMode {
        self.order_mode
    }

    /// Sets when infeasible sequences are detected.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{RealizerBuilder, Validation};
    ///
    /// let builder = RealizerBuilder::new().with_validation(Validation::DuringReduction);
    /// assert_eq!(builder.validation(), Validation::DuringReduction);
    /// ```
    #[must_use]
    pub const fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Returns the configured validation policy.
    #[must_use]
    pub const fn validation(&self) -> Validation {
        self.validation
    }

    /// Seeds the shuffle used by [`OrderMode::Randomized`].
    ///
    /// Without a seed, every call to [`Realizer::realize`] draws a fresh seed
    /// from process entropy.
    #[must_use]
    pub const fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Constructs the configured [`Realizer`].
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::{OrderMode, RealizerBuilder};
    ///
    /// let realizer = RealizerBuilder::new()
    ///     .with_order_mode(OrderMode::LargestFirst)
    ///     .build();
    /// assert_eq!(realizer.order_mode(), OrderMode::LargestFirst);
    /// ```
    #[must_use]
    pub const fn build(self) -> Realizer {
        Realizer::new(self.order_mode, self.validation, self.rng_seed)
    }
}
