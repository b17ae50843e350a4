//! Benchmark parameter types.

use std::fmt;

use hakimi_core::OrderMode;

use crate::generation::SequenceShape;

/// Parameters identifying one realization benchmark.
#[derive(Clone, Debug)]
pub struct RealizeBenchParams {
    /// Number of nodes in the generated sequence.
    pub node_count: usize,
    /// Shape of the generated sequence.
    pub shape: SequenceShape,
    /// Node order used by the reduction.
    pub order_mode: OrderMode,
}

impl fmt::Display for RealizeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},{},{}", self.node_count, self.shape, self.order_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_every_parameter() {
        let params = RealizeBenchParams {
            node_count: 500,
            shape: SequenceShape::Regular { degree: 4 },
            order_mode: OrderMode::LargestFirst,
        };
        assert_eq!(params.to_string(), "n=500,regular-4,largest-first");
    }
}
