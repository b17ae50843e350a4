//! Shared test utilities for `hakimi-core`.

use hakimi_test_support::graphs::graphical_degrees;
use proptest::prelude::*;

use crate::sequence::DegreeSequence;

pub(crate) use hakimi_test_support::ci::property_test_profile::suite_proptest_config;

/// Graphical degree sequences on up to `max_nodes` nodes.
pub(crate) fn graphical_sequence_strategy(
    max_nodes: usize,
) -> impl Strategy<Value = DegreeSequence> {
    graphical_degrees(max_nodes).prop_map(DegreeSequence::new)
}
