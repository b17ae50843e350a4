//! Benchmark support crate for hakimi.
//!
//! Provides seeded generators of graphical degree sequences and the
//! parameter types used to label Criterion benchmark runs.

pub mod error;
pub mod generation;
pub mod params;
