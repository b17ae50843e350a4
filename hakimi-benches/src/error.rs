//! Benchmark setup error type.

use hakimi_core::RealizeError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A generator was asked for a shape it cannot produce.
    #[error("invalid sequence shape: {reason}")]
    InvalidShape {
        /// Why the shape was rejected.
        reason: &'static str,
    },
    /// Realizing a generated sequence failed.
    #[error("realization failed: {0}")]
    Realize(#[from] RealizeError),
}
