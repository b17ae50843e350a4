//! Error types for the Hakimi core library.
//!
//! Defines error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::node::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when a degree sequence cannot be realized as a simple graph.
///
/// The first two variants are raised from inside the reduction loop; the
/// remaining ones come from the upfront graphicality check selected by
/// [`crate::Validation::Upfront`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RealizeError {
    /// The processed node needs more neighbours than there are unprocessed nodes.
    #[error(
        "not enough remaining nodes to satisfy degree: node {node} needs {degree} but only {available} remain"
    )]
    InsufficientNodes {
        /// Node being processed when the shortfall was detected.
        node: NodeId,
        /// Remaining degree the node still required.
        degree: usize,
        /// Number of unprocessed nodes available as neighbours.
        available: usize,
    },
    /// Connecting the processed node would drive a neighbour's degree below zero.
    #[error(
        "degree sequence exhausted prematurely: node {neighbour} has no degree left for node {node}"
    )]
    DegreeExhausted {
        /// Node being processed when the exhaustion was detected.
        node: NodeId,
        /// Neighbour whose remaining degree was already zero.
        neighbour: NodeId,
    },
    /// The degrees sum to an odd number, so no edge set can realize them.
    #[error("degree sum {sum} is odd")]
    OddDegreeSum {
        /// Sum of all requested degrees.
        sum: u128,
    },
    /// A node requests at least as many neighbours as there are nodes.
    #[error("node {node} requests degree {degree} but the sequence only has {nodes} nodes")]
    DegreeTooLarge {
        /// Offending node.
        node: NodeId,
        /// Requested degree.
        degree: usize,
        /// Number of nodes in the sequence.
        nodes: usize,
    },
    /// The Erdős–Gallai inequality fails for the `k` largest degrees.
    #[error("sequence is not graphical: the {k} largest degrees sum to {lhs}, exceeding the bound {rhs}")]
    NotGraphical {
        /// Number of leading (largest) degrees in the violated inequality.
        k: usize,
        /// Sum of the `k` largest degrees.
        lhs: u128,
        /// Erdős–Gallai bound for `k`.
        rhs: u128,
    },
}

define_error_codes! {
    /// Stable codes describing [`RealizeError`] variants.
    enum RealizeErrorCode for RealizeError {
        /// The processed node needs more neighbours than remain.
        InsufficientNodes => InsufficientNodes { .. } => "HAKIMI_INSUFFICIENT_NODES",
        /// A neighbour's remaining degree would become negative.
        DegreeExhausted => DegreeExhausted { .. } => "HAKIMI_DEGREE_EXHAUSTED",
        /// The degree sum is odd.
        OddDegreeSum => OddDegreeSum { .. } => "HAKIMI_ODD_DEGREE_SUM",
        /// A degree is not smaller than the node count.
        DegreeTooLarge => DegreeTooLarge { .. } => "HAKIMI_DEGREE_TOO_LARGE",
        /// The Erdős–Gallai conditions are violated.
        NotGraphical => NotGraphical { .. } => "HAKIMI_NOT_GRAPHICAL",
    }
}

impl RealizeError {
    /// Returns `true` when the error was detected by the reduction loop rather
    /// than by the upfront graphicality check.
    ///
    /// # Examples
    /// ```
    /// use hakimi_core::RealizeError;
    ///
    /// assert!(!RealizeError::OddDegreeSum { sum: 3 }.is_reduction_failure());
    /// ```
    #[must_use]
    pub const fn is_reduction_failure(&self) -> bool {
        matches!(
            self,
            Self::InsufficientNodes { .. } | Self::DegreeExhausted { .. }
        )
    }
}

/// Error produced while parsing a textual degree sequence.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DegreeSequenceError {
    /// A token was not a non-negative integer.
    #[error("line {line}: `{token}` is not a valid degree")]
    InvalidToken {
        /// One-based line number of the token.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// A token was a negative integer.
    #[error("line {line}: degree {value} is negative")]
    NegativeDegree {
        /// One-based line number of the token.
        line: usize,
        /// Parsed negative value.
        value: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`DegreeSequenceError`] variants.
    enum DegreeSequenceErrorCode for DegreeSequenceError {
        /// A token was not a non-negative integer.
        InvalidToken => InvalidToken { .. } => "DEGREE_SEQUENCE_INVALID_TOKEN",
        /// A token was a negative integer.
        NegativeDegree => NegativeDegree { .. } => "DEGREE_SEQUENCE_NEGATIVE_DEGREE",
    }
}

/// Error produced while reading or writing uel edge lists.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum UelError {
    /// Opening, writing, or persisting a uel file failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a line from the underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number being read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line did not contain exactly two node identifiers.
    #[error("line {line}: expected `<u> <v>`, found `{content}`")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// Raw line content.
        content: String,
    },
    /// A line joined a node to itself.
    #[error("line {line}: self-loop on node {node}")]
    SelfLoop {
        /// One-based line number.
        line: usize,
        /// Node joined to itself.
        node: NodeId,
    },
    /// A line listed the higher endpoint first.
    #[error("line {line}: edge `{u} {v}` is not in canonical order")]
    NonCanonical {
        /// One-based line number.
        line: usize,
        /// First endpoint as written.
        u: NodeId,
        /// Second endpoint as written.
        v: NodeId,
    },
    /// A line repeated an edge that was already listed.
    #[error("line {line}: duplicate edge `{u} {v}`")]
    Duplicate {
        /// One-based line number.
        line: usize,
        /// Lower endpoint.
        u: NodeId,
        /// Higher endpoint.
        v: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`UelError`] variants.
    enum UelErrorCode for UelError {
        /// File access failed.
        Io => Io { .. } => "UEL_IO",
        /// Reading from the underlying reader failed.
        Read => Read { .. } => "UEL_READ",
        /// A line was malformed.
        Malformed => Malformed { .. } => "UEL_MALFORMED",
        /// A line encoded a self-loop.
        SelfLoop => SelfLoop { .. } => "UEL_SELF_LOOP",
        /// A line was not in canonical order.
        NonCanonical => NonCanonical { .. } => "UEL_NON_CANONICAL",
        /// A line repeated an edge.
        Duplicate => Duplicate { .. } => "UEL_DUPLICATE",
    }
}

/// Convenient alias for results returned by the realization API.
pub type Result<T> = core::result::Result<T, RealizeError>;
