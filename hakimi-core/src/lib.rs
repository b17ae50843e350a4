//! Hakimi core library.
//!
//! Realizes a degree sequence as a simple undirected graph using the
//! Havel–Hakimi reduction and writes the result as an undirected edge list
//! ("uel": one `u v` pair per line with `u < v`).
//!
//! # Tie-breaking
//!
//! Both reduction views are re-sorted with stable sorts on every iteration.
//! Nodes with equal remaining degree therefore keep the relative order they
//! had in the previous iteration, which starts in node-ID order (or the
//! shuffled order when [`OrderMode::Randomized`] is selected). Runs with
//! [`OrderMode::SmallestFirst`] or [`OrderMode::LargestFirst`], and seeded
//! randomized runs, are fully deterministic.
//!
//! # Examples
//! ```
//! use hakimi_core::{DegreeSequence, OrderMode, realize};
//!
//! let sequence = DegreeSequence::new(vec![3, 3, 3, 3]);
//! let graph = realize(&sequence, OrderMode::LargestFirst)?;
//! assert_eq!(graph.edge_count(), 6);
//! assert_eq!(graph.degrees(), vec![3, 3, 3, 3]);
//! # Ok::<(), hakimi_core::RealizeError>(())
//! ```

mod adjacency;
mod builder;
mod error;
mod node;
mod realizer;
mod reduction;
mod sequence;
mod uel;

#[cfg(test)]
mod test_utils;

pub use crate::{
    adjacency::AdjacencyMap,
    builder::{OrderMode, RealizerBuilder, Validation},
    error::{
        DegreeSequenceError, DegreeSequenceErrorCode, RealizeError, RealizeErrorCode, Result,
        UelError, UelErrorCode,
    },
    node::{Edge, NodeId},
    realizer::{Realizer, realize},
    sequence::DegreeSequence,
    uel::{read_uel, read_uel_file, write_uel, write_uel_file},
};
