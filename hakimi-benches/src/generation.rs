//! Seeded generators of graphical degree sequences.

use std::fmt;

use hakimi_core::DegreeSequence;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Degree distribution of a generated sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SequenceShape {
    /// Every node has the same degree.
    Regular {
        /// Degree of every node.
        degree: usize,
    },
    /// Degrees follow a discrete power law `P(d) ~ d^-exponent`, as in
    /// synthetic scale-free networks.
    PowerLaw {
        /// Tail exponent; must be finite and greater than one.
        exponent: f64,
        /// Smallest degree drawn before repair.
        min_degree: usize,
    },
}

impl fmt::Display for SequenceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular { degree } => write!(f, "regular-{degree}"),
            Self::PowerLaw { exponent, .. } => write!(f, "power-law-{exponent}"),
        }
    }
}

/// Generates a graphical sequence of `node_count` degrees with the given
/// shape. Equal inputs always produce equal sequences.
///
/// Power-law draws are repaired by lowering the largest degree until the
/// sequence is graphical, which only trims the tail.
///
/// # Errors
/// Returns [`BenchSetupError::InvalidShape`] for a regular degree that is not
/// below `node_count` or leaves an odd degree sum, and for a power-law
/// exponent that is not finite and greater than one.
///
/// # Examples
/// ```
/// use hakimi_benches::generation::{SequenceShape, generate};
///
/// let sequence = generate(100, SequenceShape::PowerLaw { exponent: 2.5, min_degree: 1 }, 7)?;
/// assert_eq!(sequence.len(), 100);
/// assert!(sequence.is_graphical());
/// # Ok::<(), hakimi_benches::error::BenchSetupError>(())
/// ```
pub fn generate(
    node_count: usize,
    shape: SequenceShape,
    seed: u64,
) -> Result<DegreeSequence, BenchSetupError> {
    match shape {
        SequenceShape::Regular { degree } => regular(node_count, degree),
        SequenceShape::PowerLaw {
            exponent,
            min_degree,
        } => power_law(node_count, exponent, min_degree, seed),
    }
}

fn regular(node_count: usize, degree: usize) -> Result<DegreeSequence, BenchSetupError> {
    if node_count > 0 && degree >= node_count {
        return Err(BenchSetupError::InvalidShape {
            reason: "regular degree must be below the node count",
        });
    }
    if !node_count.saturating_mul(degree).is_multiple_of(2) {
        return Err(BenchSetupError::InvalidShape {
            reason: "regular degree sum must be even",
        });
    }
    Ok(DegreeSequence::new(vec![degree; node_count]))
}

fn power_law(
    node_count: usize,
    exponent: f64,
    min_degree: usize,
    seed: u64,
) -> Result<DegreeSequence, BenchSetupError> {
    if !exponent.is_finite() || exponent <= 1.0 {
        return Err(BenchSetupError::InvalidShape {
            reason: "power-law exponent must be finite and greater than one",
        });
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    let cap = node_count.saturating_sub(1);
    let degrees = (0..node_count)
        .map(|_| draw_power_law(&mut rng, exponent, min_degree).min(cap))
        .collect();
    Ok(repair(degrees))
}

/// Inverse-transform sample of a continuous Pareto tail, floored.
#[expect(
    clippy::float_arithmetic,
    reason = "inverse-transform sampling is defined over reals"
)]
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "degrees are small non-negative integers well inside f64 precision"
)]
fn draw_power_law(rng: &mut SmallRng, exponent: f64, min_degree: usize) -> usize {
    let uniform: f64 = rng.gen_range(f64::EPSILON..1.0);
    let scale = min_degree.max(1) as f64;
    let sample = scale * uniform.powf(-1.0 / (exponent - 1.0));
    (sample.floor() as usize).saturating_sub(usize::from(min_degree == 0))
}

/// Lowers the largest degree until the sequence is graphical.
fn repair(mut degrees: Vec<usize>) -> DegreeSequence {
    loop {
        let sequence = DegreeSequence::new(degrees.clone());
        if sequence.is_graphical() {
            return sequence;
        }
        match degrees.iter_mut().max() {
            Some(largest) if *largest > 0 => *largest -= 1,
            _ => return sequence,
        }
    }
}
