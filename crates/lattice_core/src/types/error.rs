//! Error types for structured error handling.
//!
//! This module provides `LatticeError`, the pipeline-level error taxonomy
//! shared by every stage of the lattice pipeline (model build, valuation,
//! hedge simulation, comparison).

use thiserror::Error;

/// Categorised lattice pipeline errors.
///
/// All three variants are non-recoverable: each aborts the pipeline at the
/// component boundary and surfaces to the caller. The computation is
/// deterministic, so there is nothing to retry. Library code never prints or
/// logs; diagnostics are the caller's responsibility.
///
/// # Variants
/// - `InvalidParameters`: Rejected before any lattice is built
/// - `DegenerateLattice`: Sibling stock prices coincide, so the hedge ratio
///   has a zero denominator
/// - `ShapeMismatch`: A lattice's step count disagrees with the parameters
///   it is paired with
///
/// # Examples
/// ```
/// use lattice_core::types::LatticeError;
///
/// let err = LatticeError::ShapeMismatch { expected: 5, actual: 3 };
/// assert_eq!(
///     format!("{}", err),
///     "Shape mismatch: lattice has 3 steps, parameters declare 5"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Invalid model parameters (rejected before building any lattice).
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Up and down factors coincide, producing a zero-width spread between
    /// sibling stock prices. The hedge ratio is undefined here; surfacing
    /// the condition keeps NaN/Inf out of downstream sums.
    #[error("Degenerate lattice: sibling stock prices coincide (spread = {spread})")]
    DegenerateLattice {
        /// The offending price spread between the up and down child.
        spread: f64,
    },

    /// A lattice passed between components whose declared step count
    /// disagrees with the parameter record.
    #[error("Shape mismatch: lattice has {actual} steps, parameters declare {expected}")]
    ShapeMismatch {
        /// Step count declared by the parameters.
        expected: usize,
        /// Step count the lattice was actually built with.
        actual: usize,
    },
}
