//! Model error types.
//!
//! This module provides structured error handling for parameter validation,
//! with a conversion into the pipeline-level [`LatticeError`] taxonomy.

use lattice_core::types::LatticeError;
use thiserror::Error;

/// Parameter validation errors.
///
/// Each variant carries the offending value so the caller can report it
/// without re-deriving context.
///
/// # Variants
/// - `InvalidSpot`: Initial price is non-positive
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidExpiry`: Maturity is non-positive
/// - `InvalidVolatility`: Volatility is negative (zero is allowed and only
///   fails later, at hedge-ratio computation)
/// - `InvalidSteps`: Step count is zero
///
/// # Examples
/// ```
/// use lattice_models::ModelError;
///
/// let err = ModelError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("-0.2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Invalid initial price (non-positive).
    #[error("Invalid spot price: S0 = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid maturity (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (negative).
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid step count (zero).
    #[error("Invalid step count: N = {steps}")]
    InvalidSteps {
        /// The invalid step count
        steps: usize,
    },
}

impl From<ModelError> for LatticeError {
    fn from(err: ModelError) -> Self {
        LatticeError::InvalidParameters(err.to_string())
    }
}
