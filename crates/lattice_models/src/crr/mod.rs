//! Cox-Ross-Rubinstein binomial model.
//!
//! This module provides:
//! - `CrrParams`: validated model parameters
//! - `CrrFactors`: per-step factors derived once from the parameters
//! - `CrrModel`: stock-price lattice construction
//!
//! The CRR parameterisation sets `u = exp(sigma·sqrt(dt))`, `d = 1/u` and the
//! risk-neutral up-probability `p = (exp(r·dt) - d) / (u - d)`, so the tree
//! recombines and discounted expected one-step returns match the risk-free
//! rate.

mod model;
mod params;

pub use model::CrrModel;
pub use params::{CrrFactors, CrrParams};
