//! # Lattice Models (L2: Contracts and Models)
//!
//! Option contract definitions and the Cox-Ross-Rubinstein binomial model.
//!
//! This crate provides:
//! - Option kind and clamped payoff evaluation (`instruments`)
//! - Validated model parameters with cached per-step factors (`crr`)
//! - Stock-price lattice construction (`crr::CrrModel`)
//! - Analytical Black-Scholes reference formulas (`analytical`)
//!
//! ## Design Principles
//!
//! - **Validate at the boundary**: parameter records are checked once at
//!   construction; everything downstream trusts them
//! - **Derive once**: up/down/probability/discount factors are computed a
//!   single time and reused by every pass over the lattice
//! - **Generic scalars**: all numeric code is generic over `T: Float`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod crr;
mod error;
pub mod instruments;

pub use error::ModelError;
