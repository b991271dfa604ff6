//! # lattice_core: Foundation for Binomial Lattice Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! lattice_core is the bottom layer of the workspace, providing:
//! - Triangular grid storage for recombining lattices (`grid`)
//! - Continuous-compounding growth/discount factors (`math::compounding`)
//! - Pipeline error taxonomy: `LatticeError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other lattice_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Derived error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use lattice_core::grid::TriangularLattice;
//! use lattice_core::math::compounding::{discount_factor, growth_factor};
//!
//! // A three-step lattice has rows of length 1, 2, 3, 4.
//! let grid: TriangularLattice<f64> = TriangularLattice::new(3);
//! assert_eq!(grid.node_count(), 10);
//! assert_eq!(grid.row(2).len(), 3);
//!
//! // Growth and discounting over the same step are reciprocal.
//! let g = growth_factor(0.05_f64, 0.25);
//! let d = discount_factor(0.05_f64, 0.25);
//! assert!((g * d - 1.0).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod grid;
pub mod math;
pub mod types;
