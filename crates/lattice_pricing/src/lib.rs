//! # Lattice Pricing (L3: Engines)
//!
//! Option valuation and delta-hedge replication over a CRR stock lattice.
//!
//! This crate provides the three downstream stages of the pipeline:
//! - Backward-induction valuation (`valuation`)
//! - Per-node hedge ratios and forward portfolio replication (`hedging`)
//! - Terminal comparison of the hedged and unhedged positions (`report`)
//!
//! The pipeline is a fixed linear sequence — stock lattice in, option
//! lattice out, portfolio lattice out, two terminal scalars out — with no
//! state carried between calls. Every stage checks that the lattice it was
//! handed matches the parameter record's step count and fails fast with
//! [`lattice_core::types::LatticeError::ShapeMismatch`] otherwise.
//!
//! ## Usage Examples
//!
//! ```rust
//! use lattice_models::crr::{CrrModel, CrrParams};
//! use lattice_models::instruments::OptionKind;
//! use lattice_pricing::{hedging, report, valuation};
//!
//! let params = CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, 0.2, 3, OptionKind::Call).unwrap();
//! let model = CrrModel::new(params);
//! let stock = model.stock_lattice();
//!
//! let valued = valuation::price_option(&model, &stock).unwrap();
//! let hedge = hedging::simulate(&model, &stock, valued.lattice()).unwrap();
//! let outcome = report::compare_terminal(valued.lattice(), hedge.portfolio()).unwrap();
//!
//! // Replication holds along the realised (all-up) path.
//! let diff = (outcome.hedged_value() - outcome.unhedged_value()).abs();
//! assert!(diff < 1e-9 * outcome.unhedged_value().max(1.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod hedging;
pub mod report;
pub mod valuation;
