//! Terminal comparison of the hedged and unhedged positions.

use lattice_core::grid::TriangularLattice;
use lattice_core::types::LatticeError;
use num_traits::Float;

/// Terminal values of the unhedged option and the hedged portfolio.
///
/// Both values are read from position `(0, N)` — the all-up leaf, the path
/// actually realised in this deterministic demonstration. This is a report
/// of one representative path, not an expectation over the terminal
/// distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TerminalComparison<T: Float> {
    unhedged_value: T,
    hedged_value: T,
}

impl<T: Float> TerminalComparison<T> {
    /// Returns the option's terminal value on the realised path.
    #[inline]
    pub fn unhedged_value(&self) -> T {
        self.unhedged_value
    }

    /// Returns the replicating portfolio's terminal value on the realised
    /// path.
    #[inline]
    pub fn hedged_value(&self) -> T {
        self.hedged_value
    }
}

/// Extracts the terminal values from the option-value and portfolio
/// lattices. Pure read; neither lattice is touched otherwise.
///
/// # Errors
/// [`LatticeError::ShapeMismatch`] if the two lattices span different step
/// counts.
///
/// # Examples
/// ```
/// use lattice_models::crr::{CrrModel, CrrParams};
/// use lattice_models::instruments::OptionKind;
/// use lattice_pricing::{hedging, report, valuation};
///
/// let params = CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, 0.2, 3, OptionKind::Call).unwrap();
/// let model = CrrModel::new(params);
/// let stock = model.stock_lattice();
/// let valued = valuation::price_option(&model, &stock).unwrap();
/// let hedge = hedging::simulate(&model, &stock, valued.lattice()).unwrap();
///
/// let outcome = report::compare_terminal(valued.lattice(), hedge.portfolio()).unwrap();
/// assert!(outcome.unhedged_value() > 0.0);
/// ```
pub fn compare_terminal<T: Float>(
    option_values: &TriangularLattice<T>,
    portfolio: &TriangularLattice<T>,
) -> Result<TerminalComparison<T>, LatticeError> {
    if option_values.steps() != portfolio.steps() {
        return Err(LatticeError::ShapeMismatch {
            expected: option_values.steps(),
            actual: portfolio.steps(),
        });
    }

    let last = option_values.steps();
    Ok(TerminalComparison {
        unhedged_value: option_values.get(0, last),
        hedged_value: portfolio.get(0, last),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_all_up_leaf_of_both_lattices() {
        let mut option_values: TriangularLattice<f64> = TriangularLattice::new(2);
        option_values.set(0, 2, 36.4);
        option_values.set(1, 2, 7.2);

        let mut portfolio: TriangularLattice<f64> = TriangularLattice::new(2);
        portfolio.set(0, 2, 36.4);

        let outcome = compare_terminal(&option_values, &portfolio).unwrap();
        assert_eq!(outcome.unhedged_value(), 36.4);
        assert_eq!(outcome.hedged_value(), 36.4);
    }

    #[test]
    fn test_mismatched_lattices_rejected() {
        let option_values: TriangularLattice<f64> = TriangularLattice::new(3);
        let portfolio: TriangularLattice<f64> = TriangularLattice::new(2);
        assert_eq!(
            compare_terminal(&option_values, &portfolio).unwrap_err(),
            LatticeError::ShapeMismatch {
                expected: 3,
                actual: 2
            }
        );
    }
}
