//! Backward-induction option valuation.
//!
//! The terminal row is the clamped exercise payoff applied to the stock
//! lattice's final row; every earlier node is the discounted risk-neutral
//! expectation of its two children. The discounted probabilities are
//! pre-multiplied once — the inner loop is two multiply-adds per node.

use lattice_core::grid::TriangularLattice;
use lattice_core::types::LatticeError;
use lattice_models::crr::CrrModel;
use num_traits::Float;

/// Result of valuing an option over a stock lattice.
///
/// Holds the fair value at the root together with the full option-value
/// lattice, which the hedge simulator consumes read-only.
#[derive(Debug, Clone)]
pub struct OptionValuation<T: Float> {
    fair_value: T,
    lattice: TriangularLattice<T>,
}

impl<T: Float> OptionValuation<T> {
    /// Returns the model's fair option price, the root entry of the lattice.
    #[inline]
    pub fn fair_value(&self) -> T {
        self.fair_value
    }

    /// Returns the option-value lattice.
    #[inline]
    pub fn lattice(&self) -> &TriangularLattice<T> {
        &self.lattice
    }

    /// Consumes the valuation and returns the lattice.
    pub fn into_lattice(self) -> TriangularLattice<T> {
        self.lattice
    }
}

/// Values a European option by backward induction over `stock`.
///
/// # Arguments
/// * `model` - The CRR model the stock lattice was built from
/// * `stock` - The stock-price lattice
///
/// # Errors
/// [`LatticeError::ShapeMismatch`] if the stock lattice's step count
/// disagrees with the model parameters.
///
/// # Examples
/// ```
/// use lattice_models::crr::{CrrModel, CrrParams};
/// use lattice_models::instruments::OptionKind;
/// use lattice_pricing::valuation::price_option;
///
/// let params = CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, 0.2, 3, OptionKind::Call).unwrap();
/// let model = CrrModel::new(params);
/// let stock = model.stock_lattice();
///
/// let valued = price_option(&model, &stock).unwrap();
/// assert!(valued.fair_value() > 0.0);
/// ```
pub fn price_option<T: Float>(
    model: &CrrModel<T>,
    stock: &TriangularLattice<T>,
) -> Result<OptionValuation<T>, LatticeError> {
    let steps = model.params().steps();
    if stock.steps() != steps {
        return Err(LatticeError::ShapeMismatch {
            expected: steps,
            actual: stock.steps(),
        });
    }

    let kind = model.params().kind();
    let strike = model.params().strike();
    let factors = model.factors();

    // Discounted branch weights, computed once for all backward steps.
    let disc_up = factors.discount * factors.prob;
    let disc_down = factors.discount * (T::one() - factors.prob);

    let mut values = TriangularLattice::new(steps);

    for level in 0..=steps {
        let payoff = kind.payoff(stock.get(level, steps), strike);
        values.set(level, steps, payoff);
    }

    for step in (0..steps).rev() {
        for level in 0..=step {
            let expected = disc_up * values.get(level, step + 1)
                + disc_down * values.get(level + 1, step + 1);
            values.set(level, step, expected);
        }
    }

    let fair_value = values.get(0, 0);
    Ok(OptionValuation { fair_value, lattice: values })
}
