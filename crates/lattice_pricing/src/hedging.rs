//! Delta hedging: per-node hedge ratios and self-financing replication.
//!
//! Step A computes the hedge ratio at every interior node as the finite
//! difference of the child option values over the child stock prices. Step B
//! rolls a replicating portfolio forward: the hedge position is revalued at
//! each new stock price while the financed cash grows at the risk-free rate,
//! using the same compounding basis as valuation discounting. If the two
//! bases disagreed, the portfolio would drift away from the option value and
//! the terminal comparison would be meaningless.

use lattice_core::grid::TriangularLattice;
use lattice_core::types::LatticeError;
use lattice_models::crr::CrrModel;
use num_traits::Float;

/// Outcome of a hedge simulation: the hedge-ratio lattice and the
/// replicating portfolio's value lattice.
///
/// The portfolio lattice's top row tracks the all-up stock path — the
/// representative path of this deterministic demonstration. Diagonal cells
/// `(i, i)` for `i >= 1` have no parent inside the triangle and keep the
/// zero sentinel.
#[derive(Debug, Clone)]
pub struct HedgeSimulation<T: Float> {
    deltas: TriangularLattice<T>,
    portfolio: TriangularLattice<T>,
}

impl<T: Float> HedgeSimulation<T> {
    /// Returns the hedge-ratio lattice (spanning steps `0..N-1`).
    #[inline]
    pub fn deltas(&self) -> &TriangularLattice<T> {
        &self.deltas
    }

    /// Returns the replicating portfolio's value lattice.
    #[inline]
    pub fn portfolio(&self) -> &TriangularLattice<T> {
        &self.portfolio
    }

    /// Returns the hedge ratio at the root, the position held over the
    /// first step.
    #[inline]
    pub fn root_delta(&self) -> T {
        self.deltas.get(0, 0)
    }
}

fn check_shape<T: Float>(
    expected: usize,
    lattice: &TriangularLattice<T>,
) -> Result<(), LatticeError> {
    if lattice.steps() != expected {
        return Err(LatticeError::ShapeMismatch {
            expected,
            actual: lattice.steps(),
        });
    }
    Ok(())
}

/// Computes the hedge-ratio lattice.
///
/// `delta(j, i) = [V(j, i+1) - V(j+1, i+1)] / [S(j, i+1) - S(j+1, i+1)]`
/// for `i` in `0..N`, stored in a compact triangle over `N - 1` steps.
///
/// # Errors
/// - [`LatticeError::ShapeMismatch`] if either lattice disagrees with the
///   model's step count.
/// - [`LatticeError::DegenerateLattice`] if any pair of sibling stock
///   prices is numerically equal (zero-width spread, e.g. zero
///   volatility). The division is never performed on a degenerate spread,
///   so no NaN/Inf can leak downstream.
pub fn delta_lattice<T: Float>(
    model: &CrrModel<T>,
    stock: &TriangularLattice<T>,
    values: &TriangularLattice<T>,
) -> Result<TriangularLattice<T>, LatticeError> {
    let steps = model.params().steps();
    check_shape(steps, stock)?;
    check_shape(steps, values)?;

    let mut deltas = TriangularLattice::new(steps - 1);
    for step in 0..steps {
        for level in 0..=step {
            let stock_up = stock.get(level, step + 1);
            let stock_down = stock.get(level + 1, step + 1);
            let spread = stock_up - stock_down;

            let tolerance = T::epsilon() * (stock_up.abs() + stock_down.abs());
            if !spread.is_finite() || spread.abs() <= tolerance {
                return Err(LatticeError::DegenerateLattice {
                    spread: spread.to_f64().unwrap_or(f64::NAN),
                });
            }

            let value_up = values.get(level, step + 1);
            let value_down = values.get(level + 1, step + 1);
            deltas.set(level, step, (value_up - value_down) / spread);
        }
    }
    Ok(deltas)
}

/// Simulates the self-financing replicating portfolio.
///
/// The root entry is the initial cash position `V(0,0) - delta(0,0)·S(0,0)`
/// (hedge financed out of the option valuation). The first roll-forward
/// consumes that cash directly; from step one onward each entry is a full
/// portfolio value, so the prior step's cash is recovered by subtracting the
/// stock position before growing it one step:
///
/// `P(j, i) = delta(j, i-1)·S(j, i) + [P(j, i-1) - delta(j, i-1)·S(j, i-1)]·e^(r·dt)`
///
/// Along the all-up row the portfolio value reproduces the option value at
/// every step, so the terminal entry matches the exercise payoff to
/// floating-point accuracy — the correctness law of delta hedging in a
/// binomial model.
///
/// # Errors
/// Same conditions as [`delta_lattice`], which this calls first.
///
/// # Examples
/// ```
/// use lattice_models::crr::{CrrModel, CrrParams};
/// use lattice_models::instruments::OptionKind;
/// use lattice_pricing::{hedging, valuation};
///
/// let params = CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, 0.2, 3, OptionKind::Call).unwrap();
/// let model = CrrModel::new(params);
/// let stock = model.stock_lattice();
/// let valued = valuation::price_option(&model, &stock).unwrap();
///
/// let hedge = hedging::simulate(&model, &stock, valued.lattice()).unwrap();
/// let replicated = hedge.portfolio().get(0, 3);
/// let payoff = valued.lattice().get(0, 3);
/// assert!((replicated - payoff).abs() < 1e-9 * payoff);
/// ```
pub fn simulate<T: Float>(
    model: &CrrModel<T>,
    stock: &TriangularLattice<T>,
    values: &TriangularLattice<T>,
) -> Result<HedgeSimulation<T>, LatticeError> {
    let deltas = delta_lattice(model, stock, values)?;

    let steps = model.params().steps();
    let growth = model.factors().growth;

    let mut portfolio = TriangularLattice::new(steps);
    let root_cash = values.get(0, 0) - deltas.get(0, 0) * stock.get(0, 0);
    portfolio.set(0, 0, root_cash);

    for step in 1..=steps {
        for level in 0..step {
            let hedge = deltas.get(level, step - 1);
            let prior = portfolio.get(level, step - 1);
            // The root entry already is cash; later entries are portfolio
            // values, so the stock position comes off before financing.
            let cash = if step == 1 {
                prior
            } else {
                prior - hedge * stock.get(level, step - 1)
            };
            let value = hedge * stock.get(level, step) + cash * growth;
            portfolio.set(level, step, value);
        }
    }

    Ok(HedgeSimulation { deltas, portfolio })
}
