//! Stock-price lattice construction.

use lattice_core::grid::TriangularLattice;
use num_traits::Float;

use super::params::{CrrFactors, CrrParams};

/// CRR lattice model: parameters plus their derived factors.
///
/// Building the stock lattice is a pure function of the parameters; the
/// returned grid satisfies `entry(j, i) = S0 · u^(i-j) · d^j` for every node
/// `j <= i <= N` and is owned outright by the caller.
///
/// # Examples
/// ```
/// use lattice_models::crr::{CrrModel, CrrParams};
/// use lattice_models::instruments::OptionKind;
///
/// let params = CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, 0.2, 3, OptionKind::Call).unwrap();
/// let model = CrrModel::new(params);
/// let stock = model.stock_lattice();
///
/// // Root node is the spot price; the top row is the all-up path.
/// assert_eq!(stock.get(0, 0), 100.0);
/// assert!(stock.get(0, 3) > stock.get(0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct CrrModel<T: Float> {
    params: CrrParams<T>,
    factors: CrrFactors<T>,
}

impl<T: Float> CrrModel<T> {
    /// Creates a model from a validated parameter record, deriving the
    /// per-step factors once.
    pub fn new(params: CrrParams<T>) -> Self {
        let factors = params.factors();
        Self { params, factors }
    }

    /// Returns the parameter record.
    #[inline]
    pub fn params(&self) -> &CrrParams<T> {
        &self.params
    }

    /// Returns the cached per-step factors.
    #[inline]
    pub fn factors(&self) -> &CrrFactors<T> {
        &self.factors
    }

    /// Builds the full stock-price lattice.
    ///
    /// Each row is filled from the all-down node upward with a multiplicative
    /// recurrence (`u/d` per level), avoiding per-cell `powf` calls; only the
    /// row's starting value uses an integer power.
    pub fn stock_lattice(&self) -> TriangularLattice<T> {
        let steps = self.params.steps();
        let spot = self.params.spot();
        let ratio = self.factors.up / self.factors.down;

        let mut grid = TriangularLattice::new(steps);
        for step in 0..=steps {
            let mut price = spot * self.factors.down.powi(step as i32);
            for level in (0..=step).rev() {
                grid.set(level, step, price);
                price = price * ratio;
            }
        }
        grid
    }
}
