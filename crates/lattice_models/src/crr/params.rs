//! Validated CRR model parameters and derived per-step factors.

use lattice_core::math::compounding::{discount_factor, growth_factor};
use num_traits::Float;

use crate::error::ModelError;
use crate::instruments::OptionKind;

/// Immutable parameter record for a CRR lattice run.
///
/// Validation happens once, here; every downstream component trusts a
/// constructed record. Note that zero volatility is accepted — the data
/// model only forbids negative volatility. A zero-volatility tree is
/// degenerate (both children of a node carry the same price) and is
/// rejected later, when the hedge ratio would divide by the zero spread.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use lattice_models::crr::CrrParams;
/// use lattice_models::instruments::OptionKind;
///
/// let params = CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, 0.2, 3, OptionKind::Call).unwrap();
/// assert_eq!(params.steps(), 3);
///
/// // Negative volatility is rejected up front.
/// assert!(CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, -0.2, 3, OptionKind::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrrParams<T: Float> {
    spot: T,
    strike: T,
    expiry: T,
    rate: T,
    volatility: T,
    steps: usize,
    kind: OptionKind,
}

impl<T: Float> CrrParams<T> {
    /// Creates a validated parameter record.
    ///
    /// # Arguments
    /// * `spot` - Initial stock price S0 (must be positive)
    /// * `strike` - Strike price K (must be positive)
    /// * `expiry` - Maturity T in years (must be positive)
    /// * `rate` - Continuously compounded risk-free rate (any sign)
    /// * `volatility` - Volatility sigma (must be non-negative)
    /// * `steps` - Number of lattice steps N (must be at least 1)
    /// * `kind` - Call or put
    ///
    /// # Errors
    /// Returns the matching [`ModelError`] variant for the first violated
    /// constraint.
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        steps: usize,
        kind: OptionKind,
    ) -> Result<Self, ModelError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(ModelError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if strike <= zero {
            return Err(ModelError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if expiry <= zero {
            return Err(ModelError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        if volatility < zero {
            return Err(ModelError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        if steps == 0 {
            return Err(ModelError::InvalidSteps { steps });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            steps,
            kind,
        })
    }

    /// Returns the initial stock price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the maturity in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the number of lattice steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Derives the per-step factors.
    ///
    /// Computed once per run and reused by every pass over the lattice;
    /// nothing downstream recomputes them per cell.
    pub fn factors(&self) -> CrrFactors<T> {
        let steps = T::from(self.steps).unwrap();
        let dt = self.expiry / steps;
        let up = (self.volatility * dt.sqrt()).exp();
        let down = T::one() / up;
        let growth = growth_factor(self.rate, dt);
        let discount = discount_factor(self.rate, dt);
        let prob = (growth - down) / (up - down);

        CrrFactors {
            dt,
            up,
            down,
            prob,
            growth,
            discount,
        }
    }
}

/// Per-step factors derived from a [`CrrParams`] record.
///
/// The risk-neutral probability `prob` may land outside [0, 1] for
/// pathological inputs (large `r·dt` relative to the volatility spread); that
/// is a valid numeric output of the formula, not an error. With zero
/// volatility `up == down` and `prob` is a division by zero — the resulting
/// non-finite value flows through valuation and is only rejected at
/// hedge-ratio computation, where the zero spread is detected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrrFactors<T: Float> {
    /// Step length `T / N` in years.
    pub dt: T,
    /// Up factor `exp(sigma·sqrt(dt))`.
    pub up: T,
    /// Down factor `1 / up`.
    pub down: T,
    /// Risk-neutral up-probability `(exp(r·dt) - d) / (u - d)`.
    pub prob: T,
    /// One-step growth factor `exp(r·dt)`.
    pub growth: T,
    /// One-step discount factor `exp(-r·dt)`.
    pub discount: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn seed_params() -> CrrParams<f64> {
        CrrParams::new(100.0, 105.0, 1.0, 0.05, 0.2, 3, OptionKind::Call).unwrap()
    }

    #[test]
    fn test_new_valid_parameters() {
        let params = seed_params();
        assert_eq!(params.spot(), 100.0);
        assert_eq!(params.strike(), 105.0);
        assert_eq!(params.expiry(), 1.0);
        assert_eq!(params.rate(), 0.05);
        assert_eq!(params.volatility(), 0.2);
        assert_eq!(params.steps(), 3);
        assert_eq!(params.kind(), OptionKind::Call);
    }

    #[test]
    fn test_new_invalid_spot() {
        let result = CrrParams::new(0.0_f64, 105.0, 1.0, 0.05, 0.2, 3, OptionKind::Call);
        assert!(matches!(result, Err(ModelError::InvalidSpot { .. })));
    }

    #[test]
    fn test_new_invalid_strike() {
        let result = CrrParams::new(100.0_f64, -105.0, 1.0, 0.05, 0.2, 3, OptionKind::Call);
        match result {
            Err(ModelError::InvalidStrike { strike }) => assert_eq!(strike, -105.0),
            _ => panic!("Expected InvalidStrike error"),
        }
    }

    #[test]
    fn test_new_invalid_expiry() {
        let result = CrrParams::new(100.0_f64, 105.0, -1.0, 0.05, 0.2, 3, OptionKind::Call);
        assert!(matches!(result, Err(ModelError::InvalidExpiry { .. })));
    }

    #[test]
    fn test_new_negative_volatility_rejected() {
        let result = CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, -0.01, 3, OptionKind::Call);
        assert!(matches!(result, Err(ModelError::InvalidVolatility { .. })));
    }

    #[test]
    fn test_new_zero_volatility_accepted() {
        let params = CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, 0.0, 3, OptionKind::Call);
        assert!(params.is_ok());
    }

    #[test]
    fn test_new_zero_steps_rejected() {
        let result = CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, 0.2, 0, OptionKind::Call);
        assert!(matches!(result, Err(ModelError::InvalidSteps { steps: 0 })));
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        let params = CrrParams::new(100.0_f64, 105.0, 1.0, -0.01, 0.2, 3, OptionKind::Call);
        assert!(params.is_ok());
    }

    #[test]
    fn test_factors_step_length() {
        let f = seed_params().factors();
        assert_relative_eq!(f.dt, 1.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_factors_up_down_reciprocal() {
        let f = seed_params().factors();
        assert_relative_eq!(f.up * f.down, 1.0, epsilon = 1e-15);
        assert!(f.down < f.up);
    }

    #[test]
    fn test_factors_match_crr_formulas() {
        let f = seed_params().factors();
        let dt: f64 = 1.0 / 3.0;
        assert_relative_eq!(f.up, (0.2 * dt.sqrt()).exp(), epsilon = 1e-15);
        assert_relative_eq!(f.growth, (0.05 * dt).exp(), epsilon = 1e-15);
        assert_relative_eq!(f.discount, (-0.05 * dt).exp(), epsilon = 1e-15);
        assert_relative_eq!(
            f.prob,
            (f.growth - f.down) / (f.up - f.down),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_factors_probability_in_unit_interval_for_seed() {
        let f = seed_params().factors();
        assert!(f.prob > 0.0 && f.prob < 1.0);
    }

    #[test]
    fn test_factors_growth_discount_reciprocal() {
        let f = seed_params().factors();
        assert_relative_eq!(f.growth * f.discount, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_volatility_factors_collapse() {
        let params = CrrParams::new(100.0_f64, 105.0, 1.0, 0.05, 0.0, 3, OptionKind::Call).unwrap();
        let f = params.factors();
        assert_eq!(f.up, 1.0);
        assert_eq!(f.down, 1.0);
        // prob = (growth - 1) / 0: non-finite by construction, not a panic.
        assert!(!f.prob.is_finite());
    }
}
