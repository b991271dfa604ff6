//! Continuous-compounding factors over a single lattice step.
//!
//! Valuation discounts with `exp(-r·dt)` and the hedge rolls cash forward
//! with `exp(r·dt)`. Both sides must use the same compounding basis or the
//! replicating portfolio drifts away from the option value; routing every
//! caller through this module keeps the two factors exact reciprocals.

use num_traits::Float;

/// Growth factor `exp(rate · dt)` for cash financed at the risk-free rate
/// over one step.
///
/// # Examples
/// ```
/// use lattice_core::math::compounding::growth_factor;
///
/// let g = growth_factor(0.05_f64, 1.0 / 3.0);
/// assert!((g - (0.05_f64 / 3.0).exp()).abs() < 1e-15);
/// ```
#[inline]
pub fn growth_factor<T: Float>(rate: T, dt: T) -> T {
    (rate * dt).exp()
}

/// Discount factor `exp(-rate · dt)` for one step of backward induction.
///
/// # Examples
/// ```
/// use lattice_core::math::compounding::discount_factor;
///
/// let d = discount_factor(0.05_f64, 1.0 / 3.0);
/// assert!(d < 1.0);
/// ```
#[inline]
pub fn discount_factor<T: Float>(rate: T, dt: T) -> T {
    (-rate * dt).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_growth_and_discount_are_reciprocal() {
        let g = growth_factor(0.07_f64, 0.25);
        let d = discount_factor(0.07_f64, 0.25);
        assert_relative_eq!(g * d, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_rate_is_identity() {
        assert_eq!(growth_factor(0.0_f64, 1.0), 1.0);
        assert_eq!(discount_factor(0.0_f64, 1.0), 1.0);
    }

    #[test]
    fn test_negative_rate_inverts_roles() {
        let g = growth_factor(-0.02_f64, 0.5);
        assert!(g < 1.0);
        let d = discount_factor(-0.02_f64, 0.5);
        assert!(d > 1.0);
    }
}
