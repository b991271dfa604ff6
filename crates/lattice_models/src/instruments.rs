//! Option contract definitions.
//!
//! The lattice pipeline prices plain European calls and puts; the payoff is
//! the only contract-specific ingredient, applied once to the terminal row.

use num_traits::Float;

/// Side of a plain European option.
///
/// # Examples
/// ```
/// use lattice_models::instruments::OptionKind;
///
/// let payoff = OptionKind::Call.payoff(110.0_f64, 100.0);
/// assert_eq!(payoff, 10.0);
///
/// let payoff = OptionKind::Put.payoff(110.0_f64, 100.0);
/// assert_eq!(payoff, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Evaluates the exercise payoff for a given spot and strike.
    ///
    /// Clamped at zero: an option is never worth less than nothing.
    #[inline]
    pub fn payoff<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionKind::Call => (spot - strike).max(zero),
            OptionKind::Put => (strike - spot).max(zero),
        }
    }

    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff_in_the_money() {
        assert_eq!(OptionKind::Call.payoff(120.0_f64, 105.0), 15.0);
    }

    #[test]
    fn test_call_payoff_clamped_at_zero() {
        assert_eq!(OptionKind::Call.payoff(90.0_f64, 105.0), 0.0);
    }

    #[test]
    fn test_put_payoff_in_the_money() {
        assert_eq!(OptionKind::Put.payoff(90.0_f64, 105.0), 15.0);
    }

    #[test]
    fn test_put_payoff_clamped_at_zero() {
        assert_eq!(OptionKind::Put.payoff(120.0_f64, 105.0), 0.0);
    }

    #[test]
    fn test_at_the_money_payoff_is_zero() {
        assert_eq!(OptionKind::Call.payoff(105.0_f64, 105.0), 0.0);
        assert_eq!(OptionKind::Put.payoff(105.0_f64, 105.0), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(OptionKind::Call.to_string(), "call");
        assert_eq!(OptionKind::Put.to_string(), "put");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_payoffs_are_non_negative(
                spot in 0.01..1000.0f64,
                strike in 0.01..1000.0f64,
            ) {
                prop_assert!(OptionKind::Call.payoff(spot, strike) >= 0.0);
                prop_assert!(OptionKind::Put.payoff(spot, strike) >= 0.0);
            }

            #[test]
            fn prop_call_minus_put_is_intrinsic_spread(
                spot in 0.01..1000.0f64,
                strike in 0.01..1000.0f64,
            ) {
                let call = OptionKind::Call.payoff(spot, strike);
                let put = OptionKind::Put.payoff(spot, strike);
                prop_assert!((call - put - (spot - strike)).abs() < 1e-12);
            }
        }
    }
}
