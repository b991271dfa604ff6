//! Black-Scholes closed-form pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call**: C = S·N(d1) - K·e^(-rT)·N(d2)
//! **Put**:  P = K·e^(-rT)·N(-d2) - S·N(-d1)
//!
//! Where d1 = (ln(S/K) + (r + sigma^2/2)·T) / (sigma·sqrt(T)) and
//! d2 = d1 - sigma·sqrt(T).

use num_traits::Float;

use super::distributions::norm_cdf;
use crate::error::ModelError;
use crate::instruments::OptionKind;

/// Black-Scholes model under lognormal dynamics.
///
/// Serves as the convergence target for the CRR lattice: as the step count
/// grows, the lattice price approaches this closed form.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use lattice_models::analytical::BlackScholes;
/// use lattice_models::instruments::OptionKind;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price(OptionKind::Call, 100.0, 1.0);
/// let put = bs.price(OptionKind::Put, 100.0, 1.0);
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let forward = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((call - put - forward).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a Black-Scholes model.
    ///
    /// # Errors
    /// - `ModelError::InvalidSpot` if `spot <= 0`
    /// - `ModelError::InvalidVolatility` if `volatility <= 0` (the closed
    ///   form needs a strictly positive diffusion term)
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, ModelError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(ModelError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if volatility <= zero {
            return Err(ModelError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Computes the d1 term for a given strike and expiry.
    ///
    /// Expiry must be strictly positive; parameter validation upstream
    /// guarantees this for every pipeline caller.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term, `d1 - sigma·sqrt(T)`.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Prices a European option of the given kind.
    pub fn price(&self, kind: OptionKind, strike: T, expiry: T) -> T {
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discounted_strike = strike * (-self.rate * expiry).exp();

        match kind {
            OptionKind::Call => self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionKind::Put => discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1),
        }
    }

    /// Analytical delta: N(d1) for calls, N(d1) - 1 for puts.
    pub fn delta(&self, kind: OptionKind, strike: T, expiry: T) -> T {
        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match kind {
            OptionKind::Call => n_d1,
            OptionKind::Put => n_d1 - T::one(),
        }
    }
}
