//! Standard normal distribution functions.
//!
//! Generic over `T: Float`, accurate to about 1.5e-7 — plenty for validating
//! lattice output against the closed form.

use num_traits::Float;

/// 1 / sqrt(2·pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function, Abramowitz & Stegun formula 7.1.26.
///
/// Maximum absolute error 1.5e-7 over the whole real line; the polynomial is
/// evaluated with Horner's method.
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);
    let poly = t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))));
    let erfc_abs = poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        T::from(2.0).unwrap() - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Phi(x) = erfc(-x / sqrt(2)) / 2.
///
/// # Examples
/// ```
/// use lattice_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-4.0_f64) < 1e-3);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let c = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    c * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cdf_at_zero_is_half() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_cdf_known_values() {
        // Phi(1.96) ~ 0.9750, Phi(-1.96) ~ 0.0250
        assert_relative_eq!(norm_cdf(1.96_f64), 0.975, epsilon = 1e-4);
        assert_relative_eq!(norm_cdf(-1.96_f64), 0.025, epsilon = 1e-4);
    }

    #[test]
    fn test_cdf_symmetry() {
        for x in [0.3_f64, 0.7, 1.3, 2.9] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_cdf_is_monotonic() {
        let mut prev = norm_cdf(-5.0_f64);
        for i in -49..=50 {
            let x = i as f64 / 10.0;
            let cur = norm_cdf(x);
            assert!(cur >= prev);
            prev = cur;
        }
    }

    #[test]
    fn test_pdf_peak_at_zero() {
        assert_relative_eq!(norm_pdf(0.0_f64), 0.398_942_280_401_432_7, epsilon = 1e-15);
        assert!(norm_pdf(1.0_f64) < norm_pdf(0.0_f64));
    }
}
