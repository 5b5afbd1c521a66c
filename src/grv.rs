//! The Gaussian random variable value type.
//!
//! A [`Grv`] is a scalar estimate carried as `(mean, variance)`. Operators
//! propagate the variance with the first-order (delta-method) rule
//!
//! ```text
//! var_out = Σᵢ (∂f/∂xᵢ at the means)² · var_i
//! ```
//!
//! assuming every pair of operands is statistically independent.
//!
//! # Operators
//!
//! | Expression | Mean | Variance |
//! |---|---|---|
//! | `-g` | −m | v |
//! | `g ± n` | m ± n | v |
//! | `g * n` | m·n | v·n² |
//! | `g / n` | m/n | v/n² |
//! | `g.powf(n)` | mⁿ | v·(n·mⁿ⁻¹)² |
//! | `a ± b` | a.m ± b.m | a.v + b.v |
//! | `a * b` | a.m·b.m | b.m²·a.v + a.m²·b.v |
//! | `a / b` | a.m/b.m | a.v/b.m² + b.v·(a.m/b.m²)² |
//! | `a.pow(b)` | a.m^b.m | see [`Grv::pow`] |
//!
//! # Numerical contract
//!
//! Nothing here validates its inputs. A zero divisor, a non-positive base in
//! [`Grv::pow`] or a negative variance passes straight through ordinary IEEE
//! arithmetic and surfaces as ±∞ or NaN. Use [`Grv::try_new`] at the edge of
//! a pipeline when parameters come from an untrusted source, and
//! [`Grv::is_finite`] to inspect results.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::num::square;
use crate::special;

/// Error type for invalid random-variable parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum GrvError {
    /// Parameters violate the (mean, variance) constraints.
    InvalidParameters(String),
}

impl fmt::Display for GrvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrvError::InvalidParameters(msg) => {
                write!(f, "invalid random variable parameters: {msg}")
            }
        }
    }
}

impl std::error::Error for GrvError {}

/// Scalar Gaussian random variable N(mean, var).
///
/// A plain `Copy` value: every operation returns a new `Grv` and leaves its
/// operands untouched.
///
/// # Examples
/// ```
/// use u_grv::Grv;
/// let length = Grv::new(2.0, 0.01);
/// let width = Grv::new(3.0, 0.04);
/// let area = length * width;
/// assert!((area.mean - 6.0).abs() < 1e-6);
/// // 3²·0.01 + 2²·0.04
/// assert!((area.var - 0.25).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grv {
    /// Expected value.
    pub mean: f32,
    /// Variance. Expected to be ≥ 0 but never checked.
    pub var: f32,
}

impl Grv {
    /// Creates a random variable with the given mean and variance.
    ///
    /// No validation is performed; see [`Grv::try_new`].
    pub const fn new(mean: f32, var: f32) -> Self {
        Self { mean, var }
    }

    /// Creates a random variable, rejecting non-finite parameters and
    /// negative variance.
    ///
    /// # Errors
    /// Returns `Err` if `mean` or `var` is not finite, or if `var < 0`.
    ///
    /// # Examples
    /// ```
    /// use u_grv::Grv;
    /// assert!(Grv::try_new(1.0, 0.5).is_ok());
    /// assert!(Grv::try_new(1.0, -0.5).is_err());
    /// assert!(Grv::try_new(f32::NAN, 0.5).is_err());
    /// ```
    pub fn try_new(mean: f32, var: f32) -> Result<Self, GrvError> {
        if !mean.is_finite() || !var.is_finite() {
            return Err(GrvError::InvalidParameters(format!(
                "mean and variance must be finite, got mean={mean}, var={var}"
            )));
        }
        if var < 0.0 {
            return Err(GrvError::InvalidParameters(format!(
                "variance must be non-negative, got {var}"
            )));
        }
        Ok(Self { mean, var })
    }

    /// Standard normal N(0, 1).
    pub const fn standard() -> Self {
        Self {
            mean: 0.0,
            var: 1.0,
        }
    }

    /// Point mass at `value` (zero variance).
    pub const fn exact(value: f32) -> Self {
        Self {
            mean: value,
            var: 0.0,
        }
    }

    /// Standard deviation √var. NaN when the variance is negative.
    pub fn std_dev(&self) -> f32 {
        self.var.sqrt()
    }

    /// `true` when both mean and variance are finite.
    pub fn is_finite(&self) -> bool {
        self.mean.is_finite() && self.var.is_finite()
    }

    /// Raises the variable to an exact scalar power.
    ///
    /// Mean is `meanⁿ`; variance is scaled by the squared derivative of
    /// `xⁿ` at the mean, `(n · meanⁿ⁻¹)²`.
    ///
    /// # Examples
    /// ```
    /// use u_grv::Grv;
    /// let g = Grv::new(3.0, 0.1).powf(2.0);
    /// assert!((g.mean - 9.0).abs() < 1e-5);
    /// assert!((g.var - 3.6).abs() < 1e-5);
    /// ```
    pub fn powf(self, n: f32) -> Self {
        let mean = self.mean.powf(n);
        let var = self.var * square(n * self.mean.powf(n - 1.0));
        Self { mean, var }
    }

    /// Raises the variable to an independent random power.
    ///
    /// ```text
    /// mean = a.m ^ b.m
    /// ∂/∂a = b.m · a.m^(b.m − 1)
    /// ∂/∂b = mean · ln(a.m)
    /// var  = (∂/∂a)² · a.v + (∂/∂b)² · b.v
    /// ```
    ///
    /// The logarithm makes the result NaN when `self.mean ≤ 0`.
    pub fn pow(self, exponent: Grv) -> Self {
        let mean = self.mean.powf(exponent.mean);
        let del_base = exponent.mean * self.mean.powf(exponent.mean - 1.0);
        let del_exp = mean * self.mean.ln();
        let var = square(del_base) * self.var + square(del_exp) * exponent.var;
        Self { mean, var }
    }

    /// Probability density of N(mean, var) at `x`.
    ///
    /// A point mass (`var == 0`) has density +∞ at its mean and 0 elsewhere.
    ///
    /// # Examples
    /// ```
    /// use u_grv::Grv;
    /// assert!((Grv::new(1.0, 4.0).pdf(1.0) - 0.199471).abs() < 1e-6);
    /// assert_eq!(Grv::exact(3.0).pdf(3.0), f32::INFINITY);
    /// assert_eq!(Grv::exact(3.0).pdf(4.0), 0.0);
    /// ```
    pub fn pdf(&self, x: f32) -> f32 {
        if self.var == 0.0 {
            return if x == self.mean { f32::INFINITY } else { 0.0 };
        }
        let sigma = f64::from(self.std_dev());
        let z = (f64::from(x) - f64::from(self.mean)) / sigma;
        (special::standard_normal_pdf(z) / sigma) as f32
    }

    /// Cumulative probability P(X ≤ x) of N(mean, var).
    ///
    /// A point mass (`var == 0`) steps from 0 to 1 at its mean.
    ///
    /// # Examples
    /// ```
    /// use u_grv::Grv;
    /// let g = Grv::new(10.0, 4.0);
    /// assert!((g.cdf(10.0) - 0.5).abs() < 1e-6);
    /// assert!((g.cdf(12.0) - 0.841345).abs() < 1e-5);
    /// ```
    pub fn cdf(&self, x: f32) -> f32 {
        if self.var == 0.0 {
            return if x >= self.mean { 1.0 } else { 0.0 };
        }
        let z = (f64::from(x) - f64::from(self.mean)) / f64::from(self.std_dev());
        special::standard_normal_cdf(z) as f32
    }

    /// Inverse CDF: mean + σ·Φ⁻¹(p).
    ///
    /// Returns `None` if `p` is outside `(0, 1)`.
    pub fn quantile(&self, p: f32) -> Option<f32> {
        if p <= 0.0 || p >= 1.0 || p.is_nan() {
            return None;
        }
        let z = special::inverse_normal_cdf(f64::from(p));
        Some((f64::from(self.mean) + f64::from(self.std_dev()) * z) as f32)
    }

    /// Central interval containing `confidence` of the probability mass.
    ///
    /// Returns `None` if `confidence` is outside `(0, 1)`.
    ///
    /// # Examples
    /// ```
    /// use u_grv::Grv;
    /// let (lo, hi) = Grv::new(0.0, 1.0).interval(0.95).unwrap();
    /// assert!((lo + 1.96).abs() < 1e-3);
    /// assert!((hi - 1.96).abs() < 1e-3);
    /// ```
    pub fn interval(&self, confidence: f32) -> Option<(f32, f32)> {
        if confidence <= 0.0 || confidence >= 1.0 || confidence.is_nan() {
            return None;
        }
        let tail = 0.5 * (1.0 - f64::from(confidence));
        let half_width = f64::from(self.std_dev()) * -special::inverse_normal_cdf(tail);
        let mean = f64::from(self.mean);
        Some(((mean - half_width) as f32, (mean + half_width) as f32))
    }
}

impl Default for Grv {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<f32> for Grv {
    fn from(value: f32) -> Self {
        Self::exact(value)
    }
}

impl fmt::Display for Grv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N({}, {})", self.mean, self.var)
    }
}

// ============================================================================
// Scalar operands
// ============================================================================

impl Neg for Grv {
    type Output = Grv;

    fn neg(self) -> Grv {
        Grv::new(-self.mean, self.var)
    }
}

impl Add<f32> for Grv {
    type Output = Grv;

    fn add(self, n: f32) -> Grv {
        Grv::new(self.mean + n, self.var)
    }
}

impl Sub<f32> for Grv {
    type Output = Grv;

    fn sub(self, n: f32) -> Grv {
        Grv::new(self.mean - n, self.var)
    }
}

impl Mul<f32> for Grv {
    type Output = Grv;

    fn mul(self, n: f32) -> Grv {
        Grv::new(self.mean * n, self.var * square(n))
    }
}

impl Div<f32> for Grv {
    type Output = Grv;

    fn div(self, n: f32) -> Grv {
        self * (1.0 / n)
    }
}

impl Add<Grv> for f32 {
    type Output = Grv;

    fn add(self, g: Grv) -> Grv {
        g + self
    }
}

impl Sub<Grv> for f32 {
    type Output = Grv;

    fn sub(self, g: Grv) -> Grv {
        -g + self
    }
}

impl Mul<Grv> for f32 {
    type Output = Grv;

    fn mul(self, g: Grv) -> Grv {
        g * self
    }
}

// ============================================================================
// Random operands
// ============================================================================

impl Add for Grv {
    type Output = Grv;

    fn add(self, rhs: Grv) -> Grv {
        Grv::new(self.mean + rhs.mean, self.var + rhs.var)
    }
}

impl Sub for Grv {
    type Output = Grv;

    fn sub(self, rhs: Grv) -> Grv {
        Grv::new(self.mean - rhs.mean, self.var + rhs.var)
    }
}

impl Mul for Grv {
    type Output = Grv;

    fn mul(self, rhs: Grv) -> Grv {
        let mean = self.mean * rhs.mean;
        let var = square(self.mean) * rhs.var + square(rhs.mean) * self.var;
        Grv::new(mean, var)
    }
}

impl Div for Grv {
    type Output = Grv;

    fn div(self, rhs: Grv) -> Grv {
        let mean = self.mean / rhs.mean;
        // Squared partials of a/b with respect to a and b.
        let del_lhs_sq = 1.0 / square(rhs.mean);
        let del_rhs_sq = square(self.mean * del_lhs_sq);
        Grv::new(mean, del_lhs_sq * self.var + del_rhs_sq * rhs.var)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_normal() {
        let g = Grv::default();
        assert_eq!(g.mean, 0.0);
        assert_eq!(g.var, 1.0);
        assert_eq!(g, Grv::standard());
    }

    #[test]
    fn test_exact_and_from() {
        assert_eq!(Grv::from(2.5), Grv::new(2.5, 0.0));
        assert_eq!(Grv::exact(-1.0).var, 0.0);
    }

    #[test]
    fn test_try_new_rejects() {
        assert!(Grv::try_new(0.0, -1e-3).is_err());
        assert!(Grv::try_new(f32::INFINITY, 1.0).is_err());
        assert!(Grv::try_new(0.0, f32::NAN).is_err());
        assert_eq!(Grv::try_new(0.0, 0.0), Ok(Grv::new(0.0, 0.0)));
    }

    #[test]
    fn test_error_display() {
        let err = Grv::try_new(0.0, -2.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid random variable parameters: variance must be non-negative, got -2"
        );
    }

    #[test]
    fn test_unchecked_new_keeps_negative_variance() {
        let g = Grv::new(1.0, -4.0);
        assert_eq!(g.var, -4.0);
        assert!(g.std_dev().is_nan());
        assert_eq!((g * 2.0).var, -16.0);
    }

    #[test]
    fn test_neg() {
        let g = -Grv::new(3.0, 2.0);
        assert_eq!(g, Grv::new(-3.0, 2.0));
    }

    #[test]
    fn test_scalar_offset() {
        let g = Grv::new(1.0, 0.5);
        assert_eq!(g + 2.0, Grv::new(3.0, 0.5));
        assert_eq!(g - 2.0, Grv::new(-1.0, 0.5));
        assert_eq!(2.0_f32 + g, g + 2.0);
        assert_eq!(2.0_f32 - g, Grv::new(1.0, 0.5));
    }

    #[test]
    fn test_scalar_scale() {
        let g = Grv::new(2.0, 0.5);
        assert_eq!(g * -3.0, Grv::new(-6.0, 4.5));
        assert_eq!(-3.0_f32 * g, g * -3.0);
        assert_eq!(g / 4.0, g * 0.25);
    }

    #[test]
    fn test_divide_by_zero_scalar() {
        let g = Grv::new(1.0, 1.0) / 0.0;
        assert_eq!(g.mean, f32::INFINITY);
        assert_eq!(g.var, f32::INFINITY);
    }

    #[test]
    fn test_powf() {
        let g = Grv::new(2.0, 0.25).powf(3.0);
        assert!((g.mean - 8.0).abs() < 1e-5);
        // (3 · 2²)² · 0.25 = 36
        assert!((g.var - 36.0).abs() < 1e-4);
    }

    #[test]
    fn test_powf_one_is_identity() {
        let g = Grv::new(1.7, 0.3).powf(1.0);
        assert!((g.mean - 1.7).abs() < 1e-6);
        assert!((g.var - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_add_sub_variances_add() {
        let a = Grv::new(1.0, 0.5);
        let b = Grv::new(4.0, 1.5);
        assert_eq!(a + b, Grv::new(5.0, 2.0));
        assert_eq!(a - b, Grv::new(-3.0, 2.0));
    }

    #[test]
    fn test_mul() {
        let g = Grv::new(2.0, 0.1) * Grv::new(5.0, 0.2);
        assert!((g.mean - 10.0).abs() < 1e-6);
        // 5²·0.1 + 2²·0.2 = 3.3
        assert!((g.var - 3.3).abs() < 1e-5);
    }

    #[test]
    fn test_div() {
        let g = Grv::new(6.0, 0.4) / Grv::new(2.0, 0.1);
        assert!((g.mean - 3.0).abs() < 1e-6);
        // 0.4/4 + 0.1·(6/4)² = 0.1 + 0.225
        assert!((g.var - 0.325).abs() < 1e-6);
    }

    #[test]
    fn test_div_by_exact_matches_scalar_division() {
        let a = Grv::new(6.0, 0.4);
        let by_grv = a / Grv::exact(2.0);
        let by_scalar = a / 2.0;
        assert!((by_grv.mean - by_scalar.mean).abs() < 1e-6);
        assert!((by_grv.var - by_scalar.var).abs() < 1e-6);
    }

    #[test]
    fn test_pow_random_exponent() {
        let g = Grv::new(2.0, 0.01).pow(Grv::new(3.0, 0.04));
        assert!((g.mean - 8.0).abs() < 1e-5);
        // (3·2²)²·0.01 + (8·ln 2)²·0.04
        let expected = 144.0 * 0.01 + (8.0 * 2.0_f32.ln()).powi(2) * 0.04;
        assert!((g.var - expected).abs() < 1e-4);
    }

    #[test]
    fn test_pow_exact_exponent_matches_powf() {
        let base = Grv::new(1.5, 0.2);
        let a = base.pow(Grv::exact(2.5));
        let b = base.powf(2.5);
        assert!((a.mean - b.mean).abs() < 1e-6);
        assert!((a.var - b.var).abs() < 1e-6);
    }

    #[test]
    fn test_pow_negative_base_is_nan() {
        let g = Grv::new(-2.0, 0.1).pow(Grv::new(2.0, 0.1));
        assert!(g.var.is_nan());
        assert!(!g.is_finite());
    }

    #[test]
    fn test_pdf_peak() {
        let g = Grv::new(1.0, 4.0);
        // φ(0)/σ
        assert!((g.pdf(1.0) - 0.398_942_3 / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_point_mass_queries() {
        let g = Grv::exact(3.0);
        assert_eq!(g.cdf(3.0), 1.0);
        assert_eq!(g.cdf(3.5), 1.0);
        assert_eq!(g.cdf(2.5), 0.0);
        assert_eq!(g.pdf(3.0), f32::INFINITY);
        assert_eq!(g.pdf(4.0), 0.0);
        assert_eq!(g.quantile(0.5), Some(3.0));
        assert_eq!(g.interval(0.95), Some((3.0, 3.0)));
        assert_eq!(Grv::from(-1.0).cdf(-1.0), 1.0);
    }

    #[test]
    fn test_quantile() {
        let g = Grv::new(5.0, 9.0);
        assert!((g.quantile(0.5).unwrap() - 5.0).abs() < 1e-5);
        assert!((g.quantile(0.975).unwrap() - (5.0 + 3.0 * 1.959_964)).abs() < 1e-3);
        assert_eq!(g.quantile(0.0), None);
        assert_eq!(g.quantile(1.0), None);
        assert_eq!(g.quantile(f32::NAN), None);
    }

    #[test]
    fn test_interval() {
        let (lo, hi) = Grv::new(10.0, 0.25).interval(0.6827).unwrap();
        assert!((lo - 9.5).abs() < 1e-3);
        assert!((hi - 10.5).abs() < 1e-3);
        assert_eq!(Grv::standard().interval(1.0), None);
        assert_eq!(Grv::standard().interval(-0.5), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Grv::new(1.5, 0.25).to_string(), "N(1.5, 0.25)");
    }
}
