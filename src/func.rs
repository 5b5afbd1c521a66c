//! Elementary functions of Gaussian random variables.
//!
//! Each function maps the mean through the scalar function and scales the
//! variance by the squared derivative at the mean:
//!
//! ```text
//! f(N(m, v)) ≈ N(f(m), v · f′(m)²)
//! ```
//!
//! | Function | Mean | Variance |
//! |---|---|---|
//! | [`sin`] | sin m | v·cos²m |
//! | [`cos`] | cos m | v·sin²m |
//! | [`tan`] | tan m | v·(1/cos²m)² |
//! | [`asin`] | asin m | v/\|1−m²\| |
//! | [`acos`] | acos m | v/\|1−m²\| |
//! | [`atan`] | atan m | v/(1+m²)² |
//! | [`sinh`] | sinh m | v·cosh²m |
//! | [`cosh`] | cosh m | v·sinh²m |
//! | [`tanh`] | tanh m | v·(1−tanh²m)² |
//! | [`sqrt`] | √m | v/(4\|m\|) |
//! | [`exp`] | eᵐ | v·e²ᵐ |
//! | [`log`] | ln m | v/m² |
//!
//! The names shadow the scalar functions on purpose, so import them through
//! the module path (`func::sin(g)`) rather than with a glob.
//!
//! Domain violations (`log` of a negative mean, `asin` outside `[−1, 1]`,
//! `sqrt` at zero) are not intercepted and surface as NaN or ±∞.

use crate::num::square;
use crate::Grv;

/// Sine.
///
/// # Examples
/// ```
/// use u_grv::{func, Grv};
/// let g = func::sin(Grv::new(0.0, 1.0));
/// assert_eq!(g, Grv::new(0.0, 1.0));
/// ```
pub fn sin(g: Grv) -> Grv {
    Grv::new(g.mean.sin(), g.var * square(g.mean.cos()))
}

/// Cosine. cos′ = −sin, and the sign drops out when squared.
pub fn cos(g: Grv) -> Grv {
    Grv::new(g.mean.cos(), g.var * square(g.mean.sin()))
}

/// Tangent.
///
/// tan′(m) = sec²(m) = 1/cos²(m), so the variance grows without bound as
/// the mean approaches an odd multiple of π/2.
///
/// # Examples
/// ```
/// use u_grv::{func, Grv};
/// let g = func::tan(Grv::new(std::f32::consts::FRAC_PI_4, 0.1));
/// assert!((g.mean - 1.0).abs() < 1e-6);
/// // sec⁴(π/4) = 4
/// assert!((g.var - 0.4).abs() < 1e-5);
/// ```
pub fn tan(g: Grv) -> Grv {
    Grv::new(g.mean.tan(), g.var * square(1.0 / square(g.mean.cos())))
}

/// Inverse sine.
///
/// The denominator keeps an absolute value even though `1 − m²` is already
/// non-negative on the domain of `asin`.
pub fn asin(g: Grv) -> Grv {
    Grv::new(g.mean.asin(), g.var / (1.0 - square(g.mean)).abs())
}

/// Inverse cosine. Same variance as [`asin`].
pub fn acos(g: Grv) -> Grv {
    Grv::new(g.mean.acos(), g.var / (1.0 - square(g.mean)).abs())
}

/// Inverse tangent. atan′(m) = 1/(1 + m²).
pub fn atan(g: Grv) -> Grv {
    Grv::new(g.mean.atan(), g.var / square(1.0 + square(g.mean)))
}

/// Hyperbolic sine.
pub fn sinh(g: Grv) -> Grv {
    Grv::new(g.mean.sinh(), g.var * square(g.mean.cosh()))
}

/// Hyperbolic cosine.
pub fn cosh(g: Grv) -> Grv {
    Grv::new(g.mean.cosh(), g.var * square(g.mean.sinh()))
}

/// Hyperbolic tangent.
///
/// Uses tanh′ = 1 − tanh², reusing the mean already computed. Far from zero
/// the function saturates and the output variance collapses.
///
/// # Examples
/// ```
/// use u_grv::{func, Grv};
/// let g = func::tanh(Grv::new(0.0, 0.5));
/// assert_eq!(g, Grv::new(0.0, 0.5));
/// assert!(func::tanh(Grv::new(10.0, 0.5)).var < 1e-12);
/// ```
pub fn tanh(g: Grv) -> Grv {
    let t = g.mean.tanh();
    Grv::new(t, g.var * square(1.0 - square(t)))
}

/// Square root. sqrt′(m)² = 1/(4m); the absolute value keeps a negative
/// mean from flipping the variance sign (the mean itself is NaN there).
///
/// # Examples
/// ```
/// use u_grv::{func, Grv};
/// assert_eq!(func::sqrt(Grv::new(4.0, 0.0)), Grv::new(2.0, 0.0));
/// ```
pub fn sqrt(g: Grv) -> Grv {
    Grv::new(g.mean.sqrt(), g.var / (4.0 * g.mean.abs()))
}

/// Natural exponential. exp′ = exp, so the variance scales by e²ᵐ.
pub fn exp(g: Grv) -> Grv {
    let e = g.mean.exp();
    Grv::new(e, g.var * square(e))
}

/// Natural logarithm.
///
/// log′(m) = 1/m, so the output variance is the squared relative
/// uncertainty v/m² of the input.
///
/// # Examples
/// ```
/// use u_grv::{func, Grv};
/// // 10 % relative standard deviation
/// let g = func::log(Grv::new(50.0, 25.0));
/// assert!((g.mean - 50.0_f32.ln()).abs() < 1e-6);
/// assert!((g.var - 0.01).abs() < 1e-7);
/// ```
pub fn log(g: Grv) -> Grv {
    Grv::new(g.mean.ln(), g.var / square(g.mean))
}

/// Two-argument arctangent of independent `gy` and `gx`.
///
/// With `x² = gx.mean²` and `y² = gy.mean²`:
///
/// ```text
/// mean = atan2(gy.mean, gx.mean)
/// var  = (x²·gy.var + y²·gx.var) / (x² + y²)²
/// ```
///
/// Both means at zero give a NaN variance.
///
/// # Examples
/// ```
/// use u_grv::{func, Grv};
/// let heading = func::atan2(Grv::new(1.0, 0.0), Grv::new(1.0, 0.0));
/// assert!((heading.mean - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
/// assert_eq!(heading.var, 0.0);
/// ```
pub fn atan2(gy: Grv, gx: Grv) -> Grv {
    let mean = gy.mean.atan2(gx.mean);
    let x_sq = square(gx.mean);
    let y_sq = square(gy.mean);
    let var = (x_sq * gy.var + y_sq * gx.var) / square(x_sq + y_sq);
    Grv::new(mean, var)
}

/// Fuses two independent estimates of the same quantity.
///
/// Inverse-variance weighting, i.e. one Kalman measurement update:
///
/// ```text
/// mean = (a.m·b.v + b.m·a.v) / (a.v + b.v)
/// var  = a.v·b.v / (a.v + b.v)
/// ```
///
/// Commutative, and for positive variances the fused variance never exceeds
/// either input. Two zero variances give NaN.
///
/// # Examples
/// ```
/// use u_grv::{func, Grv};
/// let fused = func::fuse(Grv::new(0.0, 1.0), Grv::new(10.0, 1.0));
/// assert_eq!(fused, Grv::new(5.0, 0.5));
/// ```
pub fn fuse(lhs: Grv, rhs: Grv) -> Grv {
    let var_sum_inv = 1.0 / (lhs.var + rhs.var);
    let mean = (lhs.mean * rhs.var + rhs.mean * lhs.var) * var_sum_inv;
    let var = lhs.var * rhs.var * var_sum_inv;
    Grv::new(mean, var)
}

/// Fuses any number of independent estimates of the same quantity.
///
/// Left fold of [`fuse`]. Returns `None` for an empty input.
///
/// # Examples
/// ```
/// use u_grv::{func, Grv};
/// let readings = [Grv::new(1.0, 4.0), Grv::new(2.0, 4.0), Grv::new(3.0, 4.0)];
/// let fused = func::fuse_all(readings).unwrap();
/// assert!((fused.mean - 2.0).abs() < 1e-6);
/// assert!((fused.var - 4.0 / 3.0).abs() < 1e-6);
/// assert!(func::fuse_all(Vec::<Grv>::new()).is_none());
/// ```
pub fn fuse_all<I>(estimates: I) -> Option<Grv>
where
    I: IntoIterator<Item = Grv>,
{
    estimates.into_iter().reduce(fuse)
}

// ============================================================================
// Tests
// ============================================================================
