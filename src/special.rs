//! Standard normal primitives.
//!
//! Density, cumulative distribution and quantile of N(0, 1), evaluated in
//! `f64`. [`Grv`](crate::Grv) narrows the results back to `f32` after
//! standardising its argument.

/// 1/√(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Lower breakpoint between the tail and central regions of
/// [`inverse_normal_cdf`].
const P_LOW: f64 = 0.02425;

/// Standard normal PDF φ(x) = (1/√(2π)) exp(−x²/2).
///
/// # Examples
/// ```
/// use u_grv::special::standard_normal_pdf;
/// assert!((standard_normal_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
pub fn standard_normal_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Complementary error function erfc(x) = 1 − erf(x).
///
/// # Algorithm
/// Chebyshev-fitted exponential form from Press et al., *Numerical Recipes*
/// (2nd ed.), §6.2 (`erfcc`). Fractional error < 1.2 × 10⁻⁷ everywhere.
///
/// # Examples
/// ```
/// use u_grv::special::erfc;
/// assert!((erfc(0.0) - 1.0).abs() < 1e-7);
/// assert!((erfc(1.0) - 0.157299207).abs() < 1e-7);
/// ```
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let tail = t * (-z * z + poly).exp();
    if x >= 0.0 {
        tail
    } else {
        2.0 - tail
    }
}

/// Standard normal CDF Φ(x) = ½ erfc(−x/√2).
///
/// NaN in, NaN out; ±∞ map to 1 and 0.
///
/// # Examples
/// ```
/// use u_grv::special::standard_normal_cdf;
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-4);
/// ```
pub fn standard_normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Inverse standard normal CDF: returns `z` with Φ(z) = `p`.
///
/// # Algorithm
/// Acklam's rational approximation, split into a central region and two
/// tails at `P_LOW`. Relative error < 1.15 × 10⁻⁹.
///
/// # Returns
/// - `f64::NAN` if `p` is NaN or outside `[0, 1]`.
/// - `f64::NEG_INFINITY` / `f64::INFINITY` for `p == 0` / `p == 1`.
///
/// # Examples
/// ```
/// use u_grv::special::inverse_normal_cdf;
/// assert!(inverse_normal_cdf(0.5).abs() < 1e-9);
/// assert!((inverse_normal_cdf(0.975) - 1.959964).abs() < 1e-5);
/// ```
pub fn inverse_normal_cdf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_690e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];

    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    let tail = |q: f64| {
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        num / den
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p > 1.0 - P_LOW {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    } else {
        let q = p - 0.5;
        let r = q * q;
        let num = (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q;
        let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
        num / den
    }
}
