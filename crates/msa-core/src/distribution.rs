//! Normal and Student-t distribution approximations
//!
//! The inverse normal CDF uses Acklam's rational approximation (the
//! Beasley-Springer-Moro family): three regions split at p = 0.02425 and
//! p = 0.97575, relative error below 1.15e-9 over the full range. The error
//! function uses the Abramowitz-Stegun 7.1.26 polynomial, |error| <= 1.5e-7.
//!
//! These are approximations on purpose. The Shapiro-Wilk and Grubbs
//! machinery downstream is calibrated against these exact coefficients, so
//! swapping in exact distribution code changes p-values.

use crate::error::{Error, Result};

// Acklam coefficients for the central rational approximation.
const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
// Tail region coefficients.
const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Lower/upper breakpoints between the tail and central regions.
const P_LOW: f64 = 0.02425;
const P_HIGH: f64 = 1.0 - P_LOW;

/// Quantile function of the standard normal distribution.
///
/// Returns an error for `p` outside the open interval (0, 1).
pub fn inverse_normal_cdf(p: f64) -> Result<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(Error::invalid_probability(p));
    }

    let x = if p < P_LOW {
        // Lower tail
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= P_HIGH {
        // Central region
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        // Upper tail, by symmetry
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -((((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0))
    };

    Ok(x)
}

/// Error function, Abramowitz-Stegun formula 7.1.26.
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// CDF of the standard normal distribution via [`erf`].
pub fn standard_normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// One-sided critical value of the Student-t distribution at significance
/// `alpha` with `df` degrees of freedom.
///
/// For df >= 30 the normal quantile is returned directly; below that a
/// Cornish-Fisher expansion in 1/df corrects the normal quantile toward the
/// heavier t tails. Good to a few percent at df >= 3, which is all the
/// Grubbs screening needs.
pub fn student_t_critical(alpha: f64, df: usize) -> Result<f64> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(Error::invalid_probability(alpha));
    }
    if df == 0 {
        return Err(Error::InvalidParameter(
            "Degrees of freedom must be at least 1".to_string(),
        ));
    }

    let z = inverse_normal_cdf(1.0 - alpha)?;
    if df >= 30 {
        return Ok(z);
    }

    let d = df as f64;
    let g1 = (z.powi(3) + z) / 4.0;
    let g2 = (5.0 * z.powi(5) + 16.0 * z.powi(3) + 3.0 * z) / 96.0;
    Ok(z + g1 / d + g2 / (d * d))
}
