//! Exponentials and logarithms
//!
//! `exp` and `log` come in both tiers; `expm1` and `log1p` stay accurate
//! relative to tiny results, which `exp(x) - 1` and `log(1 + x)` cannot.

use crate::bits::abs;
use crate::eval::{expm1_small, log1p_small, EXPM1_TABLE_LIMIT, LOG_NEAR_ONE};
use crate::tier::{Precise, Quick, Tier, QUICK_EXP_MAX};

/// Largest `x` with a finite `e^x`.
pub(crate) const EXP_OVERFLOW: f64 = 709.782_712_893_384;

/// Below this `e^x` rounds to zero.
const EXP_UNDERFLOW: f64 = -745.133_219_101_941_1;

/// Below this `e^x - 1` rounds to `-1`.
const EXPM1_SATURATION: f64 = -40.0;

const TINY: f64 = 5.551_115_123_125_783e-17;

const FRAC_1_LN_10: f64 = core::f64::consts::LOG10_E;

/// `e^x` on tier `T`, with the overflow and underflow limits applied.
#[inline]
pub fn exp_with<T: Tier>(x: f64) -> f64 {
    if x.is_nan() {
        x
    } else if x > EXP_OVERFLOW {
        f64::INFINITY
    } else if x < EXP_UNDERFLOW {
        0.0
    } else {
        T::exp(x)
    }
}

/// Exponential.
///
/// # Error Bounds
///
/// Relative error within 1e-10 (about one ulp in practice) wherever the
/// result is finite and normal; subnormal results are within one ulp of the
/// reference.
///
/// # Special Values
///
/// - `exp(NaN) = NaN`, `exp(+∞) = +∞`, `exp(-∞) = +0`
/// - `+∞` for `x > 709.782712893384`, `+0` for `x < -745.1332191019411`
///
/// # Example
///
/// ```rust
/// use altair_math::exp;
///
/// assert!((exp(1.0) - core::f64::consts::E).abs() < 1e-15);
/// assert_eq!(exp(710.0), f64::INFINITY);
/// assert_eq!(exp(f64::NEG_INFINITY), 0.0);
/// ```
#[inline]
pub fn exp(x: f64) -> f64 {
    exp_with::<Precise>(x)
}

/// Quick exponential.
///
/// # Error Bounds
///
/// Relative error below 1e-5 for `|x| ≤ QUICK_EXP_MAX`. Outside that window
/// it is [`exp`], special values and saturation included.
///
/// # Example
///
/// ```rust
/// use altair_math::{exp, exp_quick};
///
/// let precise = exp(2.0);
/// assert!((exp_quick(2.0) - precise).abs() / precise < 1e-5);
/// assert_eq!(exp_quick(800.0), f64::INFINITY);
/// ```
#[inline]
pub fn exp_quick(x: f64) -> f64 {
    if abs(x) > QUICK_EXP_MAX {
        exp(x)
    } else {
        exp_with::<Quick>(x)
    }
}

/// `e^x - 1`, accurate for `x` near zero.
pub fn expm1(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let h = abs(x);
    if h < TINY {
        x
    } else if h <= EXPM1_TABLE_LIMIT {
        expm1_small(x)
    } else if x < EXPM1_SATURATION {
        -1.0
    } else {
        exp(x) - 1.0
    }
}

/// Natural logarithm on tier `T`: NaN below zero, `-∞` at `±0`.
#[inline]
pub fn log_with<T: Tier>(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        f64::NAN
    } else if x == 0.0 {
        f64::NEG_INFINITY
    } else if x.is_infinite() {
        x
    } else {
        T::log(x)
    }
}

/// Natural logarithm.
///
/// # Error Bounds
///
/// Within 1e-10 of the reference for every positive finite `x`, subnormals
/// included.
///
/// # Special Values
///
/// - `log(NaN) = NaN`, `log(x < 0) = NaN`
/// - `log(±0) = -∞`, `log(+∞) = +∞`
///
/// # Example
///
/// ```rust
/// use altair_math::log;
///
/// assert!((log(core::f64::consts::E) - 1.0).abs() < 1e-15);
/// assert!(log(-1.0).is_nan());
/// assert_eq!(log(0.0), f64::NEG_INFINITY);
/// ```
#[inline]
pub fn log(x: f64) -> f64 {
    log_with::<Precise>(x)
}

/// Quick natural logarithm.
///
/// Absolute error below 1e-6 on every positive input; there is no window.
/// Special values are those of [`log`].
#[inline]
pub fn log_quick(x: f64) -> f64 {
    log_with::<Quick>(x)
}

/// `ln(1 + u)`, accurate for `u` near zero; NaN below `-1`.
pub fn log1p(u: f64) -> f64 {
    if u.is_nan() || u < -1.0 {
        return f64::NAN;
    }
    if u == -1.0 {
        return f64::NEG_INFINITY;
    }
    if u.is_infinite() {
        return u;
    }
    if abs(u) < LOG_NEAR_ONE {
        return log1p_small(u);
    }
    let w = 1.0 + u;
    // rounding error of 1 + u, first order
    Precise::log(w) + (u - (w - 1.0)) / w
}

/// Base-10 logarithm.
#[inline]
pub fn log10(x: f64) -> f64 {
    log(x) * FRAC_1_LN_10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(actual: f64, expected: f64) -> f64 {
        (actual - expected).abs() / expected.abs().max(1.0)
    }

    #[test]
    fn test_exp_limits() {
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(exp(710.0), f64::INFINITY);
        assert_eq!(exp(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp(-746.0), 0.0);
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
        assert!(exp(f64::NAN).is_nan());
        assert!(exp(709.78).is_finite());
        let sub = exp(-740.0);
        assert!(sub > 0.0 && sub < f64::MIN_POSITIVE);
        assert!((sub - libm::exp(-740.0)).abs() <= f64::from_bits(1));
    }

    #[test]
    fn test_exp_quick_window() {
        for &x in &[-700.0, -3.0, 0.5, 10.0, 700.0] {
            let rel = ((exp_quick(x) - libm::exp(x)) / libm::exp(x)).abs();
            assert!(rel < 1e-5, "exp_quick({}) rel error {:.3e}", x, rel);
        }
        assert_eq!(exp_quick(705.0), exp(705.0));
        assert_eq!(exp_quick(800.0), f64::INFINITY);
        assert!(exp_quick(f64::NAN).is_nan());
    }

    #[test]
    fn test_expm1() {
        for &x in &[1e-20, -1e-10, 0.1, -0.3, 0.5, -2.0, 30.0] {
            let expected = libm::expm1(x);
            let rel = ((expm1(x) - expected) / expected).abs();
            assert!(rel < 1e-14, "expm1({}) rel error {:.3e}", x, rel);
        }
        assert_eq!(expm1(f64::NEG_INFINITY), -1.0);
        assert_eq!(expm1(-50.0), -1.0);
        assert_eq!(expm1(f64::INFINITY), f64::INFINITY);
        assert!(expm1(-0.0).is_sign_negative());
    }

    #[test]
    fn test_log_domain() {
        assert!(log(-1.0).is_nan());
        assert!(log(f64::NEG_INFINITY).is_nan());
        assert_eq!(log(0.0), f64::NEG_INFINITY);
        assert_eq!(log(-0.0), f64::NEG_INFINITY);
        assert_eq!(log(f64::INFINITY), f64::INFINITY);
        assert_eq!(log(1.0), 0.0);
        assert!(log_quick(-2.0).is_nan());
        assert_eq!(log_quick(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_log_against_libm() {
        for &x in &[5e-324, 1e-200, 0.3, 0.99, 1.5, 100.0, 1e200] {
            assert!(relative_error(log(x), libm::log(x)) < 2e-15, "log({})", x);
            assert!(relative_error(log_quick(x), libm::log(x)) < 1e-6, "log_quick({})", x);
            assert!(relative_error(log10(x), libm::log10(x)) < 1e-14, "log10({})", x);
        }
    }

    #[test]
    fn test_log1p() {
        for &u in &[1e-300, -1e-12, 0.01, -0.5, 0.75, 3.0, 1e10] {
            let expected = libm::log1p(u);
            let rel = ((log1p(u) - expected) / expected).abs();
            assert!(rel < 1e-14, "log1p({}) rel error {:.3e}", u, rel);
        }
        assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
        assert!(log1p(-1.5).is_nan());
        assert_eq!(log1p(f64::INFINITY), f64::INFINITY);
        assert!(log1p(-0.0).is_sign_negative());
    }
}
