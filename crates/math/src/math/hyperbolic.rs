//! Hyperbolic functions and their inverses
//!
//! All built on the precise `exp`/`expm1`/`log`/`log1p` kernels. For
//! `|x| < 22` the `expm1` forms avoid cancellation; above that `e^-|x|` is
//! below half an ulp and the functions collapse to `e^|x| / 2`, split in two
//! halves near the overflow threshold so the final product rounds once.

use crate::bits::{abs, copy_sign};
use crate::math::exp_log::{exp, expm1, log, log1p, EXP_OVERFLOW};
use crate::reduce::LN2;

/// Below this magnitude `sinh x = tanh x = x` and `cosh x = 1`.
const TINY: f64 = 7.450_580_596_923_828e-9;

/// Above this `e^-|x|` no longer affects the result.
const SATURATION: f64 = 22.0;

/// Largest `|x|` with a finite `sinh`/`cosh`.
const SINH_OVERFLOW: f64 = 710.475_860_073_943_9;

/// Above this the inverse functions drop the `1/x` terms.
const LARGE: f64 = 268_435_456.0;

/// `e^h / 2` for `h ≥ SATURATION`, overflowing only when the result does.
#[inline]
fn half_exp(h: f64) -> f64 {
    if h < EXP_OVERFLOW {
        0.5 * exp(h)
    } else if h <= SINH_OVERFLOW {
        let w = exp(0.5 * h);
        (0.5 * w) * w
    } else {
        f64::INFINITY
    }
}

/// Hyperbolic sine.
pub fn sinh(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let h = abs(x);
    if h < TINY {
        return x;
    }
    let magnitude = if h < SATURATION {
        let t = expm1(h);
        0.5 * (t + t / (t + 1.0))
    } else {
        half_exp(h)
    };
    copy_sign(magnitude, x)
}

/// Hyperbolic cosine; `cosh(±∞) = +∞`.
pub fn cosh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let h = abs(x);
    if h < TINY {
        1.0
    } else if h < SATURATION {
        let e = exp(h);
        0.5 * (e + 1.0 / e)
    } else {
        half_exp(h)
    }
}

/// `(sinh x, cosh x)` from a single exponential.
pub fn sinh_and_cosh(x: f64) -> (f64, f64) {
    if x.is_nan() {
        return (x, x);
    }
    let h = abs(x);
    if h < TINY {
        return (x, 1.0);
    }
    if h < SATURATION {
        let t = expm1(h);
        let e = t + 1.0;
        (copy_sign(0.5 * (t + t / e), x), 0.5 * (e + 1.0 / e))
    } else {
        let half = half_exp(h);
        (copy_sign(half, x), half)
    }
}

/// Hyperbolic tangent; `tanh(±∞) = ±1`.
pub fn tanh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let h = abs(x);
    if h < TINY {
        return x;
    }
    let magnitude = if h < SATURATION {
        let t = expm1(2.0 * h);
        t / (t + 2.0)
    } else {
        1.0
    };
    copy_sign(magnitude, x)
}

/// Inverse hyperbolic sine.
pub fn asinh(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let h = abs(x);
    if h < TINY {
        return x;
    }
    let magnitude = if h > LARGE {
        log(h) + LN2
    } else if h > 2.0 {
        log(2.0 * h + 1.0 / (libm::sqrt(h * h + 1.0) + h))
    } else {
        let h2 = h * h;
        log1p(h + h2 / (1.0 + libm::sqrt(1.0 + h2)))
    };
    copy_sign(magnitude, x)
}

/// Inverse hyperbolic cosine; NaN below 1.
pub fn acosh(x: f64) -> f64 {
    if !(x >= 1.0) {
        return f64::NAN;
    }
    if x > LARGE {
        // log(+∞) = +∞
        log(x) + LN2
    } else if x > 2.0 {
        log(2.0 * x - 1.0 / (x + libm::sqrt(x * x - 1.0)))
    } else {
        let t = x - 1.0;
        log1p(t + libm::sqrt(2.0 * t + t * t))
    }
}

/// Inverse hyperbolic tangent; `±∞` at `±1`, NaN outside `[-1, 1]`.
pub fn atanh(x: f64) -> f64 {
    let h = abs(x);
    if !(h <= 1.0) {
        return f64::NAN;
    }
    if h < TINY {
        return x;
    }
    let magnitude = if h < 0.5 {
        let twice = h + h;
        0.5 * log1p(twice + twice * h / (1.0 - h))
    } else {
        0.5 * log1p((h + h) / (1.0 - h))
    };
    copy_sign(magnitude, x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= 1e-14 * expected.abs().max(1.0)
    }

    #[test]
    fn test_against_libm() {
        for &x in &[-30.0, -5.0, -1.0, -0.3, 1e-5, 0.5, 2.0, 21.9, 100.0, 700.0] {
            assert!(close(sinh(x), libm::sinh(x)), "sinh({})", x);
            assert!(close(cosh(x), libm::cosh(x)), "cosh({})", x);
            assert!(close(tanh(x), libm::tanh(x)), "tanh({})", x);
            let (s, c) = sinh_and_cosh(x);
            assert!(close(s, sinh(x)) && close(c, cosh(x)), "sinh_and_cosh({})", x);
        }
    }

    #[test]
    fn test_overflow_boundary() {
        assert!(sinh(710.0).is_finite());
        assert!(close(cosh(710.0), libm::cosh(710.0)));
        assert_eq!(sinh(711.0), f64::INFINITY);
        assert_eq!(sinh(-711.0), f64::NEG_INFINITY);
        assert_eq!(cosh(-711.0), f64::INFINITY);
    }

    #[test]
    fn test_special_values() {
        assert_eq!(cosh(f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(sinh(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(tanh(f64::INFINITY), 1.0);
        assert_eq!(tanh(f64::NEG_INFINITY), -1.0);
        assert!(sinh(-0.0).is_sign_negative());
        assert!(tanh(-0.0).is_sign_negative());
        assert_eq!(cosh(-0.0), 1.0);
        assert!(sinh(f64::NAN).is_nan());
        assert!(sinh_and_cosh(f64::NAN).1.is_nan());
    }

    #[test]
    fn test_inverse_functions() {
        for &x in &[1e-5, 0.3, 1.5, 3.0, 1e5, 1e10, 1e300] {
            assert!(close(asinh(x), libm::asinh(x)), "asinh({})", x);
            assert!(close(asinh(-x), libm::asinh(-x)), "asinh(-{})", x);
        }
        for &x in &[1.0, 1.0001, 1.5, 3.0, 1e10, 1e300] {
            assert!(close(acosh(x), libm::acosh(x)), "acosh({})", x);
        }
        for &x in &[1e-5, 0.2, 0.5, 0.9, 0.999_999] {
            assert!(close(atanh(x), libm::atanh(x)), "atanh({})", x);
            assert!(close(atanh(-x), libm::atanh(-x)), "atanh(-{})", x);
        }
        assert!(acosh(0.5).is_nan());
        assert_eq!(acosh(f64::INFINITY), f64::INFINITY);
        assert_eq!(atanh(1.0), f64::INFINITY);
        assert_eq!(atanh(-1.0), f64::NEG_INFINITY);
        assert!(atanh(1.5).is_nan());
        assert_eq!(asinh(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}
