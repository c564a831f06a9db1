//! Powers and roots
//!
//! `pow` follows the C99 special-value table (F.9.4.4) before touching any
//! kernel:
//!
//! | Case | Result |
//! |------|--------|
//! | `pow(x, ±0)` | `1`, even for NaN `x` |
//! | `pow(1, y)` | `1`, even for NaN `y` |
//! | NaN otherwise | NaN |
//! | `pow(-1, ±∞)` | `1` |
//! | `pow(x, -∞)` | `+∞` for `|x| < 1`, `+0` for `|x| > 1` |
//! | `pow(x, +∞)` | `+0` for `|x| < 1`, `+∞` for `|x| > 1` |
//! | `pow(-∞, y)`, `pow(-0, y)` | sign of the base when `y` is an odd integer |
//! | `pow(x < 0, y)` | NaN unless `y` is an integer |
//!
//! An exact power-of-two base with an integer exponent is answered exactly, so
//! `pow(2.0, k as f64)` and [`two_pow`](crate::two_pow) agree bit for bit.

use altair_numbers::{to_i32_no_modulo, OverflowArith};

use crate::bits::{abs, copy_sign, decompose, exponent, scale_pow2, two_pow, EXPONENT_BIAS};
use crate::eval::cbrt_scaled;
use crate::math::exp_log::{exp, exp_quick, log, log_quick};
use crate::special::{is_integer, is_odd_integer};

/// Largest `|y|` for which `pow_quick` stays on the quick kernels.
const QUICK_POW_MAX_EXPONENT: f64 = 1.0e4;

/// `pow_int` multiplies out exponents up to this magnitude.
const POW_INT_SQUARING_LIMIT: u32 = 64;

const TWO_POW_54: f64 = 18_014_398_509_481_984.0;
const TWO_POW_600: f64 = two_pow(600);
const TWO_POW_MINUS_600: f64 = two_pow(-600);
const TWO_POW_500: f64 = two_pow(500);
const TWO_POW_MINUS_500: f64 = two_pow(-500);

/// Unbiased exponent of `|x|` when it is an exact power of two, subnormals
/// included.
fn power_of_two_exponent(x: f64) -> Option<i32> {
    let parts = decompose(x);
    if parts.biased_exponent == 0 {
        if parts.mantissa.is_power_of_two() {
            Some(parts.mantissa.trailing_zeros() as i32 - 1074)
        } else {
            None
        }
    } else if parts.biased_exponent < 0x7FF && parts.mantissa == 0 {
        Some(parts.biased_exponent as i32 - EXPONENT_BIAS)
    } else {
        None
    }
}

/// `pow` for an infinite `y`.
fn pow_infinite_exponent(x: f64, y: f64) -> f64 {
    let ax = abs(x);
    if ax == 1.0 {
        1.0
    } else if (ax < 1.0) == (y < 0.0) {
        f64::INFINITY
    } else {
        0.0
    }
}

/// `pow` for a base of `±0` or `±∞`.
fn pow_zero_or_infinite_base(x: f64, y: f64) -> f64 {
    let grows = (x == 0.0) == (y < 0.0);
    let magnitude = if grows { f64::INFINITY } else { 0.0 };
    if is_odd_integer(y) {
        copy_sign(magnitude, x)
    } else {
        magnitude
    }
}

/// `x` raised to `y`.
///
/// # Error Bounds
///
/// Within 1e-10 of the reference (relative, for results of magnitude 1 or
/// more). An exact power-of-two base with an integer exponent gives the exact
/// [`two_pow`](crate::two_pow) result.
///
/// # Special Values
///
/// The C99 Annex F table:
/// - `pow(x, ±0) = 1` and `pow(1, y) = 1`, even for NaN
/// - `pow(-1, ±∞) = 1`; `|x| < 1` gives `+0` at `+∞` and `+∞` at `-∞`, and the
///   reverse for `|x| > 1`
/// - `pow(±0, y < 0) = ±∞` for odd integer `y`, `+∞` otherwise
/// - a negative finite base with a non-integer exponent gives NaN
///
/// # Example
///
/// ```rust
/// use altair_math::pow;
///
/// assert!((pow(2.0, 0.5) - core::f64::consts::SQRT_2).abs() < 1e-15);
/// assert_eq!(pow(-2.0, 3.0), -8.0);
/// assert_eq!(pow(-0.0, -1.0), f64::NEG_INFINITY);
/// assert!(pow(-8.0, 1.0 / 3.0).is_nan());
/// ```
pub fn pow(x: f64, y: f64) -> f64 {
    if y == 0.0 || x == 1.0 {
        return 1.0;
    }
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if y.is_infinite() {
        return pow_infinite_exponent(x, y);
    }
    if x == 0.0 || x.is_infinite() {
        return pow_zero_or_infinite_base(x, y);
    }

    let y_integer = is_integer(y);
    if x < 0.0 && !y_integer {
        return f64::NAN;
    }
    let negate = x < 0.0 && is_odd_integer(y);
    let ax = abs(x);

    let magnitude = match power_of_two_exponent(ax) {
        Some(e) if y_integer => {
            // float-to-int casts saturate, and so does the product
            let k = (e as i64).mul_no_modulo(y as i64);
            two_pow(to_i32_no_modulo(k))
        }
        _ => exp(y * log(ax)),
    };
    if negate {
        -magnitude
    } else {
        magnitude
    }
}

/// Quick `pow` for a positive finite base and `|y| ≤ 1e4`.
///
/// # Error Bounds
///
/// At most 3e-3 inside that window. The error grows with `|y|`, from the
/// quick logarithm, and stays below 1e-4 relative for `|y| ≤ 10`.
///
/// Every other input, and every special value, is handled by [`pow`].
///
/// # Example
///
/// ```rust
/// use altair_math::{pow, pow_quick};
///
/// assert!((pow_quick(1.5, 2.5) - pow(1.5, 2.5)).abs() < 1e-4);
/// assert_eq!(pow_quick(-2.0, 3.0), -8.0);
/// ```
pub fn pow_quick(x: f64, y: f64) -> f64 {
    if x > 0.0 && x.is_finite() && abs(y) <= QUICK_POW_MAX_EXPONENT && y != 0.0 && x != 1.0 {
        exp_quick(y * log_quick(x))
    } else {
        pow(x, y)
    }
}

/// `x` raised to an integer power.
///
/// Small exponents are multiplied out by repeated squaring; larger ones go
/// through [`pow`].
pub fn pow_int(x: f64, n: i32) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let mut e = n.unsigned_abs();
    if e > POW_INT_SQUARING_LIMIT {
        return pow(x, n as f64);
    }
    let mut base = x;
    let mut acc = 1.0;
    while e > 0 {
        if e & 1 == 1 {
            acc *= base;
        }
        base *= base;
        e >>= 1;
    }
    if n > 0 {
        acc
    } else if acc.is_infinite() && x.is_finite() {
        // 1/acc may still be a subnormal
        pow(x, n as f64)
    } else {
        1.0 / acc
    }
}

/// Square root.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Cube root; defined for negative inputs.
pub fn cbrt(x: f64) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let mut ax = abs(x);
    let mut bias = 0;
    if ax < f64::MIN_POSITIVE {
        ax *= TWO_POW_54;
        bias = -54;
    }
    let e = exponent(ax);
    let m = scale_pow2(ax, -e);
    let e = e + bias;
    let root = cbrt_scaled(m, e.rem_euclid(3) as usize);
    copy_sign(scale_pow2(root, e.div_euclid(3)), x)
}

/// `sqrt(x² + y²)` without intermediate overflow or underflow.
///
/// An infinite argument gives `+∞` even when the other is NaN.
pub fn hypot(x: f64, y: f64) -> f64 {
    if x.is_infinite() || y.is_infinite() {
        return f64::INFINITY;
    }
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    let (mut a, mut b) = (abs(x), abs(y));
    if a < b {
        core::mem::swap(&mut a, &mut b);
    }
    if b == 0.0 {
        return a;
    }
    let scale = if a > TWO_POW_500 {
        TWO_POW_MINUS_600
    } else if a < TWO_POW_MINUS_500 {
        TWO_POW_600
    } else {
        1.0
    };
    let (a, b) = (a * scale, b * scale);
    libm::sqrt(a * a + b * b) / scale
}
