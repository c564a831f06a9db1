//! Rounding and IEEE remainder
//!
//! Float-to-float rounding keeps the sign of zero (`floor(-0.0) = -0.0`,
//! `ceil(-0.5) = -0.0`) and returns NaN, infinities and values already
//! integral (`|x| ≥ 2^52`) unchanged. Float-to-integer rounding (`round`,
//! `round_f32`) rounds ties away from zero, maps NaN to 0 and saturates.

use crate::bits::{abs, copy_sign};

const TWO_POW_52: f64 = 4_503_599_627_370_496.0;
const TWO_POW_23: f32 = 8_388_608.0;

/// Truncation toward zero for `|x| < 2^52`.
#[inline(always)]
fn trunc_small(x: f64) -> f64 {
    (x as i64) as f64
}

#[inline(always)]
fn trunc_small_f32(x: f32) -> f32 {
    (x as i32) as f32
}

/// Largest integer not above `x`.
#[inline]
pub fn floor(x: f64) -> f64 {
    if !(abs(x) < TWO_POW_52) {
        return x;
    }
    let t = trunc_small(x);
    let r = if t > x { t - 1.0 } else { t };
    copy_sign(r, x)
}

/// Smallest integer not below `x`.
#[inline]
pub fn ceil(x: f64) -> f64 {
    if !(abs(x) < TWO_POW_52) {
        return x;
    }
    let t = trunc_small(x);
    let r = if t < x { t + 1.0 } else { t };
    copy_sign(r, x)
}

/// [`floor`] for `f32`.
#[inline]
pub fn floor_f32(x: f32) -> f32 {
    if !(libm::fabsf(x) < TWO_POW_23) {
        return x;
    }
    let t = trunc_small_f32(x);
    let r = if t > x { t - 1.0 } else { t };
    libm::copysignf(r, x)
}

/// [`ceil`] for `f32`.
#[inline]
pub fn ceil_f32(x: f32) -> f32 {
    if !(libm::fabsf(x) < TWO_POW_23) {
        return x;
    }
    let t = trunc_small_f32(x);
    let r = if t < x { t + 1.0 } else { t };
    libm::copysignf(r, x)
}

/// Nearest `i64`, ties away from zero.
///
/// NaN gives 0; values beyond the `i64` range saturate.
#[inline]
pub fn round(x: f64) -> i64 {
    if !(abs(x) < TWO_POW_52) {
        // saturating cast, NaN to 0
        return x as i64;
    }
    let t = x as i64;
    let frac = x - t as f64;
    if frac >= 0.5 {
        t + 1
    } else if frac <= -0.5 {
        t - 1
    } else {
        t
    }
}

/// Nearest `i32`, ties away from zero.
///
/// NaN gives 0; values beyond the `i32` range saturate.
#[inline]
pub fn round_f32(x: f32) -> i32 {
    if !(libm::fabsf(x) < TWO_POW_23) {
        return x as i32;
    }
    let t = x as i32;
    let frac = x - t as f32;
    if frac >= 0.5 {
        t + 1
    } else if frac <= -0.5 {
        t - 1
    } else {
        t
    }
}

/// Nearest integer, ties to even, as an `f64`.
#[inline]
pub fn round_even(x: f64) -> f64 {
    if !(abs(x) < TWO_POW_52) {
        return x;
    }
    let t = x as i64;
    let frac = abs(x - t as f64);
    let away = frac > 0.5 || (frac == 0.5 && t & 1 != 0);
    let r = match (away, x < 0.0) {
        (false, _) => t,
        (true, true) => t - 1,
        (true, false) => t + 1,
    };
    copy_sign(r as f64, x)
}

/// Nearest integer, ties to even, as an `f32`.
#[inline]
pub fn round_even_f32(x: f32) -> f32 {
    if !(libm::fabsf(x) < TWO_POW_23) {
        return x;
    }
    let t = x as i32;
    let frac = libm::fabsf(x - t as f32);
    let away = frac > 0.5 || (frac == 0.5 && t & 1 != 0);
    let r = match (away, x < 0.0) {
        (false, _) => t,
        (true, true) => t - 1,
        (true, false) => t + 1,
    };
    libm::copysignf(r as f32, x)
}

/// IEEE 754 remainder: `x - n·y` with `n` the integer nearest `x/y`, ties
/// to even.
///
/// The result lies in `[-|y|/2, |y|/2]` and is exact. NaN when `x` is
/// infinite or `y` is zero; `x` when `y` is infinite and `x` finite.
pub fn ieee_remainder(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() || x.is_infinite() || y == 0.0 {
        return f64::NAN;
    }
    if y.is_infinite() {
        return x;
    }
    let p = abs(y);
    // bring |x| into [0, 2p) without changing the parity of the quotient
    let mut r = if p <= f64::MAX * 0.5 {
        abs(libm::fmod(x, p + p))
    } else {
        abs(x)
    };
    if p < 2.0 * f64::MIN_POSITIVE {
        if r + r > p {
            r -= p;
            if r + r >= p {
                r -= p;
            }
        }
    } else {
        let p_half = 0.5 * p;
        if r > p_half {
            r -= p;
            if r >= p_half {
                r -= p;
            }
        }
    }
    if x < 0.0 || (x == 0.0 && x.is_sign_negative()) {
        -r
    } else {
        r
    }
}
