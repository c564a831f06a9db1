//! Circular functions and their inverses
//!
//! # Functions
//!
//! - `sin`, `cos`, `tan`, `sin_and_cos`: precise over every finite input
//! - `sin_quick`, `cos_quick`, `sin_and_cos_quick`: first-order kernels, short
//!   reduction for `|x| ≤ QUICK_TRIG_MAX`
//! - `asin`, `acos`, `atan`, `atan2`: precise
//! - `asin_in_range`, `acos_in_range`: clamp the argument into `[-1, 1]`
//!
//! # Special values
//!
//! - NaN and `±∞` give NaN (except `atan(±∞) = ±π/2`)
//! - odd functions keep the sign of zero
//! - `cos(π/2)` is the cosine of the double nearest π/2, `6.123233995736766e-17`
//!
//! # Example
//!
//! ```rust
//! use altair_math::{sin, cos, sin_and_cos, atan2};
//!
//! let (s, c) = sin_and_cos(1e22);
//! assert!((s - sin(1e22)).abs() < 1e-15 && (c - cos(1e22)).abs() < 1e-15);
//! assert_eq!(atan2(0.0, -1.0), core::f64::consts::PI);
//! ```

use crate::bits::{abs, copy_sign};
use crate::eval::atan_unit;
use crate::reduce::{PIO2_HI, PIO2_LO, PI_HI, PI_LO};
use crate::tier::{Precise, Quick, Tier};

/// Below this magnitude `sin x = x` and `cos x = 1` to the last bit.
const TINY: f64 = 7.450_580_596_923_828e-9;

#[inline(always)]
fn unfold_quadrant(quadrant: i32, s: f64, c: f64) -> (f64, f64) {
    match quadrant & 3 {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}

/// `(sin x, cos x)` from a single reduction, on tier `T`.
#[inline]
pub fn sin_and_cos_with<T: Tier>(x: f64) -> (f64, f64) {
    if !x.is_finite() {
        return (f64::NAN, f64::NAN);
    }
    if abs(x) < TINY {
        return (x, 1.0);
    }
    let r = T::reduce_half_pi(x);
    let (s, c) = T::sin_cos(&r);
    unfold_quadrant(r.quadrant, s, c)
}

/// Sine.
///
/// # Error Bounds
///
/// Within 1e-10 of the reference for every finite `x` (about one ulp in
/// practice). Arguments beyond `2^20·π/2` are reduced with Payne-Hanek, so
/// `sin(1e300)` is as accurate as `sin(1.0)`.
///
/// # Special Values
///
/// - `sin(NaN) = NaN`, `sin(±∞) = NaN`
/// - `sin(±0) = ±0`
///
/// # Example
///
/// ```rust
/// use altair_math::sin;
///
/// assert!((sin(core::f64::consts::FRAC_PI_6) - 0.5).abs() < 1e-15);
/// assert!(sin(-0.0).is_sign_negative());
/// assert!(sin(f64::INFINITY).is_nan());
/// ```
#[inline]
pub fn sin(x: f64) -> f64 {
    sin_and_cos_with::<Precise>(x).0
}

/// Cosine.
///
/// Same bound as [`sin`]. `cos(NaN)` and `cos(±∞)` are NaN; `cos(π/2)` is
/// `6.123233995736766e-17`, the cosine of the double nearest π/2.
#[inline]
pub fn cos(x: f64) -> f64 {
    sin_and_cos_with::<Precise>(x).1
}

/// Sine and cosine sharing one reduction; `s² + c²` is within 1e-15 of 1.
#[inline]
pub fn sin_and_cos(x: f64) -> (f64, f64) {
    sin_and_cos_with::<Precise>(x)
}

/// Quick sine.
///
/// # Error Bounds
///
/// At most 3e-3 for `|x| ≤ QUICK_TRIG_MAX`; the first-order table correction
/// keeps it near 5e-7 in practice. Larger arguments fall back to the precise
/// reduction and keep the same bound.
///
/// # Special Values
///
/// As [`sin`]: NaN and `±∞` give NaN, `±0` gives `±0`.
///
/// # Example
///
/// ```rust
/// use altair_math::{sin, sin_quick};
///
/// assert!((sin_quick(1.0) - sin(1.0)).abs() < 1e-6);
/// ```
#[inline]
pub fn sin_quick(x: f64) -> f64 {
    sin_and_cos_with::<Quick>(x).0
}

/// Quick cosine, same window and bound as [`sin_quick`].
#[inline]
pub fn cos_quick(x: f64) -> f64 {
    sin_and_cos_with::<Quick>(x).1
}

/// Quick sine and cosine from one reduction.
#[inline]
pub fn sin_and_cos_quick(x: f64) -> (f64, f64) {
    sin_and_cos_with::<Quick>(x)
}

/// Tangent.
///
/// Odd quadrants use `-cos/sin`, so the result stays finite near `π/2`.
#[inline]
pub fn tan(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if abs(x) < TINY {
        return x;
    }
    let r = Precise::reduce_half_pi(x);
    let (s, c) = Precise::sin_cos(&r);
    if r.quadrant & 1 == 0 {
        s / c
    } else {
        -c / s
    }
}

/// Arctangent, in `[-π/2, π/2]`.
#[inline]
pub fn atan(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let t = abs(x);
    if t < TINY {
        return x;
    }
    let a = if t <= 1.0 {
        atan_unit(t)
    } else {
        PIO2_HI - (atan_unit(1.0 / t) - PIO2_LO)
    };
    copy_sign(a, x)
}

/// Four-quadrant arctangent of `y/x`, in `[-π, π]`.
///
/// Follows the IEEE 754 table: `atan2(±0, +0) = ±0`, `atan2(±0, -0) = ±π`,
/// `atan2(±∞, +∞) = ±π/4`, `atan2(±∞, -∞) = ±3π/4`.
pub fn atan2(y: f64, x: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    let x_negative = crate::bits::sign_bit(x);
    let (ay, ax) = (abs(y), abs(x));

    let magnitude = if ay == 0.0 {
        if x_negative {
            PI_HI
        } else {
            0.0
        }
    } else if ax == 0.0 {
        PIO2_HI
    } else if ax.is_infinite() {
        match (ay.is_infinite(), x_negative) {
            (true, false) => 0.5 * PIO2_HI,
            (true, true) => 1.5 * PIO2_HI,
            (false, false) => 0.0,
            (false, true) => PI_HI,
        }
    } else if ay.is_infinite() {
        PIO2_HI
    } else if ay <= ax {
        let a = atan_unit(ay / ax);
        if x_negative {
            PI_HI - (a - PI_LO)
        } else {
            a
        }
    } else {
        let a = atan_unit(ax / ay);
        if x_negative {
            PIO2_HI + (a + PIO2_LO)
        } else {
            PIO2_HI - (a - PIO2_LO)
        }
    };
    copy_sign(magnitude, y)
}

/// Arcsine; NaN outside `[-1, 1]`.
#[inline]
pub fn asin(x: f64) -> f64 {
    if !(abs(x) <= 1.0) {
        return f64::NAN;
    }
    atan2(x, libm::sqrt((1.0 - x) * (1.0 + x)))
}

/// Arccosine, in `[0, π]`; NaN outside `[-1, 1]`.
#[inline]
pub fn acos(x: f64) -> f64 {
    if !(abs(x) <= 1.0) {
        return f64::NAN;
    }
    atan2(libm::sqrt((1.0 - x) * (1.0 + x)), x)
}

#[inline(always)]
fn clamp_unit(x: f64) -> f64 {
    if x > 1.0 {
        1.0
    } else if x < -1.0 {
        -1.0
    } else {
        x
    }
}

/// Arcsine of `x` clamped into `[-1, 1]` (NaN still gives NaN).
#[inline]
pub fn asin_in_range(x: f64) -> f64 {
    asin(clamp_unit(x))
}

/// Arccosine of `x` clamped into `[-1, 1]` (NaN still gives NaN).
#[inline]
pub fn acos_in_range(x: f64) -> f64 {
    acos(clamp_unit(x))
}
