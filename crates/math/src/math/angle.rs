//! Angle normalization
//!
//! Each normalizer returns its argument unchanged, bit for bit, when it is
//! already inside the target interval, so applying one twice is the same as
//! applying it once. Non-finite angles give NaN.
//!
//! | Function | Interval | Period |
//! |----------|----------|--------|
//! | [`normalize_minus_pi_pi`] | `[-π, π]` | 2π |
//! | [`normalize_zero_two_pi`] | `[0, 2π)` | 2π |
//! | [`normalize_minus_half_pi_half_pi`] | `[-π/2, π/2]` | π |
//!
//! The `_quick` variants use a two-part constant for the period and are
//! accurate to a few ulps of `|x|` up to `QUICK_ANGLE_MAX`; beyond it they
//! reduce like the precise ones.

use crate::reduce::{PIO2_HI, PI_HI, TWO_PI_HI, TWO_PI_LO};
use crate::tier::{Precise, Quick, Tier};

#[inline(always)]
fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// `x` modulo 2π into `[-π, π]`, on tier `T`.
#[inline]
pub fn normalize_minus_pi_pi_with<T: Tier>(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if (-PI_HI..=PI_HI).contains(&x) {
        return x;
    }
    clamp(T::reduce_two_pi(x), -PI_HI, PI_HI)
}

/// `x` modulo 2π into `[0, 2π)`, on tier `T`.
#[inline]
pub fn normalize_zero_two_pi_with<T: Tier>(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if (0.0..TWO_PI_HI).contains(&x) {
        return x;
    }
    let y = T::reduce_two_pi(x);
    let y = if y < 0.0 { (y + TWO_PI_HI) + TWO_PI_LO } else { y };
    if y >= TWO_PI_HI {
        // a residue within an ulp below a full turn
        0.0
    } else {
        clamp(y, 0.0, TWO_PI_HI)
    }
}

/// `x` modulo π into `[-π/2, π/2]`, on tier `T`.
#[inline]
pub fn normalize_minus_half_pi_half_pi_with<T: Tier>(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    if (-PIO2_HI..=PIO2_HI).contains(&x) {
        return x;
    }
    clamp(T::reduce_pi(x), -PIO2_HI, PIO2_HI)
}

/// Angle in `[-π, π]`.
///
/// The reduction is exact up to the final rounding, so the result is
/// congruent to `x` modulo 2π within an ulp, for any finite `x`. Inputs
/// already in `[-π, π]` come back bit for bit. NaN and `±∞` give NaN.
///
/// ```rust
/// use altair_math::normalize_minus_pi_pi;
///
/// let tau = 2.0 * core::f64::consts::PI;
/// assert!((normalize_minus_pi_pi(7.0) - (7.0 - tau)).abs() < 1e-15);
/// assert_eq!(normalize_minus_pi_pi(-2.5), -2.5);
/// ```
#[inline]
pub fn normalize_minus_pi_pi(x: f64) -> f64 {
    normalize_minus_pi_pi_with::<Precise>(x)
}

/// Quick [`normalize_minus_pi_pi`], within 3e-3 for `|x| ≤ QUICK_ANGLE_MAX`.
#[inline]
pub fn normalize_minus_pi_pi_quick(x: f64) -> f64 {
    normalize_minus_pi_pi_with::<Quick>(x)
}

/// Angle in `[0, 2π)`.
#[inline]
pub fn normalize_zero_two_pi(x: f64) -> f64 {
    normalize_zero_two_pi_with::<Precise>(x)
}

/// Quick [`normalize_zero_two_pi`].
#[inline]
pub fn normalize_zero_two_pi_quick(x: f64) -> f64 {
    normalize_zero_two_pi_with::<Quick>(x)
}

/// Angle in `[-π/2, π/2]`, modulo π.
#[inline]
pub fn normalize_minus_half_pi_half_pi(x: f64) -> f64 {
    normalize_minus_half_pi_half_pi_with::<Precise>(x)
}

/// Quick [`normalize_minus_half_pi_half_pi`].
#[inline]
pub fn normalize_minus_half_pi_half_pi_quick(x: f64) -> f64 {
    normalize_minus_half_pi_half_pi_with::<Quick>(x)
}

/// True if `angle` lies on the arc that starts at `start` and sweeps `span`
/// radians toward increasing angles (clockwise in screen coordinates).
///
/// Angles are compared modulo 2π. A negative span or any non-finite input
/// gives `false`; a span of 2π or more covers every angle.
pub fn is_in_clockwise_domain(start: f64, span: f64, angle: f64) -> bool {
    if !(start.is_finite() && angle.is_finite()) || span.is_nan() || span < 0.0 {
        return false;
    }
    if span >= TWO_PI_HI {
        return true;
    }
    let mut delta = normalize_zero_two_pi(angle) - normalize_zero_two_pi(start);
    if delta < 0.0 {
        delta += TWO_PI_HI;
    }
    delta <= span
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identity_inside_interval() {
        for &x in &[-PI, -1.0, -0.0, 0.0, 2.5, PI] {
            assert_eq!(normalize_minus_pi_pi(x).to_bits(), x.to_bits());
            assert_eq!(normalize_minus_pi_pi_quick(x).to_bits(), x.to_bits());
        }
        for &x in &[0.0, 1.0, 6.28] {
            assert_eq!(normalize_zero_two_pi(x).to_bits(), x.to_bits());
        }
        for &x in &[-FRAC_PI_2, 0.3, FRAC_PI_2] {
            assert_eq!(normalize_minus_half_pi_half_pi(x).to_bits(), x.to_bits());
        }
    }

    #[test]
    fn test_reduces_out_of_range() {
        assert!((normalize_minus_pi_pi(3.0 * PI / 2.0) + FRAC_PI_2).abs() < 1e-15);
        assert!((normalize_minus_pi_pi(-7.0) - (-7.0 + 2.0 * PI)).abs() < 1e-15);
        assert!((normalize_zero_two_pi(-1.0) - (2.0 * PI - 1.0)).abs() < 1e-15);
        assert!((normalize_zero_two_pi(7.0) - (7.0 - 2.0 * PI)).abs() < 1e-15);
        assert!((normalize_minus_half_pi_half_pi(2.0) - (2.0 - PI)).abs() < 1e-15);
        assert!((normalize_minus_half_pi_half_pi_quick(-2.0) - (PI - 2.0)).abs() < 1e-15);
        let big = normalize_minus_pi_pi(1e22);
        assert!((big - libm::atan2(libm::sin(1e22), libm::cos(1e22))).abs() < 1e-12);
    }

    #[test]
    fn test_zero_two_pi_is_half_open() {
        assert_eq!(normalize_zero_two_pi(TWO_PI_HI), 0.0);
        assert_eq!(normalize_zero_two_pi(-1e-300), 0.0);
        assert!(normalize_zero_two_pi(-1e-10) < TWO_PI_HI);
    }

    #[test]
    fn test_non_finite_gives_nan() {
        assert!(normalize_minus_pi_pi(f64::NAN).is_nan());
        assert!(normalize_zero_two_pi(f64::INFINITY).is_nan());
        assert!(normalize_minus_half_pi_half_pi_quick(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_clockwise_domain() {
        assert!(is_in_clockwise_domain(0.0, 1.0, 0.5));
        assert!(!is_in_clockwise_domain(0.0, 1.0, 1.5));
        assert!(is_in_clockwise_domain(6.0, 1.0, 0.2));
        assert!(is_in_clockwise_domain(-0.5, 1.0, 0.25));
        assert!(is_in_clockwise_domain(1.0, 0.0, 1.0));
        assert!(is_in_clockwise_domain(3.0, 7.0, -100.0));
        assert!(!is_in_clockwise_domain(0.0, -1.0, 0.0));
        assert!(!is_in_clockwise_domain(f64::NAN, 1.0, 0.0));
        assert!(!is_in_clockwise_domain(0.0, f64::NAN, 0.0));
    }
}
