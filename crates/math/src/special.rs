//! Special-value classification
//!
//! [`classify`] sorts an `f64` into the IEEE 754 classes that decide its
//! special-value answer: NaN, either infinity, either zero, or finite
//! non-zero. It is a public helper for callers that branch on those cases;
//! the façade functions test the same classes inline with `is_nan` and
//! `is_infinite`. The integer predicates used by `pow` live here too.

use crate::bits::{abs, sign_bit};

/// IEEE 754 special-value class of an `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatClass {
    /// Any NaN, quiet or signaling, either sign.
    Nan,
    /// `+∞`
    PosInfinity,
    /// `-∞`
    NegInfinity,
    /// `+0.0`
    PosZero,
    /// `-0.0`
    NegZero,
    /// Finite and nonzero (normal or subnormal).
    Finite,
}

impl FloatClass {
    /// True for both infinities.
    #[inline]
    pub const fn is_infinite(self) -> bool {
        matches!(self, FloatClass::PosInfinity | FloatClass::NegInfinity)
    }

    /// True for both signed zeros.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, FloatClass::PosZero | FloatClass::NegZero)
    }
}

/// Classify `x`.
#[inline]
pub fn classify(x: f64) -> FloatClass {
    if x.is_nan() {
        FloatClass::Nan
    } else if x.is_infinite() {
        if sign_bit(x) {
            FloatClass::NegInfinity
        } else {
            FloatClass::PosInfinity
        }
    } else if abs(x) == 0.0 {
        if sign_bit(x) {
            FloatClass::NegZero
        } else {
            FloatClass::PosZero
        }
    } else {
        FloatClass::Finite
    }
}

/// True if `x` is a finite integer (including both zeros).
#[inline]
pub(crate) fn is_integer(x: f64) -> bool {
    x.is_finite() && libm::trunc(x) == x
}

/// True if `x` is an odd integer. Every `|x| >= 2^53` is even.
#[inline]
pub(crate) fn is_odd_integer(x: f64) -> bool {
    if !is_integer(x) || abs(x) >= 9_007_199_254_740_992.0 {
        return false;
    }
    (x as i64) & 1 != 0
}
