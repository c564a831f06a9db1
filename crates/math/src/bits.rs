//! IEEE 754 bit-level primitives
//!
//! Field extraction, reconstruction, and exact power-of-two scaling for `f64`
//! (and `f32` for the rounding helpers). All functions are total over every
//! bit pattern; NaN payloads pass through untouched.
//!
//! # Layout
//!
//! ```text
//! f64: sign(1) | exponent(11) | mantissa(52)
//! f32: sign(1) | exponent(8)  | mantissa(23)
//! ```
//!
//! # Example
//!
//! ```rust
//! use altair_math::bits::{decompose, two_pow, scale_pow2};
//!
//! let parts = decompose(-6.0);
//! assert!(parts.negative);
//! assert_eq!(parts.biased_exponent, 1023 + 2);
//!
//! assert_eq!(two_pow(-1074), f64::from_bits(1));
//! assert_eq!(scale_pow2(3.0, 4), 48.0);
//! ```

/// Exponent bias of `f64`.
pub const EXPONENT_BIAS: i32 = 1023;

/// Number of explicit mantissa bits of `f64`.
pub const MANTISSA_BITS: u32 = 52;

/// Mask of the explicit mantissa bits of `f64`.
pub const MANTISSA_MASK: u64 = (1u64 << MANTISSA_BITS) - 1;

/// Mask of the exponent field of `f64` (in place).
pub const EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;

/// Mask of the sign bit of `f64`.
pub const SIGN_MASK: u64 = 0x8000_0000_0000_0000;

/// Smallest `k` for which `2^k` is representable (smallest subnormal).
pub const MIN_TWO_POW_EXPONENT: i32 = -1074;

/// Largest `k` for which `2^k` is finite.
pub const MAX_TWO_POW_EXPONENT: i32 = 1023;

/// Sign, biased exponent and mantissa fields of an `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatParts {
    /// Sign bit set.
    pub negative: bool,
    /// Raw 11-bit exponent field (0 for zero/subnormal, 2047 for NaN/inf).
    pub biased_exponent: u32,
    /// Raw 52-bit mantissa field (without the implicit bit).
    pub mantissa: u64,
}

/// Sign, biased exponent and mantissa fields of an `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatParts32 {
    /// Sign bit set.
    pub negative: bool,
    /// Raw 8-bit exponent field.
    pub biased_exponent: u32,
    /// Raw 23-bit mantissa field.
    pub mantissa: u32,
}

/// Split an `f64` into its raw fields.
#[inline]
pub const fn decompose(x: f64) -> FloatParts {
    let bits = x.to_bits();
    FloatParts {
        negative: (bits & SIGN_MASK) != 0,
        biased_exponent: ((bits & EXPONENT_MASK) >> MANTISSA_BITS) as u32,
        mantissa: bits & MANTISSA_MASK,
    }
}

/// Rebuild an `f64` from raw fields. Out-of-width fields are masked.
#[inline]
pub const fn compose(parts: FloatParts) -> f64 {
    let sign = if parts.negative { SIGN_MASK } else { 0 };
    let exponent = ((parts.biased_exponent as u64) << MANTISSA_BITS) & EXPONENT_MASK;
    f64::from_bits(sign | exponent | (parts.mantissa & MANTISSA_MASK))
}

/// Split an `f32` into its raw fields.
#[inline]
pub const fn decompose_f32(x: f32) -> FloatParts32 {
    let bits = x.to_bits();
    FloatParts32 {
        negative: (bits >> 31) != 0,
        biased_exponent: (bits >> 23) & 0xFF,
        mantissa: bits & 0x007F_FFFF,
    }
}

/// Rebuild an `f32` from raw fields. Out-of-width fields are masked.
#[inline]
pub const fn compose_f32(parts: FloatParts32) -> f32 {
    let sign = if parts.negative { 1u32 << 31 } else { 0 };
    f32::from_bits(sign | ((parts.biased_exponent & 0xFF) << 23) | (parts.mantissa & 0x007F_FFFF))
}

/// `|x|` by clearing the sign bit.
#[inline(always)]
pub const fn abs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !SIGN_MASK)
}

/// Magnitude of `magnitude` with the sign bit of `sign`.
#[inline(always)]
pub const fn copy_sign(magnitude: f64, sign: f64) -> f64 {
    f64::from_bits((magnitude.to_bits() & !SIGN_MASK) | (sign.to_bits() & SIGN_MASK))
}

/// True if the sign bit is set (including `-0.0` and negative NaNs).
#[inline(always)]
pub const fn sign_bit(x: f64) -> bool {
    (x.to_bits() & SIGN_MASK) != 0
}

/// Exact `2^k`.
///
/// - `k` in `[-1074, 1023]`: exact (subnormal below `-1022`)
/// - `k < -1074`: `0.0`
/// - `k > 1023`: `+∞`
///
/// Built directly from the exponent field, without any multiplication.
#[inline]
pub const fn two_pow(k: i32) -> f64 {
    if k > MAX_TWO_POW_EXPONENT {
        f64::INFINITY
    } else if k >= -1022 {
        f64::from_bits(((k + EXPONENT_BIAS) as u64) << MANTISSA_BITS)
    } else if k >= MIN_TWO_POW_EXPONENT {
        f64::from_bits(1u64 << (k - MIN_TWO_POW_EXPONENT))
    } else {
        0.0
    }
}

/// `x · 2^k` with a single rounding (scalbn semantics).
///
/// Overflows to `±∞` and underflows to `±0` with the sign of `x`; NaN, zero
/// and infinities are returned unchanged.
#[inline]
pub fn scale_pow2(x: f64, k: i32) -> f64 {
    let mut y = x;
    let mut n = k;
    if n > 1023 {
        y *= two_pow(1023);
        n -= 1023;
        if n > 1023 {
            y *= two_pow(1023);
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        // Scale by 2^-969 (= 2^-1022 * 2^53) so the final multiply is the only
        // one that can produce a subnormal, keeping a single rounding.
        y *= two_pow(-1022 + 53);
        n += 1022 - 53;
        if n < -1022 {
            y *= two_pow(-1022 + 53);
            n += 1022 - 53;
            if n < -1022 {
                n = -1022;
            }
        }
    }
    y * two_pow(n)
}

/// Unbiased binary exponent of `x`.
///
/// Returns `-1023` for zeros and subnormals and `1024` for NaN and infinities,
/// like the reference `getExponent`.
#[inline]
pub const fn exponent(x: f64) -> i32 {
    decompose(x).biased_exponent as i32 - EXPONENT_BIAS
}

/// Unbiased binary exponent of `x` (`-127` for zeros/subnormals, `128` for
/// NaN/infinities).
#[inline]
pub const fn exponent_f32(x: f32) -> i32 {
    decompose_f32(x).biased_exponent as i32 - 127
}

/// Round to the nearest integer, ties away from zero, for `|x| < 2^31`.
///
/// Internal helper for table indexing and quadrant counts; callers bound
/// the argument.
#[inline(always)]
pub(crate) fn nearest_i32(x: f64) -> i32 {
    (x + copy_sign(0.5, x)) as i32
}
