//! Argument reduction
//!
//! Maps an unbounded argument onto the small canonical interval the table and
//! polynomial evaluators are built for, plus an exact integer cycle count.
//!
//! - π/2 reduction for the circular functions:
//!   - `|x| ≤ π/4`: identity
//!   - `|x| < 2^20·π/2`: Cody-Waite with up to three 33-bit splits of π/2
//!   - larger: Payne-Hanek with 128-bit integer arithmetic over the bits of
//!     `1/(2π)`, exact up to `f64::MAX`
//! - ln2 reduction for exp: `x = k·ln2 + r`, `|r| ≤ ln2/2`
//! - mantissa split for log: `x = 2^e · c_i · (1 + z)`, `c_i = 1 + i/256`
//!
//! Reduced values are double-double pairs: `hi + lo` with `|lo| ≤ ulp(hi)/2`.

use crate::bits::{sign_bit, two_pow, MANTISSA_MASK};
use crate::tables::{INV_TABLE, LOG_SCALE};
use crate::tier::{QUICK_ANGLE_MAX, QUICK_TRIG_MAX};

/// `2/π` rounded to double.
pub(crate) const FRAC_2_PI: f64 = 6.366_197_723_675_814e-1;
/// `π/4` rounded to double.
pub(crate) const FRAC_PI_4: f64 = core::f64::consts::FRAC_PI_4;

/// `π/2` rounded to double, and the remainder.
pub(crate) const PIO2_HI: f64 = f64::from_bits(0x3FF9_21FB_5444_2D18);
pub(crate) const PIO2_LO: f64 = f64::from_bits(0x3C91_A626_3314_5C07);
/// `π` rounded to double, and the remainder.
pub(crate) const PI_HI: f64 = f64::from_bits(0x4009_21FB_5444_2D18);
pub(crate) const PI_LO: f64 = f64::from_bits(0x3CA1_A626_3314_5C07);
/// `2π` rounded to double, and the remainder.
pub(crate) const TWO_PI_HI: f64 = f64::from_bits(0x4019_21FB_5444_2D18);
pub(crate) const TWO_PI_LO: f64 = f64::from_bits(0x3CB1_A626_3314_5C07);

// π/2 in 33-bit pieces; `n·PIO2_k` is exact for |n| < 2^20.
const PIO2_1: f64 = f64::from_bits(0x3FF9_21FB_5440_0000);
const PIO2_1T: f64 = f64::from_bits(0x3DD0_B461_1A62_6331);
const PIO2_2: f64 = f64::from_bits(0x3DD0_B461_1A60_0000);
const PIO2_2T: f64 = f64::from_bits(0x3BA3_198A_2E03_7073);
const PIO2_3: f64 = f64::from_bits(0x3BA3_198A_2E00_0000);
const PIO2_3T: f64 = f64::from_bits(0x397B_839A_2520_49C1);

/// Above this the Cody-Waite cycle count no longer fits the exact-product
/// budget of the 33-bit splits.
const MEDIUM_LIMIT: f64 = 1_647_099.329_165_285_5;

/// `ln 2` split so that `k·LN2_HI` is exact for `|k| < 2^11`.
pub(crate) const LN2_HI: f64 = f64::from_bits(0x3FE6_2E42_FEE0_0000);
pub(crate) const LN2_LO: f64 = f64::from_bits(0x3DEA_39EF_3579_3C76);
pub(crate) const LN2: f64 = core::f64::consts::LN_2;
pub(crate) const LOG2_E: f64 = core::f64::consts::LOG2_E;

/// `π/4 · 2^128`, rounded down.
const PIO4_FIXED: u128 = 0xC90F_DAA2_2168_C234_C4C6_628B_80DC_1CD1;

/// Binary expansion of `1/(2π)`: word `i` holds fractional bits
/// `64·i + 1 ..= 64·i + 64`.
static INV_TWO_PI_BITS: [u64; 20] = [
    0x28BE_60DB_9391_054A,
    0x7F09_D5F4_7D4D_3770,
    0x36D8_A566_4F10_E410,
    0x7F94_58EA_F7AE_F158,
    0x6DC9_1B8E_9093_74B8,
    0x0192_4BBA_8274_6487,
    0x3F87_7AC7_2C4A_69CF,
    0xBA20_8D7D_4BAE_D121,
    0x3A67_1C09_AD17_DF90,
    0x4E64_758E_60D4_CE7D,
    0x2721_17E2_EF7E_4A0E,
    0xC7FE_25FF_F781_6603,
    0xFBCB_C462_D682_9B47,
    0xDB4D_9FB3_C9F2_C26D,
    0xD3D1_8FD9_A797_FA8B,
    0x5D49_EEB1_FAF9_7C5E,
    0xCF41_CE7D_E294_A4BA,
    0x9AFE_D7EC_47E3_5742,
    0x1580_CC11_BF1E_DAEA,
    0xFC33_EF08_26BD_0D87,
];

/// Canonical trig argument: `x ≡ quadrant·π/2 + (hi + lo)`.
///
/// `hi + lo` lies in `[-π/4, π/4]` (a hair wider on the quick path). For
/// Payne-Hanek reductions `quadrant` is the exact residue modulo 4; the
/// symmetry rules only consume `quadrant & 3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReducedArg {
    /// Cycle count of π/2 (or its residue modulo 4).
    pub quadrant: i32,
    /// Leading part of the reduced value.
    pub hi: f64,
    /// Trailing correction of the reduced value.
    pub lo: f64,
}

impl ReducedArg {
    #[inline(always)]
    const fn identity(x: f64) -> Self {
        Self {
            quadrant: 0,
            hi: x,
            lo: 0.0,
        }
    }
}

/// Reduced exponential argument: `x = k·ln2 + (hi + lo)`, `|hi + lo| ≤ ln2/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpReduced {
    /// Power of two to scale by.
    pub k: i32,
    /// Leading part of the remainder.
    pub hi: f64,
    /// Trailing correction of the remainder.
    pub lo: f64,
}

/// Logarithm split: `x = 2^exponent · (1 + index/256) · (1 + offset)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MantissaSplit {
    /// Unbiased binary exponent.
    pub exponent: i32,
    /// Top 8 mantissa bits.
    pub index: usize,
    /// Residual ratio, `0 ≤ offset < 2^-8`.
    pub offset: f64,
}

/// Reduce `x` modulo π/2 to full double-double accuracy.
///
/// Non-finite inputs give a NaN remainder; callers filter them first.
#[inline]
pub fn reduce_half_pi(x: f64) -> ReducedArg {
    let magnitude = crate::bits::abs(x);
    if magnitude <= FRAC_PI_4 {
        ReducedArg::identity(x)
    } else if magnitude < MEDIUM_LIMIT {
        reduce_medium(x)
    } else if magnitude.is_finite() {
        reduce_large(x)
    } else {
        ReducedArg {
            quadrant: 0,
            hi: f64::NAN,
            lo: f64::NAN,
        }
    }
}

/// Two-stage Cody-Waite reduction for `|x| ≤ QUICK_TRIG_MAX`.
///
/// Larger arguments fall back to [`reduce_half_pi`].
#[inline]
pub fn reduce_half_pi_quick(x: f64) -> ReducedArg {
    let magnitude = crate::bits::abs(x);
    if magnitude <= FRAC_PI_4 {
        return ReducedArg::identity(x);
    }
    if !(magnitude <= QUICK_TRIG_MAX) {
        return reduce_half_pi(x);
    }
    let n = crate::bits::nearest_i32(x * FRAC_2_PI);
    let fn_ = n as f64;
    let r = x - fn_ * PIO2_1;
    let w = fn_ * PIO2_1T;
    let hi = r - w;
    ReducedArg {
        quadrant: n,
        hi,
        lo: (r - hi) - w,
    }
}

#[inline(always)]
fn biased_exponent(x: f64) -> i32 {
    ((x.to_bits() >> 52) & 0x7FF) as i32
}

/// Cody-Waite: subtract `n·π/2` in 33-bit pieces, adding a piece whenever
/// cancellation ate more than the previous one could cover.
fn reduce_medium(x: f64) -> ReducedArg {
    let n = crate::bits::nearest_i32(x * FRAC_2_PI);
    let fn_ = n as f64;
    let ex = biased_exponent(x);

    let mut r = x - fn_ * PIO2_1;
    let mut w = fn_ * PIO2_1T;
    let mut y = r - w;
    if ex - biased_exponent(y) > 16 {
        let t = r;
        w = fn_ * PIO2_2;
        r = t - w;
        w = fn_ * PIO2_2T - ((t - r) - w);
        y = r - w;
        if ex - biased_exponent(y) > 49 {
            let t = r;
            w = fn_ * PIO2_3;
            r = t - w;
            w = fn_ * PIO2_3T - ((t - r) - w);
            y = r - w;
        }
    }
    ReducedArg {
        quadrant: n,
        hi: y,
        lo: (r - y) - w,
    }
}

#[inline(always)]
fn inv_two_pi_word(i: usize) -> u64 {
    if i < INV_TWO_PI_BITS.len() {
        INV_TWO_PI_BITS[i]
    } else {
        0
    }
}

/// 64 fractional bits of `1/(2π)` starting after bit `p`; bits before the
/// binary point are zero.
#[inline]
fn inv_two_pi_chunk(p: i32) -> u64 {
    if p <= -64 {
        0
    } else if p < 0 {
        INV_TWO_PI_BITS[0] >> (-p) as u32
    } else {
        let word = (p / 64) as usize;
        let shift = (p % 64) as u32;
        if shift == 0 {
            inv_two_pi_word(word)
        } else {
            (inv_two_pi_word(word) << shift) | (inv_two_pi_word(word + 1) >> (64 - shift))
        }
    }
}

/// High 128 bits of the 256-bit product `a·b`.
#[inline]
fn mul_high_u128(a: u128, b: u128) -> u128 {
    const LOW: u128 = u64::MAX as u128;
    let (a1, a0) = (a >> 64, a & LOW);
    let (b1, b0) = (b >> 64, b & LOW);
    let low_low = a0 * b0;
    let low_high = a0 * b1;
    let high_low = a1 * b0;
    let mid = (low_low >> 64) + (low_high & LOW) + (high_low & LOW);
    a1 * b1 + (low_high >> 64) + (high_low >> 64) + (mid >> 64)
}

/// Payne-Hanek for finite `|x| ≥ 2^20·π/2`.
///
/// With `x = m·2^e` (`m` the 53-bit integer significand), `x·(2/π) mod 4`
/// only depends on the 192 bits of `1/(2π)` starting at bit `e`: earlier bits
/// contribute multiples of 4 and later ones less than `2^-137`.
fn reduce_large(x: f64) -> ReducedArg {
    let bits = x.to_bits();
    let e = biased_exponent(x) - 1075;
    let m = ((bits & MANTISSA_MASK) | (1u64 << 52)) as u128;

    let w0 = inv_two_pi_chunk(e) as u128;
    let w1 = inv_two_pi_chunk(e + 64) as u128;
    let w2 = inv_two_pi_chunk(e + 128) as u128;

    // 192-bit product modulo 2^192; keep limbs 1 and 2.
    let a = m * w2;
    let b = m * w1;
    let c = m * w0;
    let t = (a >> 64) + (b as u64 as u128);
    let limb1 = t as u64;
    let limb2 = ((b >> 64) as u64)
        .wrapping_add(c as u64)
        .wrapping_add((t >> 64) as u64);
    let window = ((limb2 as u128) << 64) | limb1 as u128;

    // Top two bits: quadrant; the rest: fraction of π/2 in 2^-128 units.
    let mut quadrant = (window >> 126) as i32;
    let mut fraction = window << 2;
    let mut flip = false;
    if fraction >> 127 != 0 {
        quadrant += 1;
        fraction = fraction.wrapping_neg();
        flip = true;
    }

    // fraction·(π/2)/2^128 = fraction·PIO4_FIXED/2^255
    let product = mul_high_u128(fraction, PIO4_FIXED);
    let leading = product as f64;
    let residual = product as i128 - leading as u128 as i128;
    let scale = two_pow(-127);
    let mut hi = leading * scale;
    let mut lo = residual as f64 * scale;
    if flip {
        hi = -hi;
        lo = -lo;
    }

    quadrant &= 3;
    if sign_bit(x) {
        quadrant = (4 - quadrant) & 3;
        hi = -hi;
        lo = -lo;
    }
    ReducedArg { quadrant, hi, lo }
}

/// `x = k·ln2 + (hi + lo)` for `|x| < 2^10`.
#[inline]
pub fn reduce_ln2(x: f64) -> ExpReduced {
    let k = crate::bits::nearest_i32(x * LOG2_E);
    let kf = k as f64;
    ExpReduced {
        k,
        hi: x - kf * LN2_HI,
        lo: -(kf * LN2_LO),
    }
}

/// Single-double ln2 reduction for the quick tier.
#[inline]
pub fn reduce_ln2_quick(x: f64) -> ExpReduced {
    let k = crate::bits::nearest_i32(x * LOG2_E);
    ExpReduced {
        k,
        hi: x - k as f64 * LN2,
        lo: 0.0,
    }
}

/// Split a positive, finite, normal `x` for the log tables.
#[inline]
pub fn split_mantissa(x: f64) -> MantissaSplit {
    let bits = x.to_bits();
    let exponent = biased_exponent(x) - 1023;
    let index = ((bits & MANTISSA_MASK) >> 44) as usize;
    let m = f64::from_bits((bits & MANTISSA_MASK) | 0x3FF0_0000_0000_0000);
    let node = 1.0 + index as f64 / LOG_SCALE;
    MantissaSplit {
        exponent,
        index,
        offset: (m - node) * INV_TABLE.get(index),
    }
}

/// `x` modulo 2π, into `[-π, π]`. Finite input only.
pub fn reduce_two_pi(x: f64) -> f64 {
    let r = reduce_half_pi(x);
    let mut turns = r.quadrant & 3;
    if turns == 3 || (turns == 2 && r.hi > 0.0) {
        turns -= 4;
    }
    let t = turns as f64;
    (t * PIO2_HI + r.hi) + (t * PIO2_LO + r.lo)
}

/// `x` modulo π, into `[-π/2, π/2]`. Finite input only.
pub fn reduce_pi(x: f64) -> f64 {
    let r = reduce_half_pi(x);
    if r.quadrant & 1 == 0 {
        r.hi + r.lo
    } else if r.hi > 0.0 {
        (r.hi - PIO2_HI) + (r.lo - PIO2_LO)
    } else {
        (r.hi + PIO2_HI) + (r.lo + PIO2_LO)
    }
}

/// `x` modulo 2π into roughly `[-π, π]` with a two-part 2π, for
/// `|x| ≤ QUICK_ANGLE_MAX`. Larger arguments use [`reduce_two_pi`].
pub fn reduce_two_pi_quick(x: f64) -> f64 {
    if !(crate::bits::abs(x) <= QUICK_ANGLE_MAX) {
        return reduce_two_pi(x);
    }
    let k = crate::bits::nearest_i32(x * (0.25 * FRAC_2_PI));
    let kf = k as f64;
    (x - kf * (4.0 * PIO2_1)) - kf * (4.0 * PIO2_1T)
}

/// `x` modulo π into roughly `[-π/2, π/2]`, quick tier.
pub fn reduce_pi_quick(x: f64) -> f64 {
    if !(crate::bits::abs(x) <= QUICK_ANGLE_MAX) {
        return reduce_pi(x);
    }
    let k = crate::bits::nearest_i32(x * core::f64::consts::FRAC_1_PI);
    let kf = k as f64;
    (x - kf * (2.0 * PIO2_1)) - kf * (2.0 * PIO2_1T)
}
