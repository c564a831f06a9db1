//! Table plus correction-polynomial evaluators
//!
//! Each kernel takes an already reduced argument, looks up the nearest table
//! node and corrects for the offset `d` from that node:
//!
//! | Kernel | Node spacing | Precise correction | Quick correction |
//! |--------|--------------|--------------------|------------------|
//! | sin/cos | 2^-9 | degree 7/6 Taylor in `d` | first order |
//! | exp | 2^-8 | degree 6 Taylor in `d` | first order |
//! | log | 2^-8 | degree 7 series in `z` | second order |
//! | atan | 2^-6 | degree 9 odd series | (none) |
//! | cbrt | 2^-6 | two Halley steps | (none) |
//!
//! Kernels never see special values; the façade filters NaN, infinities and
//! out-of-window arguments first.

use crate::bits::{nearest_i32, scale_pow2};
use crate::reduce::{
    reduce_ln2, reduce_ln2_quick, split_mantissa, LN2, LN2_HI, LN2_LO,
};
use crate::tables::{
    ATAN_SCALE, ATAN_TABLE, CBRT_TABLE, COS_TABLE, EXPM1_TABLE, EXP_SCALE, EXP_TABLE,
    EXP_TABLE_OFFSET, LOG_TABLE, SIN_COS_SCALE, SIN_TABLE,
};

/// Below this magnitude `log(1 + u)` uses the atanh series directly.
pub(crate) const LOG_NEAR_ONE: f64 = 0.031_25;

/// Below this magnitude `expm1` reads the expm1 table without reduction.
pub(crate) const EXPM1_TABLE_LIMIT: f64 = 0.34;

const TWO_POW_54: f64 = 18_014_398_509_481_984.0;

#[inline(always)]
fn sin_cos_node(hi: f64) -> (f64, f64, f64) {
    let j = nearest_i32(hi * SIN_COS_SCALE);
    let index = j.unsigned_abs() as usize;
    let sin_a = SIN_TABLE.get(index);
    let sin_a = if j < 0 { -sin_a } else { sin_a };
    (j as f64 / SIN_COS_SCALE, sin_a, COS_TABLE.get(index))
}

/// `(sin y, cos y)` for `y = hi + lo`, `|y| ≤ ~0.8`.
#[inline]
pub fn sin_cos_precise(hi: f64, lo: f64) -> (f64, f64) {
    let (a, sin_a, cos_a) = sin_cos_node(hi);
    let d = (hi - a) + lo;
    let d2 = d * d;
    let sin_d = d + d * d2 * (-1.0 / 6.0 + d2 * (1.0 / 120.0 - d2 * (1.0 / 5040.0)));
    let cos_d_minus_1 = d2 * (-0.5 + d2 * (1.0 / 24.0 - d2 * (1.0 / 720.0)));
    (
        sin_a + (sin_a * cos_d_minus_1 + cos_a * sin_d),
        cos_a + (cos_a * cos_d_minus_1 - sin_a * sin_d),
    )
}

/// First-order `(sin y, cos y)`; error below `d²/2 ≤ 2^-21`.
#[inline]
pub fn sin_cos_quick(hi: f64) -> (f64, f64) {
    let (a, sin_a, cos_a) = sin_cos_node(hi);
    let d = hi - a;
    (sin_a + cos_a * d, cos_a - sin_a * d)
}

/// `e^d - 1` for `|d| ≤ 2^-9`.
#[inline(always)]
fn expm1_poly(d: f64) -> f64 {
    d * (1.0
        + d * (0.5
            + d * (1.0 / 6.0 + d * (1.0 / 24.0 + d * (1.0 / 120.0 + d * (1.0 / 720.0))))))
}

#[inline(always)]
fn exp_node(r: f64) -> (usize, f64) {
    let j = nearest_i32(r * EXP_SCALE);
    ((j + EXP_TABLE_OFFSET as i32) as usize, j as f64 / EXP_SCALE)
}

/// `e^x` for finite `x` whose result neither overflows nor flushes to zero.
#[inline]
pub fn exp_precise(x: f64) -> f64 {
    let r = reduce_ln2(x);
    let (index, a) = exp_node(r.hi);
    let d = (r.hi - a) + r.lo;
    let e = EXP_TABLE.get(index);
    scale_pow2(e + e * expm1_poly(d), r.k)
}

/// First-order `e^x`; relative error below `2^-18`.
#[inline]
pub fn exp_quick(x: f64) -> f64 {
    let r = reduce_ln2_quick(x);
    let (index, a) = exp_node(r.hi);
    let e = EXP_TABLE.get(index);
    scale_pow2(e + e * (r.hi - a), r.k)
}

/// `e^x - 1` for `|x| ≤ EXPM1_TABLE_LIMIT`, accurate relative to the result
/// down to the smallest `x`.
#[inline]
pub fn expm1_small(x: f64) -> f64 {
    let (index, a) = exp_node(x);
    let d = x - a;
    EXPM1_TABLE.get(index) + EXP_TABLE.get(index) * expm1_poly(d)
}

/// `ln(1 + u)` for `|u| < LOG_NEAR_ONE`, via `2·atanh(u / (2 + u))`.
#[inline]
pub fn log1p_small(u: f64) -> f64 {
    let s = u / (2.0 + u);
    let s2 = s * s;
    let series = s2
        * (1.0 / 3.0
            + s2 * (1.0 / 5.0 + s2 * (1.0 / 7.0 + s2 * (1.0 / 9.0 + s2 * (1.0 / 11.0)))));
    2.0 * (s + s * series)
}

#[inline(always)]
fn normalize_subnormal(x: f64) -> (f64, i32) {
    if x < f64::MIN_POSITIVE {
        (x * TWO_POW_54, -54)
    } else {
        (x, 0)
    }
}

/// `ln x` for positive finite `x`.
#[inline]
pub fn log_precise(x: f64) -> f64 {
    let u = x - 1.0;
    if crate::bits::abs(u) < LOG_NEAR_ONE {
        return log1p_small(u);
    }
    let (x, bias) = normalize_subnormal(x);
    let s = split_mantissa(x);
    let e = (s.exponent + bias) as f64;
    let z = s.offset;
    let poly = z
        * (1.0
            + z * (-0.5
                + z * (1.0 / 3.0
                    + z * (-0.25 + z * (0.2 + z * (-1.0 / 6.0 + z * (1.0 / 7.0)))))));
    (e * LN2_HI + LOG_TABLE.get(s.index)) + (poly + e * LN2_LO)
}

/// Second-order `ln x` for positive finite `x`; absolute error below `2^-25`.
#[inline]
pub fn log_quick(x: f64) -> f64 {
    let (x, bias) = normalize_subnormal(x);
    let s = split_mantissa(x);
    let e = (s.exponent + bias) as f64;
    let z = s.offset;
    e * LN2 + LOG_TABLE.get(s.index) + z * (1.0 - 0.5 * z)
}

/// `atan t` for `t ∈ [0, 1]`.
#[inline]
pub fn atan_unit(t: f64) -> f64 {
    let i = nearest_i32(t * ATAN_SCALE) as usize;
    let c = i as f64 / ATAN_SCALE;
    let v = (t - c) / (1.0 + t * c);
    let v2 = v * v;
    let series =
        v2 * (-1.0 / 3.0 + v2 * (0.2 + v2 * (-1.0 / 7.0 + v2 * (1.0 / 9.0))));
    ATAN_TABLE.get(i) + (v + v * series)
}

/// `cbrt(2^r)` for `r ∈ {0, 1, 2}`.
const CBRT_POW2: [f64; 3] = [1.0, 1.259_921_049_894_873_2, 1.587_401_052_149_702_2];

/// `cbrt(m · 2^r)` for `m ∈ [1, 2)` and `r ∈ {0, 1, 2}`.
#[inline]
pub fn cbrt_scaled(m: f64, r: usize) -> f64 {
    let r = r.min(2);
    let v = m * crate::bits::two_pow(r as i32);
    let mut t = CBRT_TABLE.lookup_linear(m) * CBRT_POW2[r];
    let mut step = 0;
    while step < 2 {
        let t3 = t * t * t;
        t *= (t3 + 2.0 * v) / (2.0 * t3 + v);
        step += 1;
    }
    t
}
