//! Static lookup tables built by `const` evaluation
//!
//! Every table is a `static` [`SampleTable`] whose samples are computed by the
//! compiler with the `const fn` series below: the table exists in full before
//! any caller runs and is never written again.
//!
//! | Table | Nodes | Samples |
//! |-------|-------|---------|
//! | `SIN_TABLE`, `COS_TABLE` | `i/512`, `i ∈ [0, 512)` | `sin`, `cos` |
//! | `EXP_TABLE`, `EXPM1_TABLE` | `j/256`, `j ∈ [-90, 90]` | `exp`, `exp - 1` |
//! | `LOG_TABLE`, `INV_TABLE` | `i/256`, `i ∈ [0, 256)` | `ln(1 + t)`, `1/(1 + t)` |
//! | `ATAN_TABLE` | `i/64`, `i ∈ [0, 64]` | `atan` |
//! | `CBRT_TABLE` | `1 + i/64`, `i ∈ [0, 64]` | `cbrt` |
//!
//! The series are evaluated far past double precision (Horner form, innermost
//! term first), so each sample is within an ulp or two of the true value.

use crate::table::SampleTable;

/// Samples per radian of the sin/cos tables.
pub const SIN_COS_TABLE_LEN: usize = 512;

/// Number of exp/expm1 samples (`j/256` for `j ∈ [-90, 90]`).
pub const EXP_TABLE_LEN: usize = 181;

/// Offset of `j = 0` in the exp tables.
pub const EXP_TABLE_OFFSET: usize = 90;

/// Number of log samples, one per value of the top 8 mantissa bits.
pub const LOG_TABLE_LEN: usize = 256;

/// Number of atan samples (`i/64` for `i ∈ [0, 64]`).
pub const ATAN_TABLE_LEN: usize = 65;

/// Number of cbrt samples (`1 + i/64` for `i ∈ [0, 64]`).
pub const CBRT_TABLE_LEN: usize = 65;

pub(crate) const SIN_COS_SCALE: f64 = SIN_COS_TABLE_LEN as f64;
pub(crate) const EXP_SCALE: f64 = 256.0;
pub(crate) const LOG_SCALE: f64 = LOG_TABLE_LEN as f64;
pub(crate) const ATAN_SCALE: f64 = 64.0;

// ---------------------------------------------------------------------------
// const series
// ---------------------------------------------------------------------------

const fn series_sin(x: f64) -> f64 {
    let x2 = x * x;
    let mut acc = 1.0;
    let mut n = 14;
    while n >= 1 {
        acc = 1.0 - x2 / ((2 * n) as f64 * (2 * n + 1) as f64) * acc;
        n -= 1;
    }
    x * acc
}

const fn series_cos(x: f64) -> f64 {
    let x2 = x * x;
    let mut acc = 1.0;
    let mut n = 14;
    while n >= 1 {
        acc = 1.0 - x2 / ((2 * n - 1) as f64 * (2 * n) as f64) * acc;
        n -= 1;
    }
    acc
}

const fn series_expm1(x: f64) -> f64 {
    let mut acc = 1.0;
    let mut n = 24;
    while n >= 2 {
        acc = 1.0 + x / n as f64 * acc;
        n -= 1;
    }
    x * acc
}

/// `ln(1 + t)` for `t ∈ [0, 1)` via `2·atanh(t / (2 + t))`.
const fn series_ln1p(t: f64) -> f64 {
    let s = t / (2.0 + t);
    let s2 = s * s;
    let mut k = 40;
    let mut acc = 1.0 / (2 * k + 1) as f64;
    while k > 0 {
        k -= 1;
        acc = 1.0 / (2 * k + 1) as f64 + s2 * acc;
    }
    2.0 * s * acc
}

/// `atan(x)` for `x ∈ [0, 1]` via Euler's series in `x² / (1 + x²)`.
const fn series_atan(x: f64) -> f64 {
    let d = 1.0 + x * x;
    let y = x * x / d;
    let mut acc = 1.0;
    let mut n = 64;
    while n >= 1 {
        acc = 1.0 + (2 * n) as f64 / (2 * n + 1) as f64 * y * acc;
        n -= 1;
    }
    x / d * acc
}

/// `cbrt(v)` for `v ∈ [1, 2]` by Newton iteration from 1.
const fn newton_cbrt(v: f64) -> f64 {
    let mut t = 1.0;
    let mut i = 0;
    while i < 10 {
        t -= (t * t * t - v) / (3.0 * t * t);
        i += 1;
    }
    t
}

// ---------------------------------------------------------------------------
// builders
// ---------------------------------------------------------------------------

const fn build_sin() -> [f64; SIN_COS_TABLE_LEN] {
    let mut values = [0.0; SIN_COS_TABLE_LEN];
    let mut i = 0;
    while i < SIN_COS_TABLE_LEN {
        values[i] = series_sin(i as f64 / SIN_COS_SCALE);
        i += 1;
    }
    values
}

const fn build_cos() -> [f64; SIN_COS_TABLE_LEN] {
    let mut values = [0.0; SIN_COS_TABLE_LEN];
    let mut i = 0;
    while i < SIN_COS_TABLE_LEN {
        values[i] = series_cos(i as f64 / SIN_COS_SCALE);
        i += 1;
    }
    values
}

const fn build_expm1() -> [f64; EXP_TABLE_LEN] {
    let mut values = [0.0; EXP_TABLE_LEN];
    let mut i = 0;
    while i < EXP_TABLE_LEN {
        let j = i as i32 - EXP_TABLE_OFFSET as i32;
        values[i] = series_expm1(j as f64 / EXP_SCALE);
        i += 1;
    }
    values
}

const fn build_exp() -> [f64; EXP_TABLE_LEN] {
    let mut values = build_expm1();
    let mut i = 0;
    while i < EXP_TABLE_LEN {
        values[i] += 1.0;
        i += 1;
    }
    values
}

const fn build_log() -> [f64; LOG_TABLE_LEN] {
    let mut values = [0.0; LOG_TABLE_LEN];
    let mut i = 0;
    while i < LOG_TABLE_LEN {
        values[i] = series_ln1p(i as f64 / LOG_SCALE);
        i += 1;
    }
    values
}

const fn build_inv() -> [f64; LOG_TABLE_LEN] {
    let mut values = [0.0; LOG_TABLE_LEN];
    let mut i = 0;
    while i < LOG_TABLE_LEN {
        values[i] = 1.0 / (1.0 + i as f64 / LOG_SCALE);
        i += 1;
    }
    values
}

const fn build_atan() -> [f64; ATAN_TABLE_LEN] {
    let mut values = [0.0; ATAN_TABLE_LEN];
    let mut i = 0;
    while i < ATAN_TABLE_LEN {
        values[i] = series_atan(i as f64 / ATAN_SCALE);
        i += 1;
    }
    values
}

const fn build_cbrt() -> [f64; CBRT_TABLE_LEN] {
    let mut values = [0.0; CBRT_TABLE_LEN];
    let mut i = 0;
    while i < CBRT_TABLE_LEN {
        values[i] = newton_cbrt(1.0 + i as f64 / 64.0);
        i += 1;
    }
    values
}

// ---------------------------------------------------------------------------
// tables
// ---------------------------------------------------------------------------

/// `sin(i/512)`.
pub static SIN_TABLE: SampleTable<SIN_COS_TABLE_LEN> =
    SampleTable::new(0.0, 1.0 / SIN_COS_SCALE, build_sin());

/// `cos(i/512)`.
pub static COS_TABLE: SampleTable<SIN_COS_TABLE_LEN> =
    SampleTable::new(0.0, 1.0 / SIN_COS_SCALE, build_cos());

/// `exp(j/256)`, index `j + 90`.
pub static EXP_TABLE: SampleTable<EXP_TABLE_LEN> =
    SampleTable::new(-(EXP_TABLE_OFFSET as f64) / EXP_SCALE, 1.0 / EXP_SCALE, build_exp());

/// `exp(j/256) - 1`, index `j + 90`.
pub static EXPM1_TABLE: SampleTable<EXP_TABLE_LEN> =
    SampleTable::new(-(EXP_TABLE_OFFSET as f64) / EXP_SCALE, 1.0 / EXP_SCALE, build_expm1());

/// `ln(1 + i/256)`.
pub static LOG_TABLE: SampleTable<LOG_TABLE_LEN> =
    SampleTable::new(0.0, 1.0 / LOG_SCALE, build_log());

/// `1 / (1 + i/256)`.
pub static INV_TABLE: SampleTable<LOG_TABLE_LEN> =
    SampleTable::new(0.0, 1.0 / LOG_SCALE, build_inv());

/// `atan(i/64)`.
pub static ATAN_TABLE: SampleTable<ATAN_TABLE_LEN> =
    SampleTable::new(0.0, 1.0 / ATAN_SCALE, build_atan());

/// `cbrt(1 + i/64)`.
pub static CBRT_TABLE: SampleTable<CBRT_TABLE_LEN> =
    SampleTable::new(1.0, 1.0 / 64.0, build_cbrt());
