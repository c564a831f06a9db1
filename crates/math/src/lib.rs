#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! altair-math: table-driven scalar transcendental functions
//!
//! Drop-in replacements for the `f64` math routines, built on static lookup
//! tables, exact range reduction and short correction polynomials. Every
//! function family with two entry points picks its accuracy tier at the call
//! site:
//!
//! - **precise** (`sin`, `exp`, `pow`, ...): within 1e-10 of the reference
//!   over the whole finite domain (absolute, or relative when the result is
//!   at least 1); ~1e-15 in practice
//! - **quick** (`sin_quick`, `exp_quick`, `pow_quick`, ...): within 3e-3
//!   inside the window of its `QUICK_*_MAX` constant
//!
//! Special values follow IEEE 754 and C99: NaN in gives NaN out, domain
//! violations give NaN, overflow gives `±∞`, signed zeros survive odd
//! functions. Nothing panics and nothing allocates.
//!
//! # Quick Start
//!
//! ```rust
//! use altair_math::{cos, pow, sin_and_cos, sin_quick, two_pow};
//!
//! let (s, c) = sin_and_cos(0.5);
//! assert!((s * s + c * c - 1.0).abs() < 1e-15);
//! assert!((sin_quick(0.5) - s).abs() < 1e-6);
//! assert_eq!(pow(2.0, -3.0), two_pow(-3));
//! assert!(cos(f64::NAN).is_nan());
//! ```

// Bit-level float access
pub mod bits;

// IEEE special-value classes
pub mod special;

// Lookup tables
pub mod table;
pub mod tables;

// Range reduction
pub mod reduce;

// Table + polynomial kernels
pub mod eval;

// Accuracy tiers
pub mod tier;

// Function façade
pub mod math;

pub use bits::{compose, decompose, exponent, scale_pow2, two_pow, FloatParts};
pub use math::*;
pub use special::{classify, FloatClass};
pub use table::SampleTable;
pub use tables::{
    ATAN_TABLE_LEN, CBRT_TABLE_LEN, EXP_TABLE_LEN, LOG_TABLE_LEN, SIN_COS_TABLE_LEN,
};
pub use tier::{Precise, Quick, Tier, QUICK_ANGLE_MAX, QUICK_EXP_MAX, QUICK_TRIG_MAX};
