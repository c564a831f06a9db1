#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! altair-numbers: overflow-aware integer helpers
//!
//! Pure, stateless predicates and arithmetic on fixed-width signed integers.
//! Every operation comes in two flavors where overflow is possible:
//!
//! - **exact** (`add_exact`, `to_i32_exact`, ...): returns
//!   `Err(ArithmeticError::Overflow)` instead of a wrong answer;
//! - **no-modulo** (`add_no_modulo`, `to_i32_no_modulo`, ...): saturates to the
//!   representable extreme and never fails.
//!
//! # Example
//!
//! ```rust
//! use altair_numbers::{is_power_of_two, mean_low_i64, OverflowArith};
//!
//! assert_eq!(i64::MAX.mul_no_modulo(3), i64::MAX);
//! assert!(i64::MAX.mul_exact(3).is_err());
//! assert!(is_power_of_two(1024));
//! assert_eq!(mean_low_i64(i64::MAX, i64::MAX - 2), i64::MAX - 1);
//! ```

pub mod error;
pub mod overflow;
pub mod pow2;
pub mod range;

pub use error::ArithmeticError;
pub use overflow::{to_i32_exact, to_i32_no_modulo, OverflowArith};
pub use pow2::{
    ceiling_power_of_two, floor_power_of_two, is_power_of_two, is_signed_power_of_two,
    rem_signed_power_of_two,
};
pub use range::{
    bit_size_for_signed, bit_size_for_unsigned, is_in_range, is_in_range_signed,
    is_in_range_unsigned, max_signed_for_bit_size, max_unsigned_for_bit_size,
    min_signed_for_bit_size,
};

/// Overflow-free `floor((a + b) / 2)` for `i64`.
#[inline]
pub fn mean_low_i64(a: i64, b: i64) -> i64 {
    a.mean_low(b)
}

/// Overflow-free `(a + b) / 2` rounded toward zero for `i64`.
#[inline]
pub fn mean_sml_i64(a: i64, b: i64) -> i64 {
    a.mean_sml(b)
}
