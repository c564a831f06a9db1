//! Exact and saturating arithmetic on fixed-width signed integers
//!
//! Two contracts are offered for every operation:
//!
//! - `*_exact`: returns the mathematical result, or
//!   [`ArithmeticError::Overflow`] when it does not fit the type.
//! - `*_no_modulo`: returns the mathematical result clamped to
//!   `[MIN, MAX]`. Never fails, never wraps.
//!
//! # Example
//!
//! ```rust
//! use altair_numbers::OverflowArith;
//!
//! assert_eq!(i32::MAX.add_no_modulo(1), i32::MAX);
//! assert!(i32::MAX.add_exact(1).is_err());
//! assert_eq!(7i64.mean_low(-2), 2);
//! ```

use crate::error::ArithmeticError;

/// Overflow-aware arithmetic for `i32` and `i64`.
pub trait OverflowArith: Sized + Copy {
    /// `self + rhs`, or an error if the sum overflows.
    fn add_exact(self, rhs: Self) -> Result<Self, ArithmeticError>;

    /// `self - rhs`, or an error if the difference overflows.
    fn sub_exact(self, rhs: Self) -> Result<Self, ArithmeticError>;

    /// `self * rhs`, or an error if the product overflows.
    fn mul_exact(self, rhs: Self) -> Result<Self, ArithmeticError>;

    /// `-self`, or an error for `MIN`.
    fn neg_exact(self) -> Result<Self, ArithmeticError>;

    /// `|self|`, or an error for `MIN`.
    fn abs_exact(self) -> Result<Self, ArithmeticError>;

    /// `self + rhs` clamped to the representable range.
    fn add_no_modulo(self, rhs: Self) -> Self;

    /// `self - rhs` clamped to the representable range.
    fn sub_no_modulo(self, rhs: Self) -> Self;

    /// `self * rhs` clamped to the representable range.
    fn mul_no_modulo(self, rhs: Self) -> Self;

    /// `floor((self + rhs) / 2)` computed without intermediate overflow.
    fn mean_low(self, rhs: Self) -> Self;

    /// `(self + rhs) / 2` rounded toward zero, without intermediate overflow.
    fn mean_sml(self, rhs: Self) -> Self;
}

macro_rules! impl_overflow_arith {
    ($($t:ty),*) => {
        $(
            impl OverflowArith for $t {
                #[inline]
                fn add_exact(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    self.checked_add(rhs).ok_or(ArithmeticError::overflow("add"))
                }

                #[inline]
                fn sub_exact(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    self.checked_sub(rhs).ok_or(ArithmeticError::overflow("sub"))
                }

                #[inline]
                fn mul_exact(self, rhs: Self) -> Result<Self, ArithmeticError> {
                    self.checked_mul(rhs).ok_or(ArithmeticError::overflow("mul"))
                }

                #[inline]
                fn neg_exact(self) -> Result<Self, ArithmeticError> {
                    self.checked_neg().ok_or(ArithmeticError::overflow("neg"))
                }

                #[inline]
                fn abs_exact(self) -> Result<Self, ArithmeticError> {
                    self.checked_abs().ok_or(ArithmeticError::overflow("abs"))
                }

                #[inline]
                fn add_no_modulo(self, rhs: Self) -> Self {
                    self.saturating_add(rhs)
                }

                #[inline]
                fn sub_no_modulo(self, rhs: Self) -> Self {
                    self.saturating_sub(rhs)
                }

                #[inline]
                fn mul_no_modulo(self, rhs: Self) -> Self {
                    self.saturating_mul(rhs)
                }

                #[inline]
                fn mean_low(self, rhs: Self) -> Self {
                    // Common bits plus half of the differing bits; the arithmetic
                    // shift floors for negative sums.
                    (self & rhs) + ((self ^ rhs) >> 1)
                }

                #[inline]
                fn mean_sml(self, rhs: Self) -> Self {
                    let low = self.mean_low(rhs);
                    if low < 0 && ((self ^ rhs) & 1) != 0 {
                        low + 1
                    } else {
                        low
                    }
                }
            }
        )*
    };
}

impl_overflow_arith!(i32, i64);

/// Narrow an `i64` to `i32`, failing if it does not fit.
#[inline]
pub fn to_i32_exact(value: i64) -> Result<i32, ArithmeticError> {
    i32::try_from(value).map_err(|_| ArithmeticError::overflow("to_i32"))
}

/// Narrow an `i64` to `i32`, clamping to `[i32::MIN, i32::MAX]`.
#[inline]
pub fn to_i32_no_modulo(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
