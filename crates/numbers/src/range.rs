//! Range and bit-size predicates
//!
//! Signed bit sizes are in `[1, 64]`, unsigned bit sizes in `[1, 63]`
//! (unsigned values are carried in an `i64`, so the sign bit is unavailable).

use crate::error::ArithmeticError;

#[inline]
fn check_signed_bit_size(bit_size: u32) -> Result<(), ArithmeticError> {
    if (1..=64).contains(&bit_size) {
        Ok(())
    } else {
        Err(ArithmeticError::invalid("signed bit size must be in [1, 64]"))
    }
}

#[inline]
fn check_unsigned_bit_size(bit_size: u32) -> Result<(), ArithmeticError> {
    if (1..=63).contains(&bit_size) {
        Ok(())
    } else {
        Err(ArithmeticError::invalid("unsigned bit size must be in [1, 63]"))
    }
}

/// True if `min <= a <= max`.
#[inline]
pub fn is_in_range(min: i64, max: i64, a: i64) -> bool {
    min <= a && a <= max
}

/// Smallest value of a signed integer with `bit_size` bits.
pub fn min_signed_for_bit_size(bit_size: u32) -> Result<i64, ArithmeticError> {
    check_signed_bit_size(bit_size)?;
    Ok(i64::MIN >> (64 - bit_size))
}

/// Largest value of a signed integer with `bit_size` bits.
pub fn max_signed_for_bit_size(bit_size: u32) -> Result<i64, ArithmeticError> {
    check_signed_bit_size(bit_size)?;
    Ok(i64::MAX >> (64 - bit_size))
}

/// Largest value of an unsigned integer with `bit_size` bits.
pub fn max_unsigned_for_bit_size(bit_size: u32) -> Result<i64, ArithmeticError> {
    check_unsigned_bit_size(bit_size)?;
    Ok(i64::MAX >> (63 - bit_size))
}

/// True if `a` fits a signed integer of `bit_size` bits.
pub fn is_in_range_signed(a: i64, bit_size: u32) -> Result<bool, ArithmeticError> {
    check_signed_bit_size(bit_size)?;
    Ok(bit_size_for_signed(a) <= bit_size)
}

/// True if `a` fits an unsigned integer of `bit_size` bits.
pub fn is_in_range_unsigned(a: i64, bit_size: u32) -> Result<bool, ArithmeticError> {
    check_unsigned_bit_size(bit_size)?;
    Ok(a >= 0 && (a >> bit_size) == 0)
}

/// Minimum number of bits (sign bit included) needed to hold `a`.
///
/// `0` and `-1` need one bit; `i64::MIN` needs 64.
#[inline]
pub fn bit_size_for_signed(a: i64) -> u32 {
    let magnitude_bits = if a >= 0 { a } else { !a };
    65 - magnitude_bits.leading_zeros()
}

/// Minimum number of bits needed to hold the non-negative value `a`.
///
/// `0` needs one bit.
pub fn bit_size_for_unsigned(a: i64) -> Result<u32, ArithmeticError> {
    if a < 0 {
        return Err(ArithmeticError::invalid("unsigned value must be >= 0"));
    }
    Ok(if a == 0 { 1 } else { 64 - a.leading_zeros() })
}
