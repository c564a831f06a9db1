//! Power-of-two tests and arithmetic

use crate::error::ArithmeticError;

/// True if `a` is `2^k` for some `k >= 0`.
#[inline]
pub fn is_power_of_two(a: i64) -> bool {
    a > 0 && (a & (a - 1)) == 0
}

/// True if `a` is `2^k` or `-2^k` for some `k >= 0`.
///
/// `i64::MIN` (`-2^63`) qualifies.
#[inline]
pub fn is_signed_power_of_two(a: i64) -> bool {
    if a > 0 {
        (a & (a - 1)) == 0
    } else if a == i64::MIN {
        true
    } else {
        a < 0 && ((-a) & (-a - 1)) == 0
    }
}

/// Largest power of two `<= a`. Requires `a > 0`.
pub fn floor_power_of_two(a: i64) -> Result<i64, ArithmeticError> {
    if a <= 0 {
        return Err(ArithmeticError::invalid("floor power of two needs a > 0"));
    }
    Ok(1i64 << (63 - a.leading_zeros()))
}

/// Smallest power of two `>= a`. Requires `a >= 0`; `0` maps to `1`.
///
/// Fails with an overflow when the answer is `2^63`.
pub fn ceiling_power_of_two(a: i64) -> Result<i64, ArithmeticError> {
    if a < 0 {
        return Err(ArithmeticError::invalid("ceiling power of two needs a >= 0"));
    }
    if a <= 1 {
        return Ok(1);
    }
    let shift = 64 - (a - 1).leading_zeros();
    if shift > 62 {
        return Err(ArithmeticError::overflow("ceiling_power_of_two"));
    }
    Ok(1i64 << shift)
}

/// `value % spot` for a signed power of two `spot`, computed by masking.
///
/// The result has the sign of `value` (truncated division), as the `%`
/// operator does, and lies in `(-|spot|, |spot|)`.
pub fn rem_signed_power_of_two(value: i64, spot: i64) -> Result<i64, ArithmeticError> {
    if !is_signed_power_of_two(spot) {
        return Err(ArithmeticError::invalid("spot must be a signed power of two"));
    }
    if spot == i64::MIN {
        // |spot| exceeds every other magnitude.
        return Ok(if value == i64::MIN { 0 } else { value });
    }
    let magnitude = spot.abs();
    let residue = value & (magnitude - 1);
    Ok(if value < 0 && residue != 0 {
        residue - magnitude
    } else {
        residue
    })
}
