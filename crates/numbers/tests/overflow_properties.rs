//! Property-based tests for the exact vs. saturating contracts
//!
//! For every operand pair the exact (i128) result decides the expected
//! behavior: inside the target width both flavors return it, outside the
//! exact flavor errors and the no-modulo flavor returns MIN or MAX.

use altair_numbers::{
    mean_low_i64, mean_sml_i64, rem_signed_power_of_two, to_i32_exact, to_i32_no_modulo,
    ArithmeticError, OverflowArith,
};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 10_000,
        ..ProptestConfig::default()
    }
}

/// Values biased toward the type boundaries, where overflow happens.
fn edgy_i32() -> impl Strategy<Value = i32> {
    prop_oneof![
        any::<i32>(),
        (i32::MAX - 16..=i32::MAX),
        (i32::MIN..=i32::MIN + 16),
        (-16i32..=16),
    ]
}

fn edgy_i64() -> impl Strategy<Value = i64> {
    prop_oneof![
        any::<i64>(),
        (i64::MAX - 16..=i64::MAX),
        (i64::MIN..=i64::MIN + 16),
        (-16i64..=16),
    ]
}

fn check_i32(
    exact: Result<i32, ArithmeticError>,
    no_modulo: i32,
    wide: i128,
    context: &str,
) {
    if wide > i32::MAX as i128 {
        assert!(exact.is_err(), "{}: exact should overflow", context);
        assert_eq!(no_modulo, i32::MAX, "{}: should saturate to MAX", context);
    } else if wide < i32::MIN as i128 {
        assert!(exact.is_err(), "{}: exact should overflow", context);
        assert_eq!(no_modulo, i32::MIN, "{}: should saturate to MIN", context);
    } else {
        assert_eq!(exact, Ok(wide as i32), "{}", context);
        assert_eq!(no_modulo, wide as i32, "{}", context);
    }
}

fn check_i64(
    exact: Result<i64, ArithmeticError>,
    no_modulo: i64,
    wide: i128,
    context: &str,
) {
    if wide > i64::MAX as i128 {
        assert!(exact.is_err(), "{}: exact should overflow", context);
        assert_eq!(no_modulo, i64::MAX, "{}: should saturate to MAX", context);
    } else if wide < i64::MIN as i128 {
        assert!(exact.is_err(), "{}: exact should overflow", context);
        assert_eq!(no_modulo, i64::MIN, "{}: should saturate to MIN", context);
    } else {
        assert_eq!(exact, Ok(wide as i64), "{}", context);
        assert_eq!(no_modulo, wide as i64, "{}", context);
    }
}

#[test]
fn test_i32_add_sub_mul_contracts() {
    proptest!(proptest_config(), |((a, b) in (edgy_i32(), edgy_i32()))| {
        let (wa, wb) = (a as i128, b as i128);
        check_i32(a.add_exact(b), a.add_no_modulo(b), wa + wb, &format!("{} + {}", a, b));
        check_i32(a.sub_exact(b), a.sub_no_modulo(b), wa - wb, &format!("{} - {}", a, b));
        check_i32(a.mul_exact(b), a.mul_no_modulo(b), wa * wb, &format!("{} * {}", a, b));
    });
}

#[test]
fn test_i64_add_sub_mul_contracts() {
    proptest!(proptest_config(), |((a, b) in (edgy_i64(), edgy_i64()))| {
        let (wa, wb) = (a as i128, b as i128);
        check_i64(a.add_exact(b), a.add_no_modulo(b), wa + wb, &format!("{} + {}", a, b));
        check_i64(a.sub_exact(b), a.sub_no_modulo(b), wa - wb, &format!("{} - {}", a, b));
        check_i64(a.mul_exact(b), a.mul_no_modulo(b), wa * wb, &format!("{} * {}", a, b));
    });
}

#[test]
fn test_narrowing_contracts() {
    proptest!(proptest_config(), |(v in edgy_i64())| {
        check_i32(to_i32_exact(v), to_i32_no_modulo(v), v as i128, &format!("narrow {}", v));
    });
}

#[test]
fn test_means_match_wide_arithmetic() {
    proptest!(proptest_config(), |((a, b) in (edgy_i64(), edgy_i64()))| {
        let sum = a as i128 + b as i128;
        assert_eq!(mean_low_i64(a, b) as i128, sum.div_euclid(2), "mean_low({}, {})", a, b);
        assert_eq!(mean_sml_i64(a, b) as i128, sum / 2, "mean_sml({}, {})", a, b);
    });
}

#[test]
fn test_rem_signed_power_of_two_matches_operator() {
    proptest!(proptest_config(), |((v, k, negative) in (any::<i64>(), 0u32..63, any::<bool>()))| {
        let spot = if negative { -(1i64 << k) } else { 1i64 << k };
        let expected = (v as i128 % spot as i128) as i64;
        assert_eq!(rem_signed_power_of_two(v, spot), Ok(expected));
    });
}
