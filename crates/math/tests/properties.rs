//! Property-based tests for altair-math
//!
//! Uses proptest to check invariants that must hold for every input, not
//! just the sampled sweeps of the accuracy tests.

use altair_math::*;
use proptest::prelude::*;


use test_utils::*;

use proptest::test_runner::Config as ProptestConfig;

fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 10_000,
        ..ProptestConfig::default()
    }
}

/// Property: sin² + cos² stays within 1e-15 of 1 for every finite input
#[test]
fn test_pythagorean_identity() {
    proptest!(proptest_config(), |(x in finite_f64())| {
        let (s, c) = sin_and_cos(x);
        let identity = s * s + c * c;
        prop_assert!((identity - 1.0).abs() <= 1e-15, "sin²+cos² = {} at x = {:e}", identity, x);
    });
}

/// Property: the paired call agrees bit for bit with the separate calls
#[test]
fn test_sin_and_cos_pairing() {
    proptest!(proptest_config(), |(x in prop_oneof![finite_f64(), special_f64()])| {
        let (s, c) = sin_and_cos(x);
        prop_assert_eq!(s.to_bits(), sin(x).to_bits());
        prop_assert_eq!(c.to_bits(), cos(x).to_bits());

        let (sq, cq) = sin_and_cos_quick(x);
        prop_assert_eq!(sq.to_bits(), sin_quick(x).to_bits());
        prop_assert_eq!(cq.to_bits(), cos_quick(x).to_bits());

        let (sh, ch) = sinh_and_cosh(x);
        prop_assert!(sh.to_bits() == sinh(x).to_bits() || (sh - sinh(x)).abs() <= 1e-15 * sh.abs());
        prop_assert!(ch.to_bits() == cosh(x).to_bits() || (ch - cosh(x)).abs() <= 1e-15 * ch.abs());
    });
}

/// Property: quick and precise sine stay within the quick bound of each other
#[test]
fn test_quick_tracks_precise() {
    proptest!(proptest_config(), |(x in moderate_angle())| {
        prop_assert!((sin_quick(x) - sin(x)).abs() <= QUICK_TOLERANCE);
        prop_assert!((cos_quick(x) - cos(x)).abs() <= QUICK_TOLERANCE);
    });
}

/// Property: each normalizer is a no-op on its own output
#[test]
fn test_normalizer_idempotence() {
    proptest!(proptest_config(), |(x in finite_f64())| {
        let normalizers: [fn(f64) -> f64; 6] = [
            normalize_minus_pi_pi,
            normalize_zero_two_pi,
            normalize_minus_half_pi_half_pi,
            normalize_minus_pi_pi_quick,
            normalize_zero_two_pi_quick,
            normalize_minus_half_pi_half_pi_quick,
        ];
        for f in normalizers {
            let once = f(x);
            prop_assert_eq!(f(once).to_bits(), once.to_bits(), "not idempotent at {:e}", x);
        }
    });
}

/// Property: inside [-π, π] the normalizer returns its input bit for bit
#[test]
fn test_normalize_minus_pi_pi_identity() {
    let pi = core::f64::consts::PI;
    proptest!(proptest_config(), |(x in -pi..=pi)| {
        prop_assert_eq!(normalize_minus_pi_pi(x).to_bits(), x.to_bits());
        prop_assert_eq!(normalize_minus_pi_pi_quick(x).to_bits(), x.to_bits());
    });
}

/// Property: pow(2, k) and two_pow(k) agree bit for bit
#[test]
fn test_pow_two_matches_two_pow() {
    proptest!(proptest_config(), |(k in -1200i32..1200)| {
        prop_assert_eq!(pow(2.0, k as f64).to_bits(), two_pow(k).to_bits());
        prop_assert_eq!(pow_int(2.0, k).to_bits(), two_pow(k).to_bits());
    });
}

/// Property: scale_pow2 rounds once, like libm's scalbn
#[test]
fn test_scale_pow2_matches_scalbn() {
    proptest!(proptest_config(), |(x in finite_f64(), k in -2200i32..2200)| {
        prop_assert_eq!(scale_pow2(x, k).to_bits(), libm::scalbn(x, k).to_bits());
    });
}

/// Property: float-to-float rounding matches libm bit for bit, sign of zero included
#[test]
fn test_rounding_matches_libm() {
    proptest!(proptest_config(), |(x in prop_oneof![finite_f64(), -1e4f64..1e4, special_f64()])| {
        prop_assert_eq!(floor(x).to_bits(), libm::floor(x).to_bits(), "floor({:e})", x);
        prop_assert_eq!(ceil(x).to_bits(), libm::ceil(x).to_bits(), "ceil({:e})", x);
        if !x.is_nan() {
            prop_assert_eq!(round_even(x).to_bits(), libm::rint(x).to_bits(), "round_even({:e})", x);
        }
        if x.is_finite() && x.abs() < 9.0e18 {
            prop_assert_eq!(round(x), libm::round(x) as i64, "round({:e})", x);
        }
    });
}

/// Property: f32 rounding matches libm bit for bit
#[test]
fn test_rounding_f32_matches_libm() {
    proptest!(proptest_config(), |(x in -1e9f32..1e9f32)| {
        prop_assert_eq!(floor_f32(x).to_bits(), libm::floorf(x).to_bits());
        prop_assert_eq!(ceil_f32(x).to_bits(), libm::ceilf(x).to_bits());
        prop_assert_eq!(round_even_f32(x).to_bits(), libm::rintf(x).to_bits());
        prop_assert_eq!(round_f32(x), libm::roundf(x) as i32);
    });
}

/// Property: the IEEE remainder is exact, so it matches libm bit for bit
#[test]
fn test_ieee_remainder_matches_libm() {
    proptest!(proptest_config(), |(x in finite_f64(), y in finite_f64())| {
        prop_assume!(y != 0.0);
        let r = ieee_remainder(x, y);
        prop_assert_eq!(r.to_bits(), libm::remainder(x, y).to_bits(), "remainder({:e}, {:e})", x, y);
        prop_assert!(r.abs() <= 0.5 * y.abs());
    });
}

/// Property: the clockwise-arc predicate is periodic in both angles
#[test]
fn test_clockwise_domain_periodicity() {
    let tau = 2.0 * core::f64::consts::PI;
    proptest!(proptest_config(), |(start in -10.0f64..10.0, span in 0.0f64..6.0, offset in 0.0f64..6.2)| {
        let angle = start + offset;
        // stay clear of the arc's end, where rounding decides
        prop_assume!(offset > 1e-9 && (offset - span).abs() > 1e-9);
        let inside = is_in_clockwise_domain(start, span, angle);
        prop_assert_eq!(inside, offset <= span);
        prop_assert_eq!(is_in_clockwise_domain(start + tau, span, angle - tau), inside);
    });
}

/// Property: cbrt inverts cubing to within an ulp or two
#[test]
fn test_cbrt_of_cube() {
    proptest!(proptest_config(), |(x in -1e100f64..1e100)| {
        prop_assume!(x.abs() > 1e-100);
        let r = cbrt(x * x * x);
        prop_assert!((r - x).abs() <= 1e-15 * x.abs(), "cbrt({:e}³) = {:e}", x, r);
    });
}
