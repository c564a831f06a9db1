//! Accuracy tiers
//!
//! Every dual-tier function family is written once, generic over a [`Tier`],
//! and exposed twice: `sin` instantiates the kernel with [`Precise`],
//! `sin_quick` with [`Quick`]. The choice is made at the call site and costs
//! nothing at run time.
//!
//! | Tier | Error bound | Valid arguments |
//! |------|-------------|-----------------|
//! | [`Precise`] | ≤ 1e-10 (absolute, or relative when the result is ≥ 1) | every finite input |
//! | [`Quick`] | ≤ 3e-3 | inside the window named by its `QUICK_*_MAX` constant |
//!
//! Outside its window the quick tier falls back to precise reduction, so a
//! quick call is never less accurate than documented, only slower.
//!
//! The trait is sealed: the two tiers are the whole contract.

use crate::eval;
use crate::reduce::{self, ReducedArg};

/// Largest `|x|` for which quick trig reduction uses the short Cody-Waite path.
pub const QUICK_TRIG_MAX: f64 = 1.0e6;

/// Largest `|x|` accepted by `exp_quick` before it saturates like `exp`.
pub const QUICK_EXP_MAX: f64 = 700.0;

/// Largest `|x|` for which the quick angle normalizers use the short path.
pub const QUICK_ANGLE_MAX: f64 = 1.0e6;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Precise {}
    impl Sealed for super::Quick {}
}

/// Compile-time accuracy tier.
pub trait Tier: sealed::Sealed + Copy + Default + 'static {
    /// Tier name; the benches label their precise and quick runs with it.
    const NAME: &'static str;

    /// Reduce modulo π/2.
    fn reduce_half_pi(x: f64) -> ReducedArg;

    /// `(sin, cos)` of a reduced argument.
    fn sin_cos(r: &ReducedArg) -> (f64, f64);

    /// `e^x` for finite `x` inside the representable window.
    fn exp(x: f64) -> f64;

    /// `ln x` for positive finite `x`.
    fn log(x: f64) -> f64;

    /// `x` modulo 2π into `[-π, π]`.
    fn reduce_two_pi(x: f64) -> f64;

    /// `x` modulo π into `[-π/2, π/2]`.
    fn reduce_pi(x: f64) -> f64;
}

/// Near-reference accuracy over the whole finite domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Precise;

/// Lower accuracy, fewer operations, bounded argument windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quick;

impl Tier for Precise {
    const NAME: &'static str = "precise";

    #[inline(always)]
    fn reduce_half_pi(x: f64) -> ReducedArg {
        reduce::reduce_half_pi(x)
    }

    #[inline(always)]
    fn sin_cos(r: &ReducedArg) -> (f64, f64) {
        eval::sin_cos_precise(r.hi, r.lo)
    }

    #[inline(always)]
    fn exp(x: f64) -> f64 {
        eval::exp_precise(x)
    }

    #[inline(always)]
    fn log(x: f64) -> f64 {
        eval::log_precise(x)
    }

    #[inline(always)]
    fn reduce_two_pi(x: f64) -> f64 {
        reduce::reduce_two_pi(x)
    }

    #[inline(always)]
    fn reduce_pi(x: f64) -> f64 {
        reduce::reduce_pi(x)
    }
}

impl Tier for Quick {
    const NAME: &'static str = "quick";

    #[inline(always)]
    fn reduce_half_pi(x: f64) -> ReducedArg {
        reduce::reduce_half_pi_quick(x)
    }

    #[inline(always)]
    fn sin_cos(r: &ReducedArg) -> (f64, f64) {
        eval::sin_cos_quick(r.hi)
    }

    #[inline(always)]
    fn exp(x: f64) -> f64 {
        eval::exp_quick(x)
    }

    #[inline(always)]
    fn log(x: f64) -> f64 {
        eval::log_quick(x)
    }

    #[inline(always)]
    fn reduce_two_pi(x: f64) -> f64 {
        reduce::reduce_two_pi_quick(x)
    }

    #[inline(always)]
    fn reduce_pi(x: f64) -> f64 {
        reduce::reduce_pi_quick(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of<T: Tier>() -> &'static str {
        T::NAME
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(name_of::<Precise>(), "precise");
        assert_eq!(name_of::<Quick>(), "quick");
        // bench ids within a group must differ
        assert_ne!(Precise::NAME, Quick::NAME);
        assert_ne!(Quick::NAME, "libm");
    }

    #[test]
    fn test_tiers_agree_loosely() {
        for &x in &[0.1, 1.0, 3.0, -20.0, 1234.5] {
            let p = Precise::sin_cos(&Precise::reduce_half_pi(x));
            let q = Quick::sin_cos(&Quick::reduce_half_pi(x));
            assert!((p.0 - q.0).abs() < 1e-5, "sin tiers disagree at {}", x);
            assert!((p.1 - q.1).abs() < 1e-5, "cos tiers disagree at {}", x);
        }
        assert!((Precise::exp(2.0) - Quick::exp(2.0)).abs() / Precise::exp(2.0) < 1e-5);
        assert!((Precise::log(7.0) - Quick::log(7.0)).abs() < 1e-6);
    }
}
