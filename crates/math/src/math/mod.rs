//! Function façade
//!
//! Each family filters special values (NaN, infinities, signed zeros, domain
//! violations) first, then hands the finite argument to the reduction engine
//! and the table evaluators.
//!
//! # Modules
//!
//! - `trig`: sin, cos, tan and their inverses, in both tiers
//! - `hyperbolic`: sinh, cosh, tanh and their inverses
//! - `exp_log`: exp, expm1, log, log1p, log10
//! - `power`: pow, pow_int, sqrt, cbrt, hypot
//! - `rounding`: floor, ceil, round, ties-to-even rounding, IEEE remainder
//! - `angle`: angle normalizers and the clockwise-arc predicate
//!
//! # Example
//!
//! ```rust
//! use altair_math::math::{exp, exp_quick, log};
//!
//! assert!((log(exp(3.0)) - 3.0).abs() < 1e-14);
//! assert!((exp_quick(1.0) - core::f64::consts::E).abs() < 1e-4);
//! ```

pub mod angle;
pub mod exp_log;
pub mod hyperbolic;
pub mod power;
pub mod rounding;
pub mod trig;

pub use self::angle::{
    is_in_clockwise_domain, normalize_minus_half_pi_half_pi,
    normalize_minus_half_pi_half_pi_quick, normalize_minus_pi_pi, normalize_minus_pi_pi_quick,
    normalize_zero_two_pi, normalize_zero_two_pi_quick,
};
pub use self::exp_log::{exp, exp_quick, expm1, log, log10, log1p, log_quick};
pub use self::hyperbolic::{acosh, asinh, atanh, cosh, sinh, sinh_and_cosh, tanh};
pub use self::power::{cbrt, hypot, pow, pow_int, pow_quick, sqrt};
pub use self::rounding::{
    ceil, ceil_f32, floor, floor_f32, ieee_remainder, round, round_even, round_even_f32,
    round_f32,
};
pub use self::trig::{
    acos, acos_in_range, asin, asin_in_range, atan, atan2, cos, cos_quick, sin, sin_and_cos,
    sin_and_cos_quick, sin_quick, tan,
};
