//! Error type for the exact ("safe") integer operations.
//!
//! # Error Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | N001 | Exact result does not fit the target integer width |
//! | N002 | Argument outside the documented domain of the operation |

use core::fmt;

/// Failure of an exact integer operation.
///
/// Saturating ("no-modulo") operations never produce this error; they clamp
/// to the representable extreme instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// N001: the mathematically exact result is outside the target width.
    Overflow {
        /// Name of the operation that overflowed (e.g. `"add"`).
        op: &'static str,
    },
    /// N002: an argument violates the operation's precondition.
    InvalidArgument {
        /// What was wrong with the argument.
        reason: &'static str,
    },
}

impl ArithmeticError {
    pub(crate) const fn overflow(op: &'static str) -> Self {
        Self::Overflow { op }
    }

    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }

    /// Get the error code string (e.g., "N001").
    pub fn code(&self) -> &'static str {
        match self {
            Self::Overflow { .. } => "N001",
            Self::InvalidArgument { .. } => "N002",
        }
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { op } => write!(f, "[{}] integer overflow in {}", self.code(), op),
            Self::InvalidArgument { reason } => {
                write!(f, "[{}] invalid argument: {}", self.code(), reason)
            }
        }
    }
}

impl core::error::Error for ArithmeticError {}
