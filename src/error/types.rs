//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for calculator operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalcError {
    /// Wrong number of command-line tokens
    #[error("Usage: calc <operation> <x> <y>")]
    InvalidUsage,

    /// One or both operands are not numbers
    #[error("Both x and y must be numbers")]
    InvalidOperand,

    /// Operation name outside the supported set
    #[error("Unknown operation: {operation}. Use add, subtract, multiply, or divide.")]
    UnknownOperation { operation: String },

    /// Divide requested with a zero divisor
    #[error("Cannot divide by zero!")]
    DivisionByZero,
}

impl CalcError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::InvalidUsage => 2,
            Self::InvalidOperand => 3,
            Self::UnknownOperation { .. } => 4,
            Self::DivisionByZero => 5,
        }
    }

    /// Create an unknown operation error
    #[inline]
    pub fn unknown_operation<S: Into<String>>(operation: S) -> Self {
        Self::UnknownOperation {
            operation: operation.into(),
        }
    }
}
