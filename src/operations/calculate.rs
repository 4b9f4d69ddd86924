//! Arithmetic dispatch over the four supported operations

use core::fmt;
use core::str::FromStr;

use crate::error::CalcError;
use tracing::debug;

/// Arithmetic operation selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every supported operation, in the order they are listed to users
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Name accepted on the command line
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Apply the operation to two operands
    ///
    /// # Errors
    ///
    /// Returns `CalcError::DivisionByZero` if dividing by zero (of either sign)
    #[inline]
    pub fn apply(self, x: f64, y: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(x + y),
            Self::Subtract => Ok(x - y),
            Self::Multiply => Ok(x * y),
            Self::Divide => {
                if y == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(x / y)
            }
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Names are matched exactly; `Add` and `ADD` are rejected
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.name() == s)
            .ok_or_else(|| CalcError::unknown_operation(s))
    }
}

impl fmt::Display for Operation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Perform a calculation given the operation name and both operands
///
/// # Errors
///
/// Returns an error if:
/// - The operation name is not one of add, subtract, multiply or divide
/// - The operation is divide and `y` is zero
#[inline]
pub fn calculate(operation: &str, x: f64, y: f64) -> Result<f64, CalcError> {
    let operation = operation.parse::<Operation>()?;
    debug!("Dispatching {operation} with x={x:?}, y={y:?}");

    let result = operation.apply(x, y)?;
    debug!("Calculation result: {result:?}");

    Ok(result)
}
