//! Conversion of raw command-line tokens into an operation request

use crate::error::CalcError;
use tracing::debug;

/// A parsed but not yet evaluated calculation
///
/// The operation name is kept as given; it is checked against the
/// supported set only when the calculation runs.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub operation: String,
    pub x: f64,
    pub y: f64,
}

/// Parse `[operation, x, y]` into an `OperationRequest`
///
/// # Errors
///
/// Returns an error if:
/// - There are not exactly three tokens
/// - Either operand is not a finite decimal number
#[inline]
pub fn parse_args<S: AsRef<str>>(tokens: &[S]) -> Result<OperationRequest, CalcError> {
    let [operation, x, y] = tokens else {
        debug!("Expected 3 tokens, got {}", tokens.len());
        return Err(CalcError::InvalidUsage);
    };

    let (Some(x), Some(y)) = (parse_operand(x.as_ref()), parse_operand(y.as_ref())) else {
        return Err(CalcError::InvalidOperand);
    };

    let request = OperationRequest {
        operation: operation.as_ref().to_owned(),
        x,
        y,
    };
    debug!("Parsed request: {request:?}");

    Ok(request)
}

/// Parse a single operand after trimming Unicode whitespace
///
/// Rejects `inf`, `nan` and literals that overflow
fn parse_operand(token: &str) -> Option<f64> {
    match token.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            debug!("Operand '{token}' is not finite: {value}");
            None
        }
        Err(err) => {
            debug!("Operand '{token}' is not a number: {err}");
            None
        }
    }
}
