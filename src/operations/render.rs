//! Render a finished calculation for stdout

use core::str::FromStr;

use crate::operations::OperationRequest;
use anyhow::{Context as _, Result};
use serde::{Serialize, Serializer};

/// Output format for a calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutputFormat {
    /// `The result of ... is: ...` sentence
    #[default]
    Text,
    /// Single-line JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'text' or 'json'")),
        }
    }
}

/// A completed calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub operation: String,
    pub x: f64,
    pub y: f64,
    #[serde(serialize_with = "serialize_result")]
    pub result: f64,
}

impl Calculation {
    /// Pair a request with the value it evaluated to
    #[must_use]
    #[inline]
    pub fn new(request: OperationRequest, result: f64) -> Self {
        Self {
            operation: request.operation,
            x: request.x,
            y: request.y,
            result,
        }
    }
}

/// Render a calculation in the requested format
///
/// # Errors
///
/// Returns an error if the calculation cannot be serialized to JSON
#[inline]
pub fn render(calculation: &Calculation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_as_text(calculation)),
        OutputFormat::Json => format_as_json(calculation),
    }
}

fn format_as_text(calculation: &Calculation) -> String {
    format!(
        "The result of {} {} {} is: {}",
        format_number(calculation.x),
        calculation.operation,
        format_number(calculation.y),
        format_number(calculation.result)
    )
}

fn format_as_json(calculation: &Calculation) -> Result<String> {
    serde_json::to_string(calculation).context("Failed to serialize calculation to JSON")
}

/// Rust's shortest round-trip form, keeping `.0` on integral values (`8.0`, not `8`)
#[must_use]
#[inline]
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

/// Overflowed results are written as the text form (`"inf"`) instead of `null`
fn serialize_result<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format_number(*value))
    }
}
