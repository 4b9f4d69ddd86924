//! `calc` - A command-line calculator for basic arithmetic on two numbers
//!
//! This library parses `<operation> <x> <y>` tokens, applies one of add,
//! subtract, multiply or divide, and renders the result as text or JSON.

pub mod cli;
pub mod error;
pub mod operations;

use anyhow::Result;
use cli::Args;
use operations::{Calculation, OutputFormat, calculate, parse_args, render};

/// Main entry point for the calc library
///
/// Returns the line to print on success.
///
/// # Errors
///
/// Returns an error if:
/// - The output format is not recognised
/// - The tokens cannot be parsed into a request (`CalcError`)
/// - The calculation fails (`CalcError`)
#[inline]
pub fn run(args: &Args) -> Result<String> {
    let format = args
        .output_format
        .parse::<OutputFormat>()
        .map_err(anyhow::Error::msg)?;

    let request = parse_args(&args.tokens)?;
    let result = calculate(&request.operation, request.x, request.y)?;

    render(&Calculation::new(request, result), format)
}
