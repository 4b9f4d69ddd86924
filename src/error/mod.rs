//! Error handling module
//!
//! Defines the calculator error taxonomy and its exit codes

pub mod types;

pub use types::*;
