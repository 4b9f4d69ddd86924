//! Operations module
//!
//! Parses the raw tokens, runs the arithmetic and renders the result

pub mod calculate;
pub mod parse;
pub mod render;

pub use calculate::*;
pub use parse::*;
pub use render::*;
