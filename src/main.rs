//! # `calc`
//!
//! `calc` is a command-line calculator that applies one of four arithmetic
//! operations to two numbers.
//!
//! ## Usage
//!
//! ```sh
//! calc add 5 3
//! # The result of 5.0 add 3.0 is: 8.0
//!
//! calc --output-format json divide 6 3
//! # {"operation":"divide","x":6.0,"y":3.0,"result":2.0}
//! ```
//!
//! Errors are printed as `Error: <message>` on stderr and the process exits
//! with a non-zero status specific to the error kind.

use anyhow::Result;
use calc::cli::Args;
use calc::error::CalcError;
use clap::Parser as _;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout only carries the result
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match calc::run(&args) {
        Ok(output) => {
            println!("{output}");
            std::process::exit(0);
        }
        Err(err) => {
            debug!("Calculation failed: {err:?}");
            eprintln!("Error: {err}");
            std::process::exit(
                err.downcast_ref::<CalcError>()
                    .map_or(1, CalcError::exit_code),
            );
        }
    }
}
