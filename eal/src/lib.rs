//! Example function that prints a short report about its invocation.
//!
//! The same report can be produced from the command line (see [`run`]) or
//! from a hosted function handler by calling [`do_lambda_functionality`]
//! directly with a region and an invocation time.

use anyhow::{Context, Result};
use chrono::Utc;
use std::io::Write;

pub mod cli;
pub mod logging;
pub mod report;

pub use cli::Args;
pub use logging::{setup_logging, LogHandle, LogLevel};
pub use report::{do_lambda_functionality, write_report, REPORT_SEPARATOR};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs one command-line invocation and returns the process exit status.
pub fn run<W: Write>(args: Args, out: &mut W) -> Result<u8> {
    if args.version {
        writeln!(out, "{VERSION}").context("failed to write version")?;
        return Ok(0);
    }

    let logging = setup_logging(args.log_level)?;
    tracing::info!(level = %logging.level(), "starting");

    // Parsing guarantees a region unless --version was given.
    let region = args.region.unwrap_or_default();
    let invocation_time = Utc::now();

    write_report(out, &region, &invocation_time, &args.message)
        .and_then(|_| out.flush())
        .context("failed to write report")?;

    Ok(0)
}
