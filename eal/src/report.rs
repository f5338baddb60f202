use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::io::{self, Write};

/// Third report line. Carries no caller data.
pub const REPORT_SEPARATOR: &str = "--------------------";

pub fn write_report<W, Tz>(
    out: &mut W,
    region: &str,
    invocation_time: &DateTime<Tz>,
    message: &str,
) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writeln!(out, "Region: {region}")?;
    writeln!(out, "Invocation Time: {invocation_time}")?;
    writeln!(out, "{REPORT_SEPARATOR}")?;
    writeln!(out, "Provided Message: {message}")?;
    Ok(())
}

/// Prints the four-line report for one invocation to standard output.
pub fn do_lambda_functionality<Tz>(
    region: &str,
    invocation_time: &DateTime<Tz>,
    message: &str,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tracing::debug!(region, %invocation_time, "writing report");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, region, invocation_time, message)
        .and_then(|_| out.flush())
        .context("failed to write report to standard output")
}
