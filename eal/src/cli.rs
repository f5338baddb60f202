use crate::logging::LogLevel;
use clap::{ArgAction, Parser};
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "example-aws-lambda")]
#[command(about = "Print a short report about this invocation")]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Region to report
    #[arg(long, required_unless_present = "version")]
    pub region: Option<String>,

    /// Message to include in the report
    #[arg(long, default_value = "")]
    pub message: String,

    /// Logging verbosity
    #[arg(long, value_enum, ignore_case = true, default_value_t = LogLevel::Warning)]
    pub log_level: LogLevel,

    /// Print the version number and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub version: bool,
}

impl Args {
    /// Parses a full argv, first element being the program name. A
    /// `--version` anywhere before `--` wins over every other argument,
    /// valid or not.
    pub fn from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        if wants_version(&argv) {
            return Ok(Args::version_only());
        }
        Args::try_parse_from(argv)
    }

    fn version_only() -> Self {
        Args {
            region: None,
            message: String::new(),
            log_level: LogLevel::Warning,
            version: true,
        }
    }
}

fn wants_version(argv: &[OsString]) -> bool {
    argv.iter()
        .skip(1)
        .take_while(|arg| arg.to_str() != Some("--"))
        .any(|arg| arg.to_str() == Some("--version"))
}
