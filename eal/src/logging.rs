use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt as tracing_fmt, reload, Registry};

/// Verbosity names accepted on the command line and in event payloads.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// `tracing` tops out at ERROR, so critical shares its filter.
    pub fn filter(&self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }

    /// Case-insensitive lookup by name, e.g. `"Info"` or `"CRITICAL"`.
    pub fn parse(name: &str) -> Result<Self> {
        <LogLevel as ValueEnum>::from_str(name, true)
            .map_err(|_| anyhow!("invalid log level: {name}"))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle onto the subscriber installed by [`setup_logging`].
#[derive(Clone)]
pub struct LogHandle {
    filter: reload::Handle<LevelFilter, Registry>,
    level: Arc<Mutex<LogLevel>>,
}

impl LogHandle {
    pub fn level(&self) -> LogLevel {
        *self.level.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_level(&self, level: LogLevel) -> Result<()> {
        let mut current = self.level.lock().unwrap_or_else(|e| e.into_inner());
        self.filter
            .reload(level.filter())
            .context("failed to reload log level filter")?;
        *current = level;
        Ok(())
    }
}

static INSTALLED: Mutex<Option<LogHandle>> = Mutex::new(None);

/// Installs the global subscriber on first use and only adjusts its level
/// afterwards, so a process never ends up with more than one.
pub fn setup_logging(level: LogLevel) -> Result<LogHandle> {
    let mut installed = INSTALLED.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(handle) = installed.as_ref() {
        handle.set_level(level)?;
        return Ok(handle.clone());
    }

    let (filter_layer, filter) = reload::Layer::new(level.filter());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            tracing_fmt::layer()
                .with_writer(std::io::stderr)
                // disable printing the name of the module in every log line.
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    let handle = LogHandle {
        filter,
        level: Arc::new(Mutex::new(level)),
    };
    *installed = Some(handle.clone());

    tracing::debug!(level = %level, "logging configured");
    Ok(handle)
}
