//! Logger capability
//!
//! The engine reports diagnostics through the [`Logger`] trait only. Any sink
//! with the six leveled methods can be injected through [`Config`]; the
//! default is [`TracingLogger`], which forwards to `tracing` events.
//!
//! [`Config`]: crate::Config

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StoreError};

/// Leveled diagnostic sink used by the engine
///
/// Implementations must be shareable across threads: a single logger is
/// held by the engine and called from every operation.
pub trait Logger: Send + Sync {
    fn fatal(&self, args: fmt::Arguments<'_>);
    fn error(&self, args: fmt::Arguments<'_>);
    fn warn(&self, args: fmt::Arguments<'_>);
    fn info(&self, args: fmt::Arguments<'_>);
    fn debug(&self, args: fmt::Arguments<'_>);
    fn trace(&self, args: fmt::Arguments<'_>);
}

/// Severity levels, most severe first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Fatal,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fatal" => Ok(LogLevel::Fatal),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(StoreError::Config(format!("unknown log level '{}'", other))),
        }
    }
}

/// Default sink: filters by level, then emits `tracing` events
///
/// Nothing is printed unless a subscriber is installed (the `scribedb`
/// binary installs a console `fmt` subscriber).
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    level: LogLevel,
}

impl TracingLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Most verbose level this logger lets through
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a message at `level` passes this logger's filter
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for TracingLogger {
    fn fatal(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Fatal) {
            tracing::error!(target: "scribedb", fatal = true, "{}", args);
        }
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Error) {
            tracing::error!(target: "scribedb", "{}", args);
        }
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Warn) {
            tracing::warn!(target: "scribedb", "{}", args);
        }
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Info) {
            tracing::info!(target: "scribedb", "{}", args);
        }
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Debug) {
            tracing::debug!(target: "scribedb", "{}", args);
        }
    }

    fn trace(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Trace) {
            tracing::trace!(target: "scribedb", "{}", args);
        }
    }
}
