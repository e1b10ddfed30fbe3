//! Configuration for ScribeDB
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::logger::{LogLevel, Logger, TracingLogger};

/// Main configuration for a ScribeDB instance
#[derive(Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all collections
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {collection}/
    ///           └── {resource}.json
    pub data_dir: PathBuf,

    /// fsync the temporary file before renaming it over the record
    pub sync_writes: bool,

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------
    /// Sink for engine diagnostics
    pub logger: Arc<dyn Logger>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./scribedb_data"),
            sync_writes: true,
            logger: Arc::new(TracingLogger::new(LogLevel::Info)),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &self.data_dir)
            .field("sync_writes", &self.sync_writes)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all collections)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Enable or disable fsync of temporary files before rename
    pub fn sync_writes(mut self, enabled: bool) -> Self {
        self.config.sync_writes = enabled;
        self
    }

    /// Inject a custom diagnostic sink
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.config.logger = logger;
        self
    }

    /// Use the built-in tracing logger at the given level
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.logger = Arc::new(TracingLogger::new(level));
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
