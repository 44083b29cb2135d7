//! Logging configuration taken from the environment

use std::env;

use tracing::Level;

use crate::error::{Error, Result};

/// Variable holding the log level name
pub const LOG_LEVEL_VAR: &str = "CQLPRIM_LOG";

/// Variable that disables colored output when set to anything non-empty
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// How the tools set up their log output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Most verbose level that is emitted
    pub level: Level,
    /// Whether to color the output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read the configuration through `lookup`, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(LOG_LEVEL_VAR).filter(|v| !v.is_empty()) {
            config.level = value.parse::<Level>().map_err(|e| Error::InvalidEnv {
                var: LOG_LEVEL_VAR,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }
        if lookup(NO_COLOR_VAR).is_some_and(|v| !v.is_empty()) {
            config.ansi = false;
        }
        Ok(config)
    }
}
