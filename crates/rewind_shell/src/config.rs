//! Shell configuration.

use crate::order::HistoryOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the interactive shell, usually read from `rewind.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Initial order of the history list.
    #[serde(default)]
    history_order: HistoryOrder,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Write logs here instead of stderr.
    #[serde(default)]
    log_file: Option<PathBuf>,

    /// Prompt shown before each input line.
    #[serde(default = "default_prompt")]
    prompt: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_order: HistoryOrder::default(),
            log_filter: default_log_filter(),
            log_file: None,
            prompt: default_prompt(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(order = ?config.history_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the initial history order.
    pub fn with_history_order(mut self, order: HistoryOrder) -> Self {
        self.history_order = order;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.prompt(), "> ");
    }

    #[test]
    fn test_partial_toml() {
        let config: ShellConfig = toml::from_str(
            r#"
            history_order = "reversed"
            log_filter = "rewind_tictactoe=debug"
            "#,
        )
        .unwrap();
        assert_eq!(*config.history_order(), HistoryOrder::Reversed);
        assert_eq!(config.log_filter(), "rewind_tictactoe=debug");
        assert!(config.log_file().is_none());
    }
}
