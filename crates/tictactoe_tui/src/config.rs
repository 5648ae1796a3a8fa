//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// File that receives tracing output while the terminal is in raw mode.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter directive.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Render the key help footer.
    #[serde(default = "default_show_help")]
    #[getter(skip)]
    show_help: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_help() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_help: default_show_help(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Whether to render the key help footer.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Loads the given file, or falls back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, log_file: Option<PathBuf>, log_filter: Option<String>) -> Self {
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        if let Some(log_filter) = log_filter {
            self.log_filter = log_filter;
        }
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
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"").unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"\nshow_help = false").unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert!(!config.show_help());
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 4").unwrap();

        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TuiConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_no_path_means_defaults() {
        assert_eq!(TuiConfig::load(None).unwrap(), TuiConfig::default());
    }

    #[test]
    fn test_overrides_win() {
        let config = TuiConfig::default()
            .with_overrides(Some(PathBuf::from("other.log")), Some("trace".to_string()));
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
        assert_eq!(config.log_filter(), "trace");
        assert!(config.show_help());
    }
}
