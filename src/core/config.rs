//! Logger configuration
//!
//! Serializable settings consumed by [`LoggerBuilder::from_config`] and
//! [`LoggerGuard::init`](crate::core::LoggerGuard::init).
//!
//! [`LoggerBuilder::from_config`]: crate::core::LoggerBuilder::from_config

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default bound for [`Logger::drain_sync`](crate::core::Logger::drain_sync)
pub const DEFAULT_DRAIN_TIMEOUT: Duration = Duration::from_millis(100);

/// Where a record's timestamp comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampSource {
    /// Stamped by the consumer thread when the record is formatted.
    ///
    /// Cheapest for producers; under load the time trails the event.
    #[default]
    Consumer,

    /// Stamped by the producer when the record is submitted
    Producer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    /// Append-mode log file; `None` logs to the console only
    pub file_path: Option<PathBuf>,
    pub console: bool,
    /// `None` follows the environment (`NO_COLOR`, `CLICOLOR`, terminal detection)
    pub use_colors: Option<bool>,
    pub drain_timeout_ms: u64,
    pub timestamp_source: TimestampSource,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Debug,
            file_path: None,
            console: true,
            use_colors: None,
            drain_timeout_ms: DEFAULT_DRAIN_TIMEOUT.as_millis() as u64,
            timestamp_source: TimestampSource::default(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.drain_timeout_ms == 0 {
            return Err(LoggerError::config(
                "drain_timeout_ms",
                "must be greater than zero",
            ));
        }
        if let Some(path) = &self.file_path {
            if path.as_os_str().is_empty() {
                return Err(LoggerError::config("file_path", "must not be empty"));
            }
        }
        Ok(())
    }

    pub fn drain_timeout(&self) -> Duration {
        Duration::from_millis(self.drain_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.min_level, LogLevel::Debug);
        assert!(config.file_path.is_none());
        assert!(config.console);
        assert_eq!(config.drain_timeout(), DEFAULT_DRAIN_TIMEOUT);
        assert_eq!(config.timestamp_source, TimestampSource::Consumer);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LoggerConfig::from_json_str(
            r#"{ "min_level": "Warn", "file_path": "/tmp/app.log", "timestamp_source": "producer" }"#,
        )
        .expect("valid config");

        assert_eq!(config.min_level, LogLevel::Warn);
        assert_eq!(config.file_path, Some(PathBuf::from("/tmp/app.log")));
        assert!(config.console);
        assert_eq!(config.timestamp_source, TimestampSource::Producer);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = LoggerConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));

        let err = LoggerConfig::from_json_str(r#"{ "drain_timeout_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_from_json_file() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("logger.json");
        std::fs::write(&path, r#"{ "console": false, "drain_timeout_ms": 250 }"#).unwrap();

        let config = LoggerConfig::from_json_file(&path).expect("valid config file");
        assert!(!config.console);
        assert_eq!(config.drain_timeout(), Duration::from_millis(250));

        let missing = LoggerConfig::from_json_file(temp_dir.path().join("nope.json"));
        assert!(matches!(missing, Err(LoggerError::IoOperation { .. })));
    }
}
