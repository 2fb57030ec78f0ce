//! Logging configuration and initialization.
//!
//! Log lines go to stderr and, unless disabled, to a size-rotated log file.
//! `RUST_LOG` overrides the configured level.

use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};
use crate::infrastructure::rolling::RollingFile;

/// Console log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Log file path. An empty path disables file logging.
    pub file: Option<PathBuf>,
    /// Size in bytes at which the log file is rotated.
    pub max_file_size: u64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            file: Some(PathBuf::from("kitegate.log")),
            max_file_size: 10_000_000,
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// A subscriber that is already installed is left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    pub fn init(&self) -> io::Result<()> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let file_layer = match self.file.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(RollingFile::open(path, self.max_file_size)?),
            ),
            None => None,
        };

        let registry = tracing_subscriber::registry().with(filter).with(file_layer);

        let _ = match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(io::stderr))
                .try_init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().with_writer(io::stderr))
                .try_init(),
        };

        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if EnvFilter::try_new(&self.level).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("{:?} is not a valid filter directive", self.level),
            }
            .into());
        }
        if self.max_file_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "logging.max_file_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rotates_at_ten_megabytes() {
        let config = LoggingConfig::default();
        assert_eq!(config.max_file_size, 10_000_000);
        assert_eq!(config.file, Some(PathBuf::from("kitegate.log")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_file_size_is_rejected() {
        let config = LoggingConfig {
            max_file_size: 0,
            ..LoggingConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_file_size"));
    }

    #[test]
    fn empty_file_path_parses() {
        let config: LoggingConfig = toml::from_str(r#"file = """#).unwrap();
        assert_eq!(config.file, Some(PathBuf::new()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_format_fails_to_parse() {
        let result: std::result::Result<LoggingConfig, _> = toml::from_str(r#"format = "xml""#);
        assert!(result.is_err());
    }
}
