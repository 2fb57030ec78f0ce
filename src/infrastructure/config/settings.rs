//! Application configuration loading and validation.
//!
//! Settings come from an optional TOML file (default `kitegate.toml` in the
//! working directory). Every field has a default, so a missing file is not an
//! error. API credentials never live here; they are read from the env file
//! named by [`Settings::env_file`].
//!
//! # Example
//!
//! ```no_run
//! use kitegate::infrastructure::config::settings::Settings;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load_or_default("kitegate.toml")?;
//!     settings.logging.init()?;
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::kite::KiteConfig;
use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "kitegate.toml";

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Env file holding `ZERODHA_API_KEY` and `ZERODHA_API_SECRET`.
    pub env_file: PathBuf,

    /// Backing file of the single-slot token store.
    pub token_file: PathBuf,

    /// Broker endpoints.
    pub kite: KiteConfig,

    /// Console and file logging.
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(".env"),
            token_file: PathBuf::from(".tokens"),
            kite: KiteConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a TOML file that must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::load`] for a file that exists.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn validate(&self) -> Result<()> {
        if self.token_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "token_file",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        if self.env_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "env_file",
                reason: "cannot be empty".to_string(),
            }
            .into());
        }
        self.kite.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::infrastructure::config::logging::LogFormat;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = Settings::parse_toml("").unwrap();
        assert_eq!(settings.env_file, PathBuf::from(".env"));
        assert_eq!(settings.token_file, PathBuf::from(".tokens"));
        assert_eq!(settings.kite.api_url, "https://api.kite.trade");
        assert_eq!(settings.logging.max_file_size, 10_000_000);
    }

    #[test]
    fn overrides_are_parsed() {
        let toml = r#"
            token_file = "state/access.token"

            [kite]
            api_url = "http://127.0.0.1:9000"

            [logging]
            level = "debug"
            format = "json"
            max_file_size = 2048
        "#;
        let settings = Settings::parse_toml(toml).unwrap();
        assert_eq!(settings.token_file, PathBuf::from("state/access.token"));
        assert_eq!(settings.kite.api_url, "http://127.0.0.1:9000");
        assert_eq!(
            settings.kite.login_url,
            "https://kite.zerodha.com/connect/login"
        );
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.max_file_size, 2048);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = Settings::parse_toml("token_file = [");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn empty_token_file_is_rejected() {
        let result = Settings::parse_toml(r#"token_file = """#);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "token_file",
                ..
            }))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.token_file, PathBuf::from(".tokens"));
    }

    #[test]
    fn explicit_load_requires_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }
}
