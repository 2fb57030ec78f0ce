//! Kite Connect endpoint configuration.

use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};

/// Broker endpoints. Defaults point at production Kite Connect.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KiteConfig {
    /// Hosted login page the user visits to obtain a request token.
    pub login_url: String,
    /// REST API root for session and order calls.
    pub api_url: String,
}

impl Default for KiteConfig {
    fn default() -> Self {
        Self {
            login_url: "https://kite.zerodha.com/connect/login".into(),
            api_url: "https://api.kite.trade".into(),
        }
    }
}

impl KiteConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        for (field, value) in [("login_url", &self.login_url), ("api_url", &self.api_url)] {
            if let Err(e) = Url::parse(value) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{value:?} is not a valid URL: {e}"),
                }
                .into());
            }
        }
        Ok(())
    }
}
