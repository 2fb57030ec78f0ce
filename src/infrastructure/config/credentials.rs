//! Credential loading from the env file.
//!
//! The env file must exist even when the variables are already exported; its
//! absence is the usual sign of a fresh checkout that was never set up.
//! Exported variables take precedence over values in the file, and the
//! process environment is never modified.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::Credentials;
use crate::error::ConfigError;

/// Environment variable holding the Kite Connect API key.
pub const API_KEY_VAR: &str = "ZERODHA_API_KEY";

/// Environment variable holding the Kite Connect API secret.
pub const API_SECRET_VAR: &str = "ZERODHA_API_SECRET";

/// Load credentials from `env_file` and the process environment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvFile`] if the file does not exist,
/// [`ConfigError::EnvFile`] if it cannot be parsed, and
/// [`ConfigError::MissingCredential`] if either variable is missing or empty.
pub fn load(env_file: &Path) -> Result<Credentials, ConfigError> {
    if !env_file.exists() {
        return Err(ConfigError::MissingEnvFile {
            path: env_file.to_path_buf(),
        });
    }

    let env_error = |e: dotenvy::Error| ConfigError::EnvFile {
        path: env_file.to_path_buf(),
        reason: e.to_string(),
    };

    let file_vars = dotenvy::from_path_iter(env_file)
        .map_err(env_error)?
        .collect::<Result<HashMap<String, String>, _>>()
        .map_err(env_error)?;

    from_lookup(|name| {
        std::env::var(name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| file_vars.get(name).cloned())
    })
}

/// Build credentials from an arbitrary variable lookup.
///
/// Empty values count as missing.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredential`] naming the first absent variable.
pub fn from_lookup<F>(lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let require = |name: &'static str| {
        lookup(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingCredential { name })
    };

    let api_key = require(API_KEY_VAR)?;
    let api_secret = require(API_SECRET_VAR)?;
    Ok(Credentials::new(api_key, api_secret))
}
