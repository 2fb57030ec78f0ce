use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "{} not found; create it with ZERODHA_API_KEY and ZERODHA_API_SECRET",
        .path.display()
    )]
    MissingEnvFile { path: PathBuf },

    #[error("failed to load {}: {reason}", .path.display())]
    EnvFile { path: PathBuf, reason: String },

    #[error("missing required credential: {name}")]
    MissingCredential { name: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors reported by the broker API.
#[derive(Error, Debug)]
pub enum BrokerError {
    #[error("broker rejected request (HTTP {status}): {message}")]
    Api {
        status: u16,
        error_type: Option<String>,
        message: String,
    },

    #[error("broker response missing field: {field}")]
    MissingField { field: &'static str },
}

/// Order submission errors.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("order is missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("no stored access token; run `kitegate login` first")]
    NotAuthenticated,

    #[error("order parameters must be a JSON object: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Broker(#[from] BrokerError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, Error>;
