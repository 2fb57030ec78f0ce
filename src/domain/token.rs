//! Broker credentials produced and consumed by the login flow.
//!
//! - [`RequestToken`] is the short-lived value the broker hands back after the
//!   user logs in on the hosted page. It is consumed by value, exactly once.
//! - [`AccessToken`] is the long-lived value returned by the session exchange
//!   and kept in the token store between runs.

use std::fmt;

use url::Url;

use super::error::DomainError;

/// Query parameter carrying the request token in the broker's redirect URL.
const REQUEST_TOKEN_PARAM: &str = "request_token";

/// Long-lived credential authorizing API calls after login.
///
/// Always stored trimmed. `Debug` output is redacted so tokens never end up in
/// log lines by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a token from raw text, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    /// Parse stored text, returning `None` when nothing but whitespace remains.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let token = Self::new(value);
        (!token.0.is_empty()).then_some(token)
    }

    /// The raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked form for display: first and last four characters only.
    #[must_use]
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"<redacted>").finish()
    }
}

/// Short-lived, single-use credential obtained through the hosted login page.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestToken(String);

impl RequestToken {
    /// Build a request token from what the user pasted.
    ///
    /// Accepts either the bare token or the full redirect URL the broker sent
    /// the browser to, in which case the `request_token` query parameter is
    /// extracted.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyRequestToken`] when the input is blank.
    pub fn from_input(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();

        let value = Url::parse(trimmed)
            .ok()
            .and_then(|url| {
                url.query_pairs()
                    .find(|(key, _)| key == REQUEST_TOKEN_PARAM)
                    .map(|(_, value)| value.trim().to_string())
            })
            .unwrap_or_else(|| trimmed.to_string());

        if value.is_empty() {
            return Err(DomainError::EmptyRequestToken);
        }
        Ok(Self(value))
    }

    /// The raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RequestToken").field(&"<redacted>").finish()
    }
}

/// Result of a successful session exchange.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: AccessToken,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new(access_token: AccessToken) -> Self {
        Self {
            access_token,
            user_id: None,
            user_name: None,
        }
    }
}
