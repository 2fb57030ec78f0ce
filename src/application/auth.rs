//! Token exchange flow: request token in, persisted access token out.
//!
//! The flow is linear and fail-fast. Credentials are loaded by the caller and
//! passed in; the login URL is built locally; the request token is exchanged
//! with one broker call; the resulting access token is written to the store.
//! A failed exchange returns before the store is touched, so a previously
//! stored token survives.

use tracing::info;

use crate::domain::{AccessToken, Credentials, RequestToken};
use crate::error::{BrokerError, Result};
use crate::port::{SessionBroker, TokenStore};

/// One-shot conversion of an interactive login into a stored access token.
pub struct TokenExchange<B, S> {
    credentials: Credentials,
    broker: B,
    store: S,
}

impl<B: SessionBroker, S: TokenStore> TokenExchange<B, S> {
    pub fn new(credentials: Credentials, broker: B, store: S) -> Self {
        Self {
            credentials,
            broker,
            store,
        }
    }

    /// Hosted login URL for this API key.
    #[must_use]
    pub fn login_url(&self) -> String {
        self.broker.login_url(self.credentials.api_key())
    }

    /// Exchange the request token and persist the resulting access token.
    ///
    /// The request token is consumed: it is single-use on the broker side.
    ///
    /// # Errors
    ///
    /// Returns the broker error unchanged if the exchange fails, or an error if
    /// the session carries an empty token or the store cannot be written.
    pub async fn exchange(&self, request_token: RequestToken) -> Result<AccessToken> {
        info!(api_key = %self.credentials.api_key(), "Exchanging request token");

        let session = self
            .broker
            .generate_session(&self.credentials, &request_token)
            .await?;

        if session.access_token.as_str().is_empty() {
            return Err(BrokerError::MissingField {
                field: "access_token",
            }
            .into());
        }

        self.store.write(&session.access_token)?;
        info!(
            user_id = session.user_id.as_deref().unwrap_or("unknown"),
            "Access token generated and saved"
        );

        Ok(session.access_token)
    }

    /// Token currently held by the store.
    #[must_use]
    pub fn stored_token(&self) -> Option<AccessToken> {
        self.store.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Session;
    use crate::error::Error;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Store that keeps the token in memory.
    #[derive(Default, Clone)]
    struct MemoryStore(Arc<Mutex<Option<AccessToken>>>);

    impl TokenStore for MemoryStore {
        fn read(&self) -> Option<AccessToken> {
            self.0.lock().clone()
        }

        fn write(&self, token: &AccessToken) -> Result<()> {
            *self.0.lock() = Some(token.clone());
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.0.lock() = None;
            Ok(())
        }
    }

    /// Broker returning a fixed outcome and recording what it was sent.
    struct ScriptedBroker {
        outcome: fn() -> Result<Session>,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedBroker {
        fn new(outcome: fn() -> Result<Session>) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SessionBroker for ScriptedBroker {
        fn login_url(&self, api_key: &str) -> String {
            format!("https://login.test/?v=3&api_key={api_key}")
        }

        async fn generate_session(
            &self,
            credentials: &Credentials,
            request_token: &RequestToken,
        ) -> Result<Session> {
            self.seen.lock().push(format!(
                "{}:{}:{}",
                credentials.api_key(),
                credentials.api_secret(),
                request_token.as_str()
            ));
            (self.outcome)()
        }
    }

    fn ok_session() -> Result<Session> {
        Ok(Session::new(AccessToken::new("TOK123")))
    }

    fn rejected() -> Result<Session> {
        Err(BrokerError::Api {
            status: 403,
            error_type: Some("TokenException".into()),
            message: "Token is invalid or has expired.".into(),
        }
        .into())
    }

    fn blank_session() -> Result<Session> {
        Ok(Session::new(AccessToken::new("   ")))
    }

    fn flow(
        outcome: fn() -> Result<Session>,
        store: MemoryStore,
    ) -> TokenExchange<ScriptedBroker, MemoryStore> {
        TokenExchange::new(
            Credentials::new("key", "secret"),
            ScriptedBroker::new(outcome),
            store,
        )
    }

    #[test]
    fn login_url_uses_api_key_only() {
        let flow = flow(ok_session, MemoryStore::default());
        assert_eq!(flow.login_url(), "https://login.test/?v=3&api_key=key");
    }

    #[tokio::test]
    async fn successful_exchange_persists_token() {
        let store = MemoryStore::default();
        let flow = flow(ok_session, store.clone());

        let token = flow
            .exchange(RequestToken::from_input("REQ").unwrap())
            .await
            .unwrap();

        assert_eq!(token.as_str(), "TOK123");
        assert_eq!(store.read().unwrap().as_str(), "TOK123");
        assert_eq!(flow.stored_token().unwrap().as_str(), "TOK123");
        assert_eq!(*flow.broker.seen.lock(), vec!["key:secret:REQ".to_string()]);
    }

    #[tokio::test]
    async fn failed_exchange_keeps_previous_token() {
        let store = MemoryStore::default();
        store.write(&AccessToken::new("OLD")).unwrap();
        let flow = flow(rejected, store.clone());

        let err = flow
            .exchange(RequestToken::from_input("REQ").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Broker(BrokerError::Api { status: 403, .. })));
        assert_eq!(store.read().unwrap().as_str(), "OLD");
    }

    #[tokio::test]
    async fn blank_access_token_is_not_stored() {
        let store = MemoryStore::default();
        let flow = flow(blank_session, store.clone());

        let err = flow
            .exchange(RequestToken::from_input("REQ").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Broker(BrokerError::MissingField {
                field: "access_token"
            })
        ));
        assert!(store.read().is_none());
    }
}
