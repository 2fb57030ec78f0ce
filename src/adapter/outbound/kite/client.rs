//! Kite Connect v3 REST client.
//!
//! Implements [`SessionBroker`] and [`OrderGateway`] against the Kite Connect
//! HTTP API. Requests are form-encoded and carry the `X-Kite-Version` header;
//! authenticated calls add `Authorization: token {api_key}:{access_token}`.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::types::{Envelope, OrderData, SessionData};
use crate::domain::{AccessToken, Credentials, OrderId, OrderParams, RequestToken, Session};
use crate::error::{BrokerError, Result};
use crate::infrastructure::config::kite::KiteConfig;
use crate::port::{OrderGateway, SessionBroker};

/// API version sent with every request and in the login URL.
const KITE_VERSION: &str = "3";

/// Header carrying the API version.
const VERSION_HEADER: &str = "X-Kite-Version";

/// Longest slice of a non-JSON error body kept in error messages.
const MAX_ERROR_BODY: usize = 200;

/// Kite Connect API client.
#[derive(Debug, Clone)]
pub struct KiteClient {
    client: Client,
    login_url: String,
    api_url: String,
}

impl KiteClient {
    #[must_use]
    pub fn new(config: &KiteConfig) -> Self {
        Self::with_urls(&config.login_url, &config.api_url)
    }

    /// Create a client with explicit endpoints.
    pub fn with_urls(login_url: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            login_url: login_url.into(),
            api_url: api_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path)
    }
}

/// Session checksum: hex SHA-256 of `api_key + request_token + api_secret`.
#[must_use]
pub fn checksum(api_key: &str, request_token: &str, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    hasher.update(request_token.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Unwrap a Kite envelope, mapping every failure shape onto [`BrokerError`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<Envelope<T>>(&body) {
        Ok(envelope) if status.is_success() && envelope.is_success() => envelope
            .data
            .ok_or_else(|| BrokerError::MissingField { field: "data" }.into()),
        Ok(envelope) => Err(BrokerError::Api {
            status: status.as_u16(),
            message: envelope
                .message
                .unwrap_or_else(|| format!("status {}", envelope.status)),
            error_type: envelope.error_type,
        }
        .into()),
        Err(e) if status.is_success() => Err(e.into()),
        Err(_) => Err(BrokerError::Api {
            status: status.as_u16(),
            error_type: None,
            message: body.chars().take(MAX_ERROR_BODY).collect(),
        }
        .into()),
    }
}

#[async_trait]
impl SessionBroker for KiteClient {
    fn login_url(&self, api_key: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("v", KITE_VERSION)
            .append_pair("api_key", api_key)
            .finish();
        format!("{}?{query}", self.login_url)
    }

    async fn generate_session(
        &self,
        credentials: &Credentials,
        request_token: &RequestToken,
    ) -> Result<Session> {
        let checksum = checksum(
            credentials.api_key(),
            request_token.as_str(),
            credentials.api_secret(),
        );
        let form = [
            ("api_key", credentials.api_key()),
            ("request_token", request_token.as_str()),
            ("checksum", checksum.as_str()),
        ];

        let url = self.endpoint("session/token");
        debug!(url = %url, "Requesting session");

        let response = self
            .client
            .post(&url)
            .header(VERSION_HEADER, KITE_VERSION)
            .form(&form)
            .send()
            .await?;

        let data: SessionData = decode(response).await?;
        let access_token = data
            .access_token
            .as_deref()
            .and_then(AccessToken::parse)
            .ok_or(BrokerError::MissingField {
                field: "access_token",
            })?;

        Ok(Session {
            access_token,
            user_id: data.user_id,
            user_name: data.user_name,
        })
    }
}

#[async_trait]
impl OrderGateway for KiteClient {
    async fn place_order(
        &self,
        api_key: &str,
        access_token: &AccessToken,
        variety: &str,
        params: &OrderParams,
    ) -> Result<OrderId> {
        let url = self.endpoint(&format!("orders/{variety}"));
        debug!(url = %url, params = %params, "Placing order");

        let response = self
            .client
            .post(&url)
            .header(VERSION_HEADER, KITE_VERSION)
            .header(
                AUTHORIZATION,
                format!("token {api_key}:{}", access_token.as_str()),
            )
            .form(&params.form_fields())
            .send()
            .await?;

        let data: OrderData = decode(response).await?;
        data.order_id
            .filter(|id| !id.is_empty())
            .map(OrderId::new)
            .ok_or_else(|| BrokerError::MissingField { field: "order_id" }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> KiteClient {
        KiteClient::with_urls("https://kite.zerodha.com/connect/login", server.uri())
    }

    fn credentials() -> Credentials {
        Credentials::new("api_key_1", "api_secret_1")
    }

    // ==================== Pure helpers ====================

    #[test]
    fn checksum_is_sha256_of_concatenation() {
        assert_eq!(
            checksum("a", "b", "c"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn login_url_carries_version_and_key() {
        let client = KiteClient::with_urls(
            "https://kite.zerodha.com/connect/login",
            "https://api.kite.trade",
        );
        assert_eq!(
            client.login_url("abc123"),
            "https://kite.zerodha.com/connect/login?v=3&api_key=abc123"
        );
    }

    #[test]
    fn login_url_encodes_key() {
        let client = KiteClient::new(&KiteConfig::default());
        assert!(client.login_url("a b&c").ends_with("api_key=a+b%26c"));
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let client = KiteClient::with_urls("https://login", "https://api.kite.trade/");
        assert_eq!(
            client.endpoint("session/token"),
            "https://api.kite.trade/session/token"
        );
    }

    // ==================== Session exchange ====================

    #[tokio::test]
    async fn generate_session_success() {
        let server = MockServer::start().await;
        let expected_checksum = checksum("api_key_1", "REQ42", "api_secret_1");

        Mock::given(method("POST"))
            .and(path("/session/token"))
            .and(header("X-Kite-Version", "3"))
            .and(body_string_contains("api_key=api_key_1"))
            .and(body_string_contains("request_token=REQ42"))
            .and(body_string_contains(format!("checksum={expected_checksum}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": {
                    "user_id": "AB1234",
                    "user_name": "Test Trader",
                    "access_token": "TOK123"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = client_for(&server)
            .generate_session(&credentials(), &RequestToken::from_input("REQ42").unwrap())
            .await
            .unwrap();

        assert_eq!(session.access_token.as_str(), "TOK123");
        assert_eq!(session.user_id.as_deref(), Some("AB1234"));
    }

    #[tokio::test]
    async fn generate_session_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/session/token"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "status": "error",
                "message": "Token is invalid or has expired.",
                "data": null,
                "error_type": "TokenException"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate_session(&credentials(), &RequestToken::from_input("REQ").unwrap())
            .await
            .unwrap_err();

        match err {
            Error::Broker(BrokerError::Api {
                status,
                error_type,
                message,
            }) => {
                assert_eq!(status, 403);
                assert_eq!(error_type.as_deref(), Some("TokenException"));
                assert!(message.contains("expired"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn generate_session_missing_access_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/session/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": { "user_id": "AB1234" }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate_session(&credentials(), &RequestToken::from_input("REQ").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Broker(BrokerError::MissingField {
                field: "access_token"
            })
        ));
    }

    #[tokio::test]
    async fn non_json_error_body_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/session/token"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate_session(&credentials(), &RequestToken::from_input("REQ").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Broker(BrokerError::Api { status: 502, .. })
        ));
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn malformed_success_body_is_json_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/session/token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate_session(&credentials(), &RequestToken::from_input("REQ").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Json(_)));
    }

    // ==================== Order placement ====================

    #[tokio::test]
    async fn place_order_sends_auth_and_form() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/orders/regular"))
            .and(header("X-Kite-Version", "3"))
            .and(header("Authorization", "token api_key_1:TOK"))
            .and(body_string_contains("tradingsymbol=INFY"))
            .and(body_string_contains("quantity=1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "data": { "order_id": "151220000000000" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = OrderParams::new()
            .with("tradingsymbol", "INFY")
            .with("quantity", 1)
            .with("transaction_type", "BUY")
            .with("order_type", "MARKET");

        let order_id = client_for(&server)
            .place_order("api_key_1", &AccessToken::new("TOK"), "regular", &params)
            .await
            .unwrap();

        assert_eq!(order_id.as_str(), "151220000000000");
    }

    #[tokio::test]
    async fn place_order_rejection_is_broker_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/orders/regular"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "status": "error",
                "message": "Insufficient funds.",
                "error_type": "MarginException"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .place_order(
                "api_key_1",
                &AccessToken::new("TOK"),
                "regular",
                &OrderParams::new(),
            )
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Insufficient funds."));
    }
}
