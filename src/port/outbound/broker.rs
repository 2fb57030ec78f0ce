//! Broker ports: session exchange and order placement.
//!
//! The broker is an opaque external dependency. These traits describe the two
//! things the rest of the crate needs from it, so the login flow and the order
//! desk can be exercised against fakes.

use async_trait::async_trait;

use crate::domain::{AccessToken, Credentials, OrderId, OrderParams, RequestToken, Session};
use crate::error::Result;

/// Turns a request token into a session.
///
/// # Errors
///
/// [`generate_session`](Self::generate_session) fails on transport errors,
/// broker rejections, or a response without an access token. Callers treat
/// every failure as fatal; implementations must not retry.
#[async_trait]
pub trait SessionBroker: Send + Sync {
    /// Hosted login URL the user must visit. Pure, no network call.
    fn login_url(&self, api_key: &str) -> String;

    /// Exchange a single-use request token for a session.
    async fn generate_session(
        &self,
        credentials: &Credentials,
        request_token: &RequestToken,
    ) -> Result<Session>;
}

/// Submits orders on behalf of an authenticated user.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Place an order and return the broker's identifier for it.
    ///
    /// `variety` selects the order variety (`regular`, `amo`, ...).
    async fn place_order(
        &self,
        api_key: &str,
        access_token: &AccessToken,
        variety: &str,
        params: &OrderParams,
    ) -> Result<OrderId>;
}
