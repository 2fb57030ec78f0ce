//! Order desk: gates order parameters before they reach the broker.

use tracing::{info, warn};

use crate::domain::{validate_order_params, OrderId, OrderParams};
use crate::error::{OrderError, Result};
use crate::port::{OrderGateway, TokenStore};

/// Default Kite order variety.
pub const DEFAULT_VARIETY: &str = "regular";

/// Validates orders, attaches the stored access token, and forwards them.
pub struct OrderDesk<G, S> {
    api_key: String,
    gateway: G,
    store: S,
}

impl<G: OrderGateway, S: TokenStore> OrderDesk<G, S> {
    pub fn new(api_key: impl Into<String>, gateway: G, store: S) -> Self {
        Self {
            api_key: api_key.into(),
            gateway,
            store,
        }
    }

    /// Submit one order.
    ///
    /// # Errors
    ///
    /// - [`OrderError::MissingFields`] when required fields are absent; the
    ///   broker is not contacted.
    /// - [`OrderError::NotAuthenticated`] when no access token is stored.
    /// - Any gateway error, unchanged.
    pub async fn place(&self, variety: &str, params: &OrderParams) -> Result<OrderId> {
        if !validate_order_params(params) {
            let missing = params.missing_fields();
            warn!(missing = ?missing, "Order rejected before submission");
            return Err(OrderError::MissingFields(missing).into());
        }

        let access_token = self.store.read().ok_or(OrderError::NotAuthenticated)?;

        let order_id = self
            .gateway
            .place_order(&self.api_key, &access_token, variety, params)
            .await?;

        info!(order_id = %order_id, variety, "Order placed");
        Ok(order_id)
    }
}
