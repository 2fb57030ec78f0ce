//! Kite Connect response envelopes.
//!
//! Every Kite response is wrapped as
//! `{"status": "success", "data": {...}}` or
//! `{"status": "error", "message": "...", "error_type": "..."}`.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub status: String,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error_type: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// `data` of `POST /session/token`. Only the fields this crate reads.
#[derive(Debug, Deserialize)]
pub(crate) struct SessionData {
    pub access_token: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
}

/// `data` of `POST /orders/{variety}`.
#[derive(Debug, Deserialize)]
pub(crate) struct OrderData {
    pub order_id: Option<String>,
}
