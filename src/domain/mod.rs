//! Broker-agnostic domain logic.

pub mod credentials;
pub mod error;
pub mod order;
pub mod risk;
pub mod token;

pub use credentials::Credentials;
pub use order::{validate_order_params, OrderId, OrderParams, REQUIRED_ORDER_FIELDS};
pub use risk::{calculate_position_value, calculate_risk, position_value, risk_amount};
pub use token::{AccessToken, RequestToken, Session};
