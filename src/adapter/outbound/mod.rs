//! Outbound adapters (driven side).

pub mod kite;
pub mod store;
