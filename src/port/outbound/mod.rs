//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the broker API and token persistence.

pub mod broker;
pub mod store;
