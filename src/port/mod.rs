//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the login flow / order desk and the outside
//! world. Adapters in [`crate::adapter`] implement them against the Kite
//! Connect API and the local filesystem.

pub mod outbound;

pub use outbound::broker::{OrderGateway, SessionBroker};
pub use outbound::store::TokenStore;
