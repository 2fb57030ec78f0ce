//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Command-line entry points
//! - [`outbound`] - Kite Connect client and token file store

pub mod inbound;
pub mod outbound;
