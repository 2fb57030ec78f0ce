//! Kitegate - Zerodha Kite Connect login, order gating and risk arithmetic.
//!
//! # Architecture
//!
//! - [`domain`] - Credentials, tokens, order parameters and the decimal risk
//!   calculators. No I/O.
//! - [`port`] - Traits the application layer depends on: the broker session
//!   and order endpoints, and the single-slot token store.
//! - [`application`] - The login flow ([`application::TokenExchange`]) and the
//!   order gate ([`application::OrderDesk`]).
//! - [`adapter`] - Kite Connect HTTP client, file token store, and the CLI.
//! - [`infrastructure`] - Settings, credentials loading, logging with a
//!   size-rotated file, and wiring.
//!
//! # Example
//!
//! ```
//! use kitegate::domain::{calculate_position_value, calculate_risk};
//!
//! assert_eq!(calculate_risk(10000.0, 2.0), 200.0);
//! assert_eq!(calculate_position_value(100, 1550.75), 155075.0);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
