//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod auth;
pub mod order;

pub use auth::TokenExchange;
pub use order::{OrderDesk, DEFAULT_VARIETY};
