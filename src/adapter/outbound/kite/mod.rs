//! Kite Connect broker adapter.

pub mod client;
mod types;

pub use client::{checksum, KiteClient};
