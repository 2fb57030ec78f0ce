//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root wiring settings into services
//! - [`config`] - Configuration and credential loading
//! - [`rolling`] - Size-rotated log file writer

pub mod bootstrap;
pub mod config;
pub mod rolling;
