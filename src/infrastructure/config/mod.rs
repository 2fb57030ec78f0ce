//! Infrastructure configuration modules.

pub mod credentials;
pub mod kite;
pub mod logging;
pub mod settings;
