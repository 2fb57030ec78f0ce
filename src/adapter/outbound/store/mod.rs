//! Token persistence adapters.

pub mod file;

pub use file::FileTokenStore;
