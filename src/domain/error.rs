//! Domain validation errors.
//!
//! Returned when user-supplied values cannot form a valid domain type, or when
//! exact decimal arithmetic leaves the representable range.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request token pasted by the user was blank.
    #[error("request token cannot be empty")]
    EmptyRequestToken,

    /// A decimal computation exceeded the representable range.
    #[error("decimal overflow while computing {operation}")]
    Overflow {
        /// The calculation that overflowed.
        operation: &'static str,
    },
}
