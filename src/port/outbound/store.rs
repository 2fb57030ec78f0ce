//! Persistence port for the access token.

use crate::domain::AccessToken;
use crate::error::Result;

/// Single-slot storage for one access token.
///
/// There is no history: each write replaces the previous token. Concurrent
/// writers are not supported.
pub trait TokenStore: Send + Sync {
    /// Return the stored token, or `None` if nothing usable is stored.
    ///
    /// Absence is a normal first-run state, never an error.
    fn read(&self) -> Option<AccessToken>;

    /// Replace the stored token.
    fn write(&self, token: &AccessToken) -> Result<()>;

    /// Remove the stored token. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;
}
