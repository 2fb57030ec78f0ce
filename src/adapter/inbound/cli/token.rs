//! Handlers for `kitegate token`.

use tracing::info;

use super::command::TokenShowArgs;
use super::output;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Settings;
use crate::port::TokenStore;

/// Show the stored token. A missing token is reported, not treated as failure.
pub fn show(settings: &Settings, args: &TokenShowArgs) -> Result<()> {
    let store = bootstrap::token_store(settings);

    match store.read() {
        Some(token) => {
            let shown = if args.reveal {
                token.as_str().to_string()
            } else {
                token.masked()
            };
            output::field("Access token", shown);
            output::field("Token file", store.path().display());
        }
        None => {
            output::warning(&format!(
                "No access token stored at {}",
                store.path().display()
            ));
            output::hint("run `kitegate login` to create one");
        }
    }
    Ok(())
}

/// Remove the stored token.
pub fn clear(settings: &Settings) -> Result<()> {
    let store = bootstrap::token_store(settings);
    store.clear()?;
    info!(path = %store.path().display(), "Access token cleared");
    output::success("Access token cleared");
    Ok(())
}
