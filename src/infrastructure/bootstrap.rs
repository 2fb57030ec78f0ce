//! Composition root: wires settings into application services.

use crate::adapter::outbound::kite::KiteClient;
use crate::adapter::outbound::store::FileTokenStore;
use crate::application::{OrderDesk, TokenExchange};
use crate::error::Result;
use crate::infrastructure::config::credentials;
use crate::infrastructure::config::settings::Settings;

/// Token store at the configured path.
#[must_use]
pub fn token_store(settings: &Settings) -> FileTokenStore {
    FileTokenStore::new(&settings.token_file)
}

/// Login flow backed by Kite Connect and the token file.
///
/// # Errors
///
/// Fails if the env file is missing or lacks either credential.
pub fn token_exchange(settings: &Settings) -> Result<TokenExchange<KiteClient, FileTokenStore>> {
    let credentials = credentials::load(&settings.env_file)?;
    Ok(TokenExchange::new(
        credentials,
        KiteClient::new(&settings.kite),
        token_store(settings),
    ))
}

/// Order desk backed by Kite Connect and the token file.
///
/// # Errors
///
/// Fails if the env file is missing or lacks either credential.
pub fn order_desk(settings: &Settings) -> Result<OrderDesk<KiteClient, FileTokenStore>> {
    let credentials = credentials::load(&settings.env_file)?;
    Ok(OrderDesk::new(
        credentials.api_key(),
        KiteClient::new(&settings.kite),
        token_store(settings),
    ))
}
