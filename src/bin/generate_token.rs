//! Standalone login: prints the Kite login URL, reads the request token from
//! stdin and stores the resulting access token. Takes no arguments.

use kitegate::adapter::inbound::cli::login;
use kitegate::adapter::inbound::cli::output;
use kitegate::infrastructure::config::settings::{Settings, DEFAULT_CONFIG_FILE};
use tracing::error;

#[tokio::main]
async fn main() {
    let settings = match Settings::load_or_default(DEFAULT_CONFIG_FILE) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = settings.logging.init() {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = login::execute(&settings).await {
        error!(error = %e, "Authentication failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
