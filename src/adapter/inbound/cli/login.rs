//! Interactive login: request token in, stored access token out.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use tracing::info;

use super::output;
use crate::domain::RequestToken;
use crate::error::{Error, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Settings;

const PROMPT: &str = "Enter the request token from the redirect URL";

/// Run the login flow end to end.
///
/// Blocks until the user supplies a request token. Every failure is returned
/// to the caller, which exits non-zero.
pub async fn execute(settings: &Settings) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    info!("Starting authentication process");

    let flow = bootstrap::token_exchange(settings)?;

    let login_url = flow.login_url();
    info!(url = %login_url, "Please visit this URL to login");
    output::field("Login URL", &login_url);

    let request_token = RequestToken::from_input(&prompt_request_token()?)?;
    let access_token = flow.exchange(request_token).await?;

    info!("Authentication completed successfully");
    output::success(&format!(
        "Access token {} saved to {}",
        access_token.masked(),
        settings.token_file.display()
    ));
    Ok(())
}

/// Read one line from the user. Uses an interactive prompt on a terminal and a
/// plain line read when stdin is piped.
fn prompt_request_token() -> Result<String> {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        return Input::<String>::new()
            .with_prompt(PROMPT)
            .interact_text()
            .map_err(|e| Error::Prompt(e.to_string()));
    }

    eprint!("{PROMPT}: ");
    io::stderr().flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Err(Error::Prompt(
            "stdin closed before a request token was entered".to_string(),
        ));
    }
    Ok(line)
}
