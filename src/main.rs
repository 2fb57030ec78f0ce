use clap::Parser;
use kitegate::adapter::inbound::cli::command::Cli;
use kitegate::adapter::inbound::cli::output::{self, OutputConfig};
use kitegate::adapter::inbound::cli::run;
use kitegate::infrastructure::config::settings::Settings;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let settings = match Settings::load_or_default(&cli.config) {
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

    if let Err(e) = run(cli.command, &settings).await {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
