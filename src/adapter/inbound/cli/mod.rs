//! CLI module graph and command dispatch.

pub mod calc;
pub mod command;
pub mod login;
pub mod order;
pub mod output;
pub mod token;

use self::command::{CalcCommand, Commands, OrderCommand, TokenCommand};
use crate::error::Result;
use crate::infrastructure::config::settings::Settings;

/// Run a parsed subcommand against loaded settings.
pub async fn run(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Login => login::execute(settings).await,
        Commands::Token(TokenCommand::Show(args)) => token::show(settings, &args),
        Commands::Token(TokenCommand::Clear) => token::clear(settings),
        Commands::Order(OrderCommand::Validate(args)) => order::validate(&args),
        Commands::Order(OrderCommand::Place(args)) => order::place(settings, &args).await,
        Commands::Calc(CalcCommand::Risk {
            position_size,
            risk_percent,
        }) => calc::risk(position_size, risk_percent),
        Commands::Calc(CalcCommand::Value { quantity, price }) => calc::value(quantity, price),
    }
}
