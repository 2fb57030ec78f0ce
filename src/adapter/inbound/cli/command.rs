//! Command-line interface definitions.
//!
//! Defines the CLI structure for the `kitegate` binary using `clap`. The
//! standalone `generate-token` binary takes no arguments and runs the same
//! flow as `kitegate login`.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::application::DEFAULT_VARIETY;
use crate::infrastructure::config::settings::DEFAULT_CONFIG_FILE;

/// Zerodha Kite Connect login, order gating and risk arithmetic
#[derive(Parser, Debug)]
#[command(name = "kitegate")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exchange a request token for an access token (interactive)
    Login,

    /// Inspect or remove the stored access token
    #[command(subcommand)]
    Token(TokenCommand),

    /// Validate or place orders
    #[command(subcommand)]
    Order(OrderCommand),

    /// Risk and position value arithmetic
    #[command(subcommand)]
    Calc(CalcCommand),
}

/// Subcommands for `kitegate token`.
#[derive(Subcommand, Debug)]
pub enum TokenCommand {
    /// Show the stored access token
    Show(TokenShowArgs),
    /// Delete the stored access token
    Clear,
}

/// Arguments for `kitegate token show`.
#[derive(Args, Debug)]
pub struct TokenShowArgs {
    /// Print the full token instead of a masked form
    #[arg(long)]
    pub reveal: bool,
}

/// Subcommands for `kitegate order`.
#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// Check that an order carries every required field
    Validate(OrderArgs),
    /// Validate and submit an order using the stored access token
    Place(PlaceArgs),
}

/// Order parameters given on the command line.
#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Order parameters as a JSON object, or `-` to read them from stdin
    pub params: String,
}

/// Arguments for `kitegate order place`.
#[derive(Args, Debug)]
pub struct PlaceArgs {
    #[command(flatten)]
    pub order: OrderArgs,

    /// Order variety (regular, amo, co, iceberg, auction)
    #[arg(long, default_value = DEFAULT_VARIETY)]
    pub variety: String,
}

/// Subcommands for `kitegate calc`.
#[derive(Subcommand, Debug)]
pub enum CalcCommand {
    /// Risk amount: position_size × risk_percent / 100
    #[command(allow_negative_numbers = true)]
    Risk {
        /// Position size in currency units
        position_size: Decimal,
        /// Risk percentage (2.0 means 2%)
        risk_percent: Decimal,
    },
    /// Position value: quantity × price
    #[command(allow_negative_numbers = true)]
    Value {
        /// Number of units
        quantity: Decimal,
        /// Price per unit
        price: Decimal,
    },
}
