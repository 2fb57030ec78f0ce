//! Handlers for `kitegate order`.

use std::io::{self, Read};

use super::command::{OrderArgs, PlaceArgs};
use super::output;
use crate::domain::{validate_order_params, OrderParams};
use crate::error::{OrderError, Result};
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Settings;

/// Report whether the order carries every required field.
///
/// # Errors
///
/// Returns [`OrderError::MissingFields`] for an incomplete order so the
/// process exits non-zero.
pub fn validate(args: &OrderArgs) -> Result<()> {
    let params = parse_params(&args.params)?;

    if !validate_order_params(&params) {
        return Err(OrderError::MissingFields(params.missing_fields()).into());
    }

    output::success(&format!("Order has all required fields ({params})"));
    Ok(())
}

/// Validate and submit an order with the stored access token.
pub async fn place(settings: &Settings, args: &PlaceArgs) -> Result<()> {
    let params = parse_params(&args.order.params)?;
    let desk = bootstrap::order_desk(settings)?;

    let order_id = desk.place(&args.variety, &params).await?;

    output::field("Order ID", &order_id);
    output::success("Order placed");
    Ok(())
}

/// Parse a JSON object from the argument, or from stdin for `-`.
fn parse_params(raw: &str) -> Result<OrderParams> {
    let text = if raw == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        raw.to_string()
    };

    serde_json::from_str(&text).map_err(|e| OrderError::Malformed(e.to_string()).into())
}
