//! Handlers for `kitegate calc`.

use rust_decimal::Decimal;

use super::output;
use crate::domain::error::DomainError;
use crate::domain::{position_value, risk_amount};
use crate::error::Result;

pub fn risk(position_size: Decimal, risk_percent: Decimal) -> Result<()> {
    let amount = risk_amount(position_size, risk_percent)
        .ok_or(DomainError::Overflow { operation: "risk" })?;
    output::field("Risk amount", amount.normalize());
    Ok(())
}

pub fn value(quantity: Decimal, price: Decimal) -> Result<()> {
    let value = position_value(quantity, price).ok_or(DomainError::Overflow {
        operation: "position value",
    })?;
    output::field("Position value", value.normalize());
    Ok(())
}
