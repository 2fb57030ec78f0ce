//! Risk sizing and position value arithmetic.
//!
//! All intermediate math happens in [`Decimal`] so results such as
//! `100 × 1550.75` come out exact. The `f64` entry points convert their inputs
//! through the shortest decimal text form (what a user would have typed) and
//! convert back only at the boundary.
//!
//! Inputs are not bounds checked: a negative risk percentage yields a negative
//! risk amount.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Risk amount for a position: `position_size × risk_percent / 100`.
///
/// Returns `None` if the result does not fit in a [`Decimal`].
#[must_use]
pub fn risk_amount(position_size: Decimal, risk_percent: Decimal) -> Option<Decimal> {
    position_size
        .checked_mul(risk_percent)?
        .checked_div(Decimal::ONE_HUNDRED)
}

/// Total value of a position: `quantity × price`.
///
/// Returns `None` if the result does not fit in a [`Decimal`].
#[must_use]
pub fn position_value(quantity: Decimal, price: Decimal) -> Option<Decimal> {
    quantity.checked_mul(price)
}

/// Risk amount in currency units for the given position size and percentage.
///
/// ```
/// use kitegate::domain::risk::calculate_risk;
///
/// assert_eq!(calculate_risk(10000, 2.0), 200.0);
/// assert_eq!(calculate_risk(50000, 1.5), 750.0);
/// ```
#[must_use]
pub fn calculate_risk(position_size: impl Into<f64>, risk_percent: impl Into<f64>) -> f64 {
    let position_size = position_size.into();
    let risk_percent = risk_percent.into();

    decimal_binary(position_size, risk_percent, risk_amount)
        .unwrap_or(position_size * risk_percent / 100.0)
}

/// Position value for the given quantity and unit price.
///
/// ```
/// use kitegate::domain::risk::calculate_position_value;
///
/// assert_eq!(calculate_position_value(100, 1550.75), 155075.0);
/// assert_eq!(calculate_position_value(50, 2420.50), 121025.0);
/// ```
#[must_use]
pub fn calculate_position_value(quantity: impl Into<f64>, price: impl Into<f64>) -> f64 {
    let quantity = quantity.into();
    let price = price.into();

    decimal_binary(quantity, price, position_value).unwrap_or(quantity * price)
}

/// Run `op` in decimal space. `None` when either input has no decimal form
/// (NaN, infinities, magnitudes past the decimal range) or `op` overflows.
fn decimal_binary(
    lhs: f64,
    rhs: f64,
    op: fn(Decimal, Decimal) -> Option<Decimal>,
) -> Option<f64> {
    op(to_decimal(lhs)?, to_decimal(rhs)?)?.to_f64()
}

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn risk_matches_documented_examples() {
        assert_eq!(calculate_risk(10000, 2.0), 200.0);
        assert_eq!(calculate_risk(50000, 1.5), 750.0);
    }

    #[test]
    fn position_value_matches_documented_examples() {
        assert_eq!(calculate_position_value(100, 1550.75), 155_075.0);
        assert_eq!(calculate_position_value(50, 2420.50), 121_025.0);
    }

    #[test]
    fn decimal_path_avoids_binary_rounding() {
        // 0.1 * 3 in binary floats is 0.30000000000000004.
        assert_eq!(calculate_position_value(3, 0.1), 0.3);
        assert_eq!(calculate_risk(0.7, 10.0), 0.07);
    }

    #[test]
    fn risk_is_linear_in_position_size() {
        let rates = [0.5, 1.0, 1.5, 2.0, 2.75, 10.0];
        let sizes = [1.0, 99.99, 1234.56, 10_000.0, 50_000.0, 987_654.32];
        for &r in &rates {
            for &p in &sizes {
                assert_eq!(
                    calculate_risk(2.0 * p, r),
                    2.0 * calculate_risk(p, r),
                    "p={p} r={r}"
                );
            }
        }
    }

    #[test]
    fn negative_and_zero_inputs_pass_through() {
        assert_eq!(calculate_risk(10000, -2.0), -200.0);
        assert_eq!(calculate_risk(0, 2.0), 0.0);
        assert_eq!(calculate_position_value(-10, 25.5), -255.0);
    }

    #[test]
    fn non_finite_inputs_fall_back_to_float_math() {
        assert!(calculate_risk(f64::NAN, 2.0).is_nan());
        assert_eq!(calculate_position_value(f64::INFINITY, 2.0), f64::INFINITY);
    }

    #[test]
    fn decimal_entry_points_are_exact() {
        assert_eq!(risk_amount(dec!(10000), dec!(2.0)), Some(dec!(200)));
        assert_eq!(position_value(dec!(100), dec!(1550.75)), Some(dec!(155075.00)));
    }

    #[test]
    fn decimal_overflow_is_reported() {
        assert_eq!(position_value(Decimal::MAX, dec!(2)), None);
        assert_eq!(risk_amount(Decimal::MAX, dec!(200)), None);
    }
}
