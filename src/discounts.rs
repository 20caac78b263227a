//! Discounts
//!
//! Shared arithmetic for percentage based promotions and coupons. Percent values are held as
//! percent points (`20` means 20%) and only converted to a fractional [`Percentage`] at the
//! point of calculation.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};

/// Calculate `percent` percent of `amount`, exactly.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    Percentage::from(percent / Decimal::ONE_HUNDRED) * amount
}

/// Format an amount with exactly two decimals, rounding half away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    format!("{rounded:.2}")
}

/// Format percent points without trailing zeros, e.g. `20` or `12.5`.
pub fn format_percent(percent: Decimal) -> String {
    percent.normalize().to_string()
}
