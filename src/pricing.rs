//! Pricing

use rust_decimal::Decimal;

use crate::items::CartItem;

/// Calculates the total price of a list of cart lines, after promotions.
pub fn total_price(items: &[CartItem<'_>]) -> Decimal {
    items.iter().map(CartItem::price).sum()
}

/// Calculates the total promotion discount of a list of cart lines.
pub fn total_discount(items: &[CartItem<'_>]) -> Decimal {
    items.iter().map(CartItem::discount).sum()
}
