//! Coupons
//!
//! Cart-level discounts, applied once to the subtotal after promotions.

use rust_decimal::Decimal;

use crate::{
    discounts::{format_amount, format_percent, percent_of},
    errors::ValidationError,
};

/// Coupon enum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Coupon {
    /// No coupon applied.
    #[default]
    None,

    /// Percentage off the subtotal.
    Percent {
        /// Coupon name
        name: String,

        /// Discount in percent points, within `0..=100`
        percent: Decimal,
    },

    /// Fixed amount off the subtotal, never more than the subtotal itself.
    Amount {
        /// Coupon name
        name: String,

        /// Amount taken off
        amount: Decimal,
    },
}

impl Coupon {
    /// Create a percentage coupon.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCoupon`] when `percent` is outside `0..=100`.
    pub fn percent(name: impl Into<String>, percent: Decimal) -> Result<Self, ValidationError> {
        if !(Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&percent) {
            return Err(ValidationError::InvalidCoupon(format!(
                "percent {percent} is outside 0..=100"
            )));
        }

        Ok(Coupon::Percent {
            name: name.into(),
            percent,
        })
    }

    /// Create a fixed amount coupon.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCoupon`] when `amount` is negative.
    pub fn amount(name: impl Into<String>, amount: Decimal) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() {
            return Err(ValidationError::InvalidCoupon(format!(
                "amount {amount} is negative"
            )));
        }

        Ok(Coupon::Amount {
            name: name.into(),
            amount,
        })
    }

    /// Return the coupon name, empty for [`Coupon::None`].
    pub fn name(&self) -> &str {
        match self {
            Coupon::None => "",
            Coupon::Percent { name, .. } | Coupon::Amount { name, .. } => name,
        }
    }

    /// Discount on a cart whose post-promotion subtotal is `subtotal`.
    pub fn discount_for(&self, subtotal: Decimal) -> Decimal {
        match self {
            Coupon::None => Decimal::ZERO,
            Coupon::Percent { percent, .. } => percent_of(subtotal, *percent),
            Coupon::Amount { amount, .. } => subtotal.min(*amount),
        }
    }

    /// Human readable summary, or `None` when there is nothing to describe.
    pub fn description(&self) -> Option<String> {
        match self {
            Coupon::None => None,
            Coupon::Percent { percent, .. } => Some(format!("{}% off", format_percent(*percent))),
            Coupon::Amount { amount, .. } => Some(format!("{} off", format_amount(*amount))),
        }
    }
}
