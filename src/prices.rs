//! Prices

use std::{ops::Deref, str::FromStr};

use rust_decimal::Decimal;

use crate::errors::ValidationError;

/// Cheapest price a product may have (0.01).
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Most expensive price a product may have (999.99).
pub const MAX_PRICE: Decimal = Decimal::from_parts(99_999, 0, 0, false, 2);

/// A unit price within `0.01..=999.99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    value: Decimal,
}

impl Price {
    /// Creates a new Price
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::PriceOutOfRange`] when `value` is outside the allowed bounds.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if (MIN_PRICE..=MAX_PRICE).contains(&value) {
            Ok(Price { value })
        } else {
            Err(ValidationError::PriceOutOfRange(value))
        }
    }

    /// Parses a price from decimal text such as `"1.99"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrice`] for text that is not a number, and
    /// [`ValidationError::PriceOutOfRange`] for numbers outside the allowed bounds.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let value = Decimal::from_str(text.trim())
            .map_err(|_err| ValidationError::InvalidPrice(text.to_string()))?;

        Self::new(value)
    }
}

impl Deref for Price {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
