//! Items

use rust_decimal::Decimal;

use crate::{errors::ValidationError, products::Product};

/// Exclusive upper bound for the quantity of a single cart line.
pub const QUANTITY_LIMIT: u32 = 100;

/// One cart line: a product borrowed from the inventory and how many units of it.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem<'a> {
    product: &'a Product,
    quantity: u32,
}

impl<'a> CartItem<'a> {
    /// Creates a new, empty line for `product`.
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            quantity: 0,
        }
    }

    /// Returns the product of the line
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Returns the number of units on the line
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Quantity the line would hold after adding `count` units.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::QuantityLimit`] when the result would reach
    /// [`QUANTITY_LIMIT`].
    pub fn checked_increase(&self, count: u32) -> Result<u32, ValidationError> {
        self.quantity
            .checked_add(count)
            .filter(|quantity| *quantity < QUANTITY_LIMIT)
            .ok_or_else(|| ValidationError::QuantityLimit {
                product: self.product.name().to_string(),
                current: self.quantity,
                requested: count,
            })
    }

    /// Add `count` units to the line.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::QuantityLimit`] when the line would reach
    /// [`QUANTITY_LIMIT`], leaving the quantity unchanged.
    pub fn increase(&mut self, count: u32) -> Result<(), ValidationError> {
        self.quantity = self.checked_increase(count)?;

        Ok(())
    }

    /// Price of the line after the product's promotion.
    pub fn price(&self) -> Decimal {
        self.product.price_for(self.quantity)
    }

    /// Price of the line before the product's promotion.
    pub fn price_without_discount(&self) -> Decimal {
        self.product.price_without_discount_for(self.quantity)
    }

    /// Promotion discount on the line.
    pub fn discount(&self) -> Decimal {
        self.product.discount_for(self.quantity)
    }
}
