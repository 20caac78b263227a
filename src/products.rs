//! Products

use rust_decimal::Decimal;

use crate::{errors::ValidationError, prices::Price, promotions::Promotion};

/// Longest product name, in characters.
pub const MAX_NAME_LENGTH: usize = 40;

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    price: Price,
    promotion: Promotion,
}

impl Product {
    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameTooLong`] when `name` has more than
    /// [`MAX_NAME_LENGTH`] characters.
    pub fn new(
        name: impl Into<String>,
        price: Price,
        promotion: Promotion,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let length = name.chars().count();

        if length > MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong { name, length });
        }

        Ok(Self {
            name,
            price,
            promotion,
        })
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Price {
        self.price
    }

    /// Promotion attached to this product
    pub fn promotion(&self) -> &Promotion {
        &self.promotion
    }

    /// Price of `count` units after the promotion.
    pub fn price_for(&self, count: u32) -> Decimal {
        self.price_without_discount_for(count) - self.discount_for(count)
    }

    /// Price of `count` units before the promotion.
    pub fn price_without_discount_for(&self, count: u32) -> Decimal {
        *self.price * Decimal::from(count)
    }

    /// Promotion discount on `count` units.
    pub fn discount_for(&self, count: u32) -> Decimal {
        self.promotion.discount_for(*self.price, count)
    }
}
