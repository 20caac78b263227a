//! Errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Input that breaks one of the documented constraints.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Product name longer than the allowed number of characters.
    #[error("product name {name:?} is {length} characters long, the limit is 40")]
    NameTooLong {
        /// Offending name
        name: String,

        /// Name length in characters
        length: usize,
    },

    /// Product price outside `0.01..=999.99`.
    #[error("price {0} is outside of 0.01..=999.99")]
    PriceOutOfRange(Decimal),

    /// Price text that is not a decimal number.
    #[error("invalid price format: {0}")]
    InvalidPrice(String),

    /// `Cart::add` called with a zero count.
    #[error("count must be positive")]
    NonPositiveCount,

    /// Adding would take a cart line to 100 units or more.
    #[error("cannot add {requested} x {product}: line already holds {current}, limit is 99")]
    QuantityLimit {
        /// Product name of the cart line
        product: String,

        /// Quantity currently on the line
        current: u32,

        /// Quantity that was being added
        requested: u32,
    },

    /// Promotion parameters that can never produce a discount.
    #[error("invalid promotion: {0}")]
    InvalidPromotion(String),

    /// Coupon parameters that would increase the total.
    #[error("invalid coupon: {0}")]
    InvalidCoupon(String),
}

/// A name that is not registered in the inventory.
#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    /// No product with this name.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// No coupon with this name.
    #[error("coupon not found: {0}")]
    CouponNotFound(String),
}
