//! Cart

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    coupons::Coupon,
    errors::{LookupError, ValidationError},
    inventory::Inventory,
    invoice::Invoice,
    items::CartItem,
    pricing::{total_discount, total_price},
};

/// Coupon applied to carts that have not used one.
static NO_COUPON: Coupon = Coupon::None;

/// Errors related to filling a cart.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Invalid count or quantity.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown product or coupon.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Cart
///
/// Lines are kept in the order their product was first added. Products and coupons are
/// borrowed from the inventory the cart was created from.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    inventory: &'a Inventory,
    items: Vec<CartItem<'a>>,
    coupon: &'a Coupon,
}

impl<'a> Cart<'a> {
    /// Create an empty cart resolving names against `inventory`.
    pub fn new(inventory: &'a Inventory) -> Self {
        Cart {
            inventory,
            items: Vec::new(),
            coupon: &NO_COUPON,
        }
    }

    /// Add `count` units of the named product.
    ///
    /// A failed add leaves the cart untouched.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NonPositiveCount`] when `count` is zero.
    /// - [`LookupError::ProductNotFound`] when the product is not in the inventory.
    /// - [`ValidationError::QuantityLimit`] when the line would reach 100 units.
    pub fn add(&mut self, product_name: &str, count: u32) -> Result<(), CartError> {
        if count == 0 {
            return Err(ValidationError::NonPositiveCount.into());
        }

        let product = self.inventory.get_product(product_name)?;

        match self
            .items
            .iter_mut()
            .find(|item| item.product().name() == product.name())
        {
            Some(item) => item.increase(count)?,
            None => {
                let mut item = CartItem::new(product);
                item.increase(count)?;

                self.items.push(item);
            }
        }

        debug!(product = product_name, count, "added to cart");

        Ok(())
    }

    /// Apply the named coupon, replacing any coupon used before.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::CouponNotFound`] when the coupon is not in the inventory.
    pub fn use_coupon(&mut self, coupon_name: &str) -> Result<(), LookupError> {
        self.coupon = self.inventory.get_coupon(coupon_name)?;

        debug!(coupon = coupon_name, "used coupon");

        Ok(())
    }

    /// Cart lines in the order they were first added.
    pub fn items(&self) -> &[CartItem<'a>] {
        &self.items
    }

    /// The coupon in use, [`Coupon::None`] if there is none.
    pub fn coupon(&self) -> &'a Coupon {
        self.coupon
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line prices after promotions, before the coupon.
    pub fn total_without_coupon_discount(&self) -> Decimal {
        total_price(&self.items)
    }

    /// Discount granted by the coupon.
    pub fn coupon_discount(&self) -> Decimal {
        self.coupon
            .discount_for(self.total_without_coupon_discount())
    }

    /// Total owed after promotions and coupon.
    pub fn total(&self) -> Decimal {
        let subtotal = self.total_without_coupon_discount();
        let total = subtotal - self.coupon.discount_for(subtotal);

        trace!(%subtotal, %total, "computed cart total");

        total
    }

    /// Everything saved, promotions and coupon together.
    pub fn total_discount(&self) -> Decimal {
        total_discount(&self.items) + self.coupon_discount()
    }

    /// Render the invoice for the cart as text.
    pub fn invoice(&self) -> String {
        Invoice::from_cart(self).render()
    }
}
