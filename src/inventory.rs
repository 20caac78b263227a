//! Inventory
//!
//! Registry of the products and coupons a shop sells. Carts borrow the inventory they were
//! created from, so registration is only possible while no cart is alive.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{
    cart::Cart,
    coupons::Coupon,
    errors::{LookupError, ValidationError},
    prices::Price,
    products::Product,
    promotions::Promotion,
};

/// Inventory
#[derive(Debug, Default)]
pub struct Inventory {
    products: FxHashMap<String, Product>,
    coupons: FxHashMap<String, Coupon>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product, replacing any product with the same name.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the price text or name is invalid. The inventory is
    /// left unchanged in that case.
    pub fn register(
        &mut self,
        name: &str,
        price: &str,
        promotion: Promotion,
    ) -> Result<&Product, ValidationError> {
        let product = Product::new(name, Price::parse(price)?, promotion)?;

        Ok(self.register_product(product))
    }

    /// Register an already constructed product, replacing any product with the same name.
    pub fn register_product(&mut self, product: Product) -> &Product {
        match self.products.entry(product.name().to_string()) {
            Entry::Occupied(mut entry) => {
                debug!(product = %entry.key(), price = %*product.price(), "replaced product");

                entry.insert(product);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!(product = %entry.key(), price = %*product.price(), "registered product");

                entry.insert(product)
            }
        }
    }

    /// Register a coupon under its own name, replacing any coupon with the same name.
    pub fn register_coupon(&mut self, coupon: Coupon) {
        let name = coupon.name().to_string();
        let replaced = self.coupons.contains_key(&name);

        debug!(coupon = %name, replaced, "registered coupon");

        self.coupons.insert(name, coupon);
    }

    /// Look up a product by name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ProductNotFound`] if no product has this name.
    pub fn get_product(&self, name: &str) -> Result<&Product, LookupError> {
        self.products
            .get(name)
            .ok_or_else(|| LookupError::ProductNotFound(name.to_string()))
    }

    /// Look up a coupon by name.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::CouponNotFound`] if no coupon has this name.
    pub fn get_coupon(&self, name: &str) -> Result<&Coupon, LookupError> {
        self.coupons
            .get(name)
            .ok_or_else(|| LookupError::CouponNotFound(name.to_string()))
    }

    /// Whether a product with this name is registered.
    pub fn contains_product(&self, name: &str) -> bool {
        self.products.contains_key(name)
    }

    /// Number of registered products.
    pub fn products(&self) -> usize {
        self.products.len()
    }

    /// Number of registered coupons.
    pub fn coupons(&self) -> usize {
        self.coupons.len()
    }

    /// Create an empty cart that resolves names against this inventory.
    pub fn new_cart(&self) -> Cart<'_> {
        Cart::new(self)
    }
}
