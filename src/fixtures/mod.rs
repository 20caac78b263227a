//! Fixtures
//!
//! Inventories and carts described in YAML. A fixture set `name` is made of three files under
//! the base path: `products/{name}.yml`, `coupons/{name}.yml` and `carts/{name}.yml`.

use std::{fs, path::PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartError},
    errors::{LookupError, ValidationError},
    fixtures::{carts::CartFixture, coupons::CouponsFixture, products::ProductsFixture},
    inventory::Inventory,
};

pub mod carts;
pub mod coupons;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Product or coupon failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Cart references an unknown coupon
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Cart line could not be added
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products and coupons loaded so far
    inventory: Inventory,

    /// Cart contents, replayed on demand
    cart: CartFixture,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            inventory: Inventory::new(),
            cart: CartFixture::default(),
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a product is invalid.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("products", name)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for product in fixture.try_into_products()? {
            self.inventory.register_product(product);
        }

        Ok(self)
    }

    /// Load coupons from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a coupon is invalid.
    pub fn load_coupons(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("coupons", name)?;
        let fixture: CouponsFixture = serde_norway::from_str(&contents)?;

        for coupon in fixture.try_into_coupons()? {
            self.inventory.register_coupon(coupon);
        }

        Ok(self)
    }

    /// Load cart contents from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let contents = self.read("carts", name)?;

        self.cart = serde_norway::from_str(&contents)?;

        Ok(self)
    }

    /// Load a complete fixture set by name from the default base path.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the set's files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in("./fixtures", name)
    }

    /// Load a complete fixture set by name from `base_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the set's files cannot be loaded.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture
            .load_products(name)?
            .load_coupons(name)?
            .load_cart(name)?;

        Ok(fixture)
    }

    /// Inventory built from the loaded products and coupons
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Build a cart by replaying the loaded cart fixture against the inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if a line or the coupon cannot be applied.
    pub fn cart(&self) -> Result<Cart<'_>, FixtureError> {
        let mut cart = self.inventory.new_cart();

        for line in &self.cart.items {
            cart.add(&line.product, line.count)?;
        }

        if let Some(coupon) = &self.cart.coupon {
            cart.use_coupon(coupon)?;
        }

        Ok(cart)
    }

    fn read(&self, kind: &str, name: &str) -> Result<String, FixtureError> {
        let file_path = self.base_path.join(kind).join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "loading fixture");

        Ok(fs::read_to_string(&file_path)?)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
