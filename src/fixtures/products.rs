//! Product Fixtures

use std::str::FromStr;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    prices::Price,
    products::Product,
    promotions::{Promotion, get_one_free::GetOneFree, package::Package, threshold::Threshold},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product name -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

impl ProductsFixture {
    /// Convert every entry into a [`Product`], sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if any price or promotion is invalid.
    pub fn try_into_products(self) -> Result<Vec<Product>, FixtureError> {
        let mut products = self
            .products
            .into_iter()
            .map(|(name, fixture)| fixture.try_into_product(name))
            .collect::<Result<Vec<_>, _>>()?;

        products.sort_by(|a, b| a.name().cmp(b.name()));

        Ok(products)
    }
}

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Unit price, e.g. `"0.79"`
    pub price: String,

    /// Promotion, none when omitted
    #[serde(default)]
    pub promotion: PromotionFixture,
}

impl ProductFixture {
    /// Convert to a [`Product`] called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name, price or promotion is invalid.
    pub fn try_into_product(self, name: String) -> Result<Product, FixtureError> {
        let price = Price::parse(&self.price)?;
        let promotion = Promotion::try_from(self.promotion)?;

        Ok(Product::new(name, price, promotion)?)
    }
}

/// Promotion fixture from YAML
#[derive(Debug, Default, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionFixture {
    /// No promotion
    #[default]
    None,

    /// Every nth unit free
    GetOneFree {
        /// Units per group, including the free one
        every: u32,
    },

    /// Percentage off complete packages
    Package {
        /// Units per package
        size: u32,

        /// Discount in percent points, e.g. `"20"`
        percent: String,
    },

    /// Percentage off units past a threshold
    Threshold {
        /// Units charged in full
        after: u32,

        /// Discount in percent points, e.g. `"12.5"`
        percent: String,
    },
}

impl TryFrom<PromotionFixture> for Promotion {
    type Error = FixtureError;

    fn try_from(fixture: PromotionFixture) -> Result<Self, Self::Error> {
        let promotion = match fixture {
            PromotionFixture::None => Promotion::None,
            PromotionFixture::GetOneFree { every } => GetOneFree::new(every)?.into(),
            PromotionFixture::Package { size, percent } => {
                Package::new(size, parse_percent(&percent)?)?.into()
            }
            PromotionFixture::Threshold { after, percent } => {
                Threshold::new(after, parse_percent(&percent)?)?.into()
            }
        };

        Ok(promotion)
    }
}

/// Parse percent points such as `"20"` or `"12.5"`.
pub(crate) fn parse_percent(percent: &str) -> Result<Decimal, FixtureError> {
    Decimal::from_str(percent.trim())
        .map_err(|_err| FixtureError::InvalidPercentage(percent.to_string()))
}
