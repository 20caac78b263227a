//! Coupon Fixtures

use std::str::FromStr;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    coupons::Coupon,
    errors::ValidationError,
    fixtures::{FixtureError, products::parse_percent},
};

/// Wrapper for coupons in YAML
#[derive(Debug, Deserialize)]
pub struct CouponsFixture {
    /// Map of coupon name -> coupon fixture
    pub coupons: FxHashMap<String, CouponFixture>,
}

impl CouponsFixture {
    /// Convert every entry into a [`Coupon`], sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if any coupon is invalid.
    pub fn try_into_coupons(self) -> Result<Vec<Coupon>, FixtureError> {
        let mut coupons = self
            .coupons
            .into_iter()
            .map(|(name, fixture)| fixture.try_into_coupon(name))
            .collect::<Result<Vec<_>, _>>()?;

        coupons.sort_by(|a, b| a.name().cmp(b.name()));

        Ok(coupons)
    }
}

/// Coupon fixture from YAML
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CouponFixture {
    /// Percent points off the subtotal
    Percent {
        /// Percent points, e.g. `"20"`
        value: String,
    },

    /// Fixed amount off the subtotal
    Amount {
        /// Amount, e.g. `"5.00"`
        value: String,
    },
}

impl CouponFixture {
    /// Convert to a [`Coupon`] called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the percent or amount is invalid.
    pub fn try_into_coupon(self, name: String) -> Result<Coupon, FixtureError> {
        let coupon = match self {
            CouponFixture::Percent { value } => Coupon::percent(name, parse_percent(&value)?)?,
            CouponFixture::Amount { value } => {
                let amount = Decimal::from_str(value.trim())
                    .map_err(|_err| ValidationError::InvalidCoupon(value.clone()))?;

                Coupon::amount(name, amount)?
            }
        };

        Ok(coupon)
    }
}
