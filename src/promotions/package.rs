//! Package
//!
//! A percentage discount on every complete package of `size` units. Units left over after
//! the last complete package are charged in full.

use std::num::NonZeroU32;

use rust_decimal::Decimal;

use crate::{
    discounts::{format_percent, percent_of},
    errors::ValidationError,
    promotions::PromotionRule,
};

/// `percent`% off every complete group of `size` units.
///
/// `percent` is given in percent points and must lie in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    size: NonZeroU32,
    percent: Decimal,
}

impl Package {
    /// Create a new package promotion.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPromotion`] when `size` is zero or `percent` is
    /// outside `0..=100`.
    pub fn new(size: u32, percent: Decimal) -> Result<Self, ValidationError> {
        let size = NonZeroU32::new(size).ok_or_else(|| {
            ValidationError::InvalidPromotion("package needs a positive size".into())
        })?;

        if !(Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&percent) {
            return Err(ValidationError::InvalidPromotion(format!(
                "package percent {percent} is outside 0..=100"
            )));
        }

        Ok(Self { size, percent })
    }

    /// Return the package size.
    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// Return the discount in percent points.
    pub fn percent(&self) -> Decimal {
        self.percent
    }
}

impl PromotionRule for Package {
    fn discount_for(&self, price: Decimal, count: u32) -> Decimal {
        let size = self.size.get();
        let packaged_units = Decimal::from(size) * Decimal::from(count / size);

        percent_of(price * packaged_units, self.percent)
    }

    fn description(&self) -> String {
        format!(
            "get {}% off for every {}",
            format_percent(self.percent),
            self.size
        )
    }
}
