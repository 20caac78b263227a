//! Threshold
//!
//! A percentage discount on every unit bought after the first `after` units.

use rust_decimal::Decimal;

use crate::{
    discounts::{format_percent, percent_of},
    errors::ValidationError,
    promotions::PromotionRule,
    utils::as_ordinal,
};

/// `percent`% off every unit beyond the first `after`, however many there are.
///
/// `percent` is given in percent points and must lie in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    after: u32,
    percent: Decimal,
}

impl Threshold {
    /// Create a new threshold promotion.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPromotion`] when `percent` is outside `0..=100`.
    pub fn new(after: u32, percent: Decimal) -> Result<Self, ValidationError> {
        if !(Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&percent) {
            return Err(ValidationError::InvalidPromotion(format!(
                "threshold percent {percent} is outside 0..=100"
            )));
        }

        Ok(Self { after, percent })
    }

    /// Return the number of full price units.
    pub fn after(&self) -> u32 {
        self.after
    }

    /// Return the discount in percent points.
    pub fn percent(&self) -> Decimal {
        self.percent
    }
}

impl PromotionRule for Threshold {
    fn discount_for(&self, price: Decimal, count: u32) -> Decimal {
        let discounted_units = Decimal::from(count.saturating_sub(self.after));

        percent_of(price * discounted_units, self.percent)
    }

    fn description(&self) -> String {
        format!(
            "{}% off of every after the {}",
            format_percent(self.percent),
            as_ordinal(self.after)
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn discounts_units_past_the_threshold() -> TestResult {
        let promotion = Threshold::new(2, Decimal::new(10, 0))?;

        assert_eq!(
            promotion.discount_for(Decimal::new(10, 0), 5),
            Decimal::new(3, 0)
        );

        Ok(())
    }

    #[test]
    fn at_or_below_threshold_has_no_discount() -> TestResult {
        let promotion = Threshold::new(10, Decimal::new(50, 0))?;
        let price = Decimal::new(1, 0);

        assert_eq!(promotion.discount_for(price, 0), Decimal::ZERO);
        assert_eq!(promotion.discount_for(price, 10), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn negative_percent_is_rejected() {
        assert!(matches!(
            Threshold::new(3, Decimal::new(-5, 0)),
            Err(ValidationError::InvalidPromotion(_))
        ));
    }

    #[test]
    fn percent_above_one_hundred_is_rejected() -> TestResult {
        assert!(matches!(
            Threshold::new(3, Decimal::new(101, 0)),
            Err(ValidationError::InvalidPromotion(_))
        ));
        assert_eq!(Threshold::new(3, Decimal::ONE_HUNDRED)?.percent(), Decimal::ONE_HUNDRED);

        Ok(())
    }

    #[test]
    fn every_unit_past_threshold_is_discounted() -> TestResult {
        let promotion = Threshold::new(2, Decimal::new(10, 0))?;

        assert_eq!(
            promotion.discount_for(Decimal::new(10, 0), 99),
            Decimal::new(97, 0)
        );

        Ok(())
    }

    #[test]
    fn description_uses_ordinal_threshold() -> TestResult {
        assert_eq!(
            Threshold::new(10, Decimal::new(50, 0))?.description(),
            "50% off of every after the 10th"
        );
        assert_eq!(
            Threshold::new(2, Decimal::new(5, 0))?.description(),
            "5% off of every after the 2nd"
        );

        Ok(())
    }
}
