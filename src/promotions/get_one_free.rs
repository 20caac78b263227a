//! Get One Free
//!
//! Buy `every - 1` units and the next one is free.

use std::num::NonZeroU32;

use rust_decimal::Decimal;

use crate::{errors::ValidationError, promotions::PromotionRule};

/// Every `every`th unit is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetOneFree {
    every: NonZeroU32,
}

impl GetOneFree {
    /// Create a new get-one-free promotion.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPromotion`] when `every` is zero.
    pub fn new(every: u32) -> Result<Self, ValidationError> {
        let every = NonZeroU32::new(every).ok_or_else(|| {
            ValidationError::InvalidPromotion("get_one_free needs a positive unit count".into())
        })?;

        Ok(Self { every })
    }

    /// Return the unit count, including the free one.
    pub fn every(self) -> u32 {
        self.every.get()
    }
}

impl PromotionRule for GetOneFree {
    fn discount_for(&self, price: Decimal, count: u32) -> Decimal {
        price * Decimal::from(count / self.every.get())
    }

    fn description(&self) -> String {
        format!("buy {}, get 1 free", self.every.get() - 1)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn every_nth_unit_is_free() -> TestResult {
        let promotion = GetOneFree::new(3)?;

        assert_eq!(
            promotion.discount_for(Decimal::new(10, 0), 9),
            Decimal::new(30, 0)
        );

        Ok(())
    }

    #[test]
    fn partial_groups_are_not_discounted() -> TestResult {
        let promotion = GetOneFree::new(3)?;
        let price = Decimal::new(199, 2);

        assert_eq!(promotion.discount_for(price, 2), Decimal::ZERO);
        assert_eq!(promotion.discount_for(price, 5), price);

        Ok(())
    }

    #[test]
    fn zero_unit_count_is_rejected() {
        assert!(matches!(
            GetOneFree::new(0),
            Err(ValidationError::InvalidPromotion(_))
        ));
    }

    #[test]
    fn description_counts_paid_units() -> TestResult {
        assert_eq!(GetOneFree::new(3)?.description(), "buy 2, get 1 free");
        assert_eq!(GetOneFree::new(1)?.description(), "buy 0, get 1 free");

        Ok(())
    }
}
