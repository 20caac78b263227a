//! Promotions
//!
//! Per-product discount rules. Each product carries exactly one [`Promotion`]; the promotion
//! is asked for the discount on `count` units at the product's unit price.

use rust_decimal::Decimal;

use crate::promotions::{get_one_free::GetOneFree, package::Package, threshold::Threshold};

pub mod get_one_free;
pub mod package;
pub mod threshold;

/// Discount computation shared by every promotion type.
pub trait PromotionRule {
    /// Discount on `count` units priced at `price` each.
    fn discount_for(&self, price: Decimal, count: u32) -> Decimal;

    /// Human readable summary, as printed on the invoice.
    fn description(&self) -> String;
}

/// Promotion enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Promotion {
    /// No promotion, the discount is always zero.
    #[default]
    None,

    /// Every nth unit is free.
    GetOneFree(GetOneFree),

    /// Percentage off every complete package of units.
    Package(Package),

    /// Percentage off every unit past a threshold.
    Threshold(Threshold),
}

impl Promotion {
    /// Discount on `count` units priced at `price` each.
    pub fn discount_for(&self, price: Decimal, count: u32) -> Decimal {
        match self {
            Promotion::None => Decimal::ZERO,
            Promotion::GetOneFree(get_one_free) => get_one_free.discount_for(price, count),
            Promotion::Package(package) => package.discount_for(price, count),
            Promotion::Threshold(threshold) => threshold.discount_for(price, count),
        }
    }

    /// Human readable summary, or `None` when there is nothing to describe.
    pub fn description(&self) -> Option<String> {
        match self {
            Promotion::None => None,
            Promotion::GetOneFree(get_one_free) => Some(get_one_free.description()),
            Promotion::Package(package) => Some(package.description()),
            Promotion::Threshold(threshold) => Some(threshold.description()),
        }
    }
}

impl From<GetOneFree> for Promotion {
    fn from(promotion: GetOneFree) -> Self {
        Promotion::GetOneFree(promotion)
    }
}

impl From<Package> for Promotion {
    fn from(promotion: Package) -> Self {
        Promotion::Package(promotion)
    }
}

impl From<Threshold> for Promotion {
    fn from(promotion: Threshold) -> Self {
        Promotion::Threshold(promotion)
    }
}
