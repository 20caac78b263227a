//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    coupons::Coupon,
    errors::{LookupError, ValidationError},
    fixtures::{Fixture, FixtureError},
    inventory::Inventory,
    invoice::{Invoice, InvoiceError, InvoiceRow},
    items::CartItem,
    prices::Price,
    products::Product,
    promotions::{
        Promotion, PromotionRule, get_one_free::GetOneFree, package::Package,
        threshold::Threshold,
    },
    utils::as_ordinal,
};
