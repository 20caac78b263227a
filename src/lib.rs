//! Till
//!
//! Till is a small retail pricing engine: it prices a cart of products against per-product
//! promotions and a single cart-level coupon, then renders a fixed width invoice describing
//! the computation.

pub mod cart;
pub mod coupons;
pub mod discounts;
pub mod errors;
pub mod fixtures;
pub mod inventory;
pub mod invoice;
pub mod items;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod promotions;
pub mod utils;
