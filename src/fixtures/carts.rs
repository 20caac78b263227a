//! Cart Fixtures

use serde::Deserialize;

/// Cart contents in YAML
#[derive(Debug, Default, Deserialize)]
pub struct CartFixture {
    /// Lines, added in order
    #[serde(default)]
    pub items: Vec<CartLineFixture>,

    /// Coupon to use, if any
    #[serde(default)]
    pub coupon: Option<String>,
}

/// A single `Cart::add` call
#[derive(Debug, Deserialize)]
pub struct CartLineFixture {
    /// Product name
    pub product: String,

    /// Units to add
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    1
}
