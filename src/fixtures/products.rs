//! Product Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_decimal},
    incentives::IncentiveType,
    products::Product,
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product identifier -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product price (e.g., "2.99")
    pub price: String,

    /// Accepted incentive types
    #[serde(default)]
    pub supported_incentives: Vec<IncentiveType>,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        Ok(Product::new(
            parse_decimal(&fixture.price)?,
            fixture.supported_incentives.into_iter().collect(),
        ))
    }
}
