//! Fixtures
//!
//! Load rebates and products from YAML files into the in-memory data stores.

use std::{fs, path::PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    data::{InMemoryProductStore, InMemoryRebateStore},
    fixtures::{products::ProductsFixture, rebates::RebatesFixture},
};

pub mod products;
pub mod rebates;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid decimal format
    #[error("Invalid decimal format: {0}")]
    InvalidDecimal(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    rebates: InMemoryRebateStore,
    products: InMemoryProductStore,
}

impl Fixture {
    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            rebates: InMemoryRebateStore::new(),
            products: InMemoryProductStore::new(),
        }
    }

    /// Load rebates from `<base>/rebates/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a decimal field is malformed.
    pub fn load_rebates(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("rebates").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: RebatesFixture = serde_norway::from_str(&contents)?;

        for (identifier, rebate_fixture) in fixture.rebates {
            self.rebates.insert(identifier, rebate_fixture.try_into()?);
        }

        Ok(self)
    }

    /// Load products from `<base>/products/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a decimal field is malformed.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for (identifier, product_fixture) in fixture.products {
            self.products
                .insert(identifier, product_fixture.try_into()?);
        }

        Ok(self)
    }

    /// Return the loaded rebates
    pub fn rebate_store(&self) -> &InMemoryRebateStore {
        &self.rebates
    }

    /// Return the loaded products
    pub fn product_store(&self) -> &InMemoryProductStore {
        &self.products
    }

    /// Consume the fixture, returning both stores
    pub fn into_stores(self) -> (InMemoryRebateStore, InMemoryProductStore) {
        (self.rebates, self.products)
    }
}

/// Parse a decimal string (e.g., "19.99" or "-2")
///
/// # Errors
///
/// Returns [`FixtureError::InvalidDecimal`] if the string is not a decimal number.
pub fn parse_decimal(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidDecimal(s.to_string()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use testresult::TestResult;

    use crate::{
        data::{ProductDataStore, RebateDataStore},
        incentives::{IncentiveType, SupportedIncentives},
        products::Product,
        rebates::Rebate,
    };

    use super::*;

    fn write_fixture(dir: &TempDir, kind: &str, contents: &str) -> TestResult {
        let kind_dir = dir.path().join(kind);

        fs::create_dir_all(&kind_dir)?;
        fs::write(kind_dir.join("test.yml"), contents)?;

        Ok(())
    }

    #[test]
    fn parse_decimal_accepts_fractions_and_negatives() -> TestResult {
        assert_eq!(parse_decimal("19.99")?, Decimal::new(1999, 2));
        assert_eq!(parse_decimal(" -2 ")?, Decimal::from(-2));

        Ok(())
    }

    #[test]
    fn parse_decimal_rejects_garbage() {
        let result = parse_decimal("ten");

        assert!(matches!(result, Err(FixtureError::InvalidDecimal(value)) if value == "ten"));
    }

    #[test]
    fn load_rebates_and_products() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(
            &dir,
            "rebates",
            "rebates:\n  R1:\n    incentive: fixed_rate_rebate\n    percentage: \"0.1\"\n",
        )?;

        write_fixture(
            &dir,
            "products",
            "products:\n  P1:\n    price: \"200\"\n    supported_incentives: [fixed_rate_rebate]\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        fixture.load_rebates("test")?.load_products("test")?;

        assert_eq!(
            fixture.rebate_store().get_rebate("R1")?,
            Some(Rebate {
                incentive: IncentiveType::FixedRateRebate,
                amount: Decimal::ZERO,
                percentage: Decimal::new(1, 1),
            })
        );

        assert_eq!(
            fixture.product_store().get_product("P1")?,
            Some(Product::new(
                Decimal::from(200),
                SupportedIncentives::FIXED_RATE_REBATE
            ))
        );

        Ok(())
    }

    #[test]
    fn load_rebates_missing_file_is_io_error() {
        let mut fixture = Fixture::with_base_path("/definitely/not/here");

        assert!(matches!(
            fixture.load_rebates("nope"),
            Err(FixtureError::Io(_))
        ));
    }

    #[test]
    fn load_products_unknown_incentive_is_yaml_error() -> TestResult {
        let dir = TempDir::new()?;

        write_fixture(
            &dir,
            "products",
            "products:\n  P1:\n    price: \"1\"\n    supported_incentives: [buy_one_get_one]\n",
        )?;

        let mut fixture = Fixture::with_base_path(dir.path());

        assert!(matches!(
            fixture.load_products("test"),
            Err(FixtureError::Yaml(_))
        ));

        Ok(())
    }
}
