//! Data Stores
//!
//! The collaborators the rebate service reads rebates and products from, and hands calculated
//! amounts to.

use mockall::automock;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{products::Product, rebates::Rebate};

pub mod memory;

pub use memory::{InMemoryProductStore, InMemoryRebateStore, StoredCalculation};

/// Unexpected data store faults.
///
/// A record that does not exist is not a fault; lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum DataStoreError {
    /// The backing store could not be reached.
    #[error("data store unavailable: {0}")]
    Unavailable(String),

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("data store lock poisoned")]
    Poisoned,
}

/// Rebate lookups and calculation result persistence.
#[automock]
pub trait RebateDataStore: Send + Sync {
    /// Retrieve a rebate by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`DataStoreError`] if the store fails; a missing rebate is `Ok(None)`.
    fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>, DataStoreError>;

    /// Persist a calculated amount for a rebate.
    ///
    /// # Errors
    ///
    /// Returns a [`DataStoreError`] if the store fails.
    fn store_calculation_result(
        &self,
        rebate: &Rebate,
        amount: Decimal,
    ) -> Result<(), DataStoreError>;
}

/// Product lookups.
#[automock]
pub trait ProductDataStore: Send + Sync {
    /// Retrieve a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`DataStoreError`] if the store fails; a missing product is `Ok(None)`.
    fn get_product(&self, identifier: &str) -> Result<Option<Product>, DataStoreError>;
}
