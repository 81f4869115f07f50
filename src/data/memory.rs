//! In-memory data stores

use std::sync::RwLock;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{
    data::{DataStoreError, ProductDataStore, RebateDataStore},
    products::Product,
    rebates::Rebate,
};

/// A persisted calculation result.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCalculation {
    /// The rebate the amount was calculated for
    pub rebate: Rebate,

    /// The calculated amount
    pub amount: Decimal,
}

/// Rebates held in memory, with an append-only log of stored calculations.
#[derive(Debug, Default)]
pub struct InMemoryRebateStore {
    rebates: FxHashMap<String, Rebate>,
    calculations: RwLock<Vec<StoredCalculation>>,
}

impl InMemoryRebateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a rebate.
    pub fn insert(&mut self, identifier: impl Into<String>, rebate: Rebate) -> &mut Self {
        self.rebates.insert(identifier.into(), rebate);

        self
    }

    /// Builder form of [`InMemoryRebateStore::insert`].
    #[must_use]
    pub fn with_rebate(mut self, identifier: impl Into<String>, rebate: Rebate) -> Self {
        self.insert(identifier, rebate);

        self
    }

    /// Number of rebates held.
    pub fn len(&self) -> usize {
        self.rebates.len()
    }

    /// Whether no rebates are held.
    pub fn is_empty(&self) -> bool {
        self.rebates.is_empty()
    }

    /// Snapshot of every stored calculation, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`DataStoreError::Poisoned`] if a writer panicked while holding the log.
    pub fn stored_calculations(&self) -> Result<Vec<StoredCalculation>, DataStoreError> {
        let calculations = self
            .calculations
            .read()
            .map_err(|_poisoned| DataStoreError::Poisoned)?;

        Ok(calculations.clone())
    }
}

impl RebateDataStore for InMemoryRebateStore {
    fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>, DataStoreError> {
        Ok(self.rebates.get(identifier).cloned())
    }

    fn store_calculation_result(
        &self,
        rebate: &Rebate,
        amount: Decimal,
    ) -> Result<(), DataStoreError> {
        let mut calculations = self
            .calculations
            .write()
            .map_err(|_poisoned| DataStoreError::Poisoned)?;

        calculations.push(StoredCalculation {
            rebate: rebate.clone(),
            amount,
        });

        Ok(())
    }
}

/// Products held in memory.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: FxHashMap<String, Product>,
}

impl InMemoryProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a product.
    pub fn insert(&mut self, identifier: impl Into<String>, product: Product) -> &mut Self {
        self.products.insert(identifier.into(), product);

        self
    }

    /// Builder form of [`InMemoryProductStore::insert`].
    #[must_use]
    pub fn with_product(mut self, identifier: impl Into<String>, product: Product) -> Self {
        self.insert(identifier, product);

        self
    }

    /// Number of products held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether no products are held.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductDataStore for InMemoryProductStore {
    fn get_product(&self, identifier: &str) -> Result<Option<Product>, DataStoreError> {
        Ok(self.products.get(identifier).cloned())
    }
}
