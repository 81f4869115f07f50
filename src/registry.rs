//! Calculator Registry

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{calculators::Calculator, incentives::IncentiveType};

/// Errors raised while building a registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two calculators claimed the same incentive type.
    #[error("more than one calculator registered for {0}")]
    DuplicateIncentive(IncentiveType),
}

/// Maps each incentive type to the calculator that handles it.
#[derive(Debug, Clone)]
pub struct CalculatorRegistry {
    calculators: FxHashMap<IncentiveType, Calculator>,
}

impl CalculatorRegistry {
    /// Build a registry from an ordered list of calculators.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateIncentive`] if two calculators handle the same incentive
    /// type.
    pub fn new(calculators: impl IntoIterator<Item = Calculator>) -> Result<Self, RegistryError> {
        let mut map = FxHashMap::default();

        for calculator in calculators {
            let incentive = calculator.incentive();

            if map.insert(incentive, calculator).is_some() {
                return Err(RegistryError::DuplicateIncentive(incentive));
            }
        }

        Ok(Self { calculators: map })
    }

    /// Build a registry with a calculator for every known incentive type.
    pub fn standard() -> Self {
        Self {
            calculators: Calculator::ALL
                .into_iter()
                .map(|calculator| (calculator.incentive(), calculator))
                .collect(),
        }
    }

    /// Find the calculator for an incentive type.
    pub fn resolve(&self, incentive: IncentiveType) -> Option<&Calculator> {
        self.calculators.get(&incentive)
    }

    /// Number of registered calculators.
    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    /// Whether no calculators are registered.
    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    /// Iterate the registered calculators.
    pub fn iter(&self) -> impl Iterator<Item = (&IncentiveType, &Calculator)> {
        self.calculators.iter()
    }
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
