//! Rebates prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    calculation::{CalculateRebateRequest, CalculateRebateResult, FailureReason},
    calculators::{
        AmountPerUomCalculator, Calculator, FixedCashAmountCalculator, FixedRateRebateCalculator,
        IncentiveCalculator,
    },
    data::{
        DataStoreError, InMemoryProductStore, InMemoryRebateStore, ProductDataStore,
        RebateDataStore, StoredCalculation,
    },
    fixtures::{Fixture, FixtureError},
    incentives::{IncentiveType, SupportedIncentives},
    products::Product,
    rebates::Rebate,
    registry::{CalculatorRegistry, RegistryError},
    service::RebateService,
};
