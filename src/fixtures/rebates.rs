//! Rebate Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, parse_decimal},
    incentives::IncentiveType,
    rebates::Rebate,
};

/// Wrapper for rebates in YAML
#[derive(Debug, Deserialize)]
pub struct RebatesFixture {
    /// Map of rebate identifier -> rebate fixture
    pub rebates: FxHashMap<String, RebateFixture>,
}

/// Rebate Fixture
#[derive(Debug, Deserialize)]
pub struct RebateFixture {
    /// Incentive type (e.g., `fixed_cash_amount`)
    pub incentive: IncentiveType,

    /// Fixed amount (e.g., "100.00")
    #[serde(default)]
    pub amount: Option<String>,

    /// Percentage as a fraction (e.g., "0.1" for 10%)
    #[serde(default)]
    pub percentage: Option<String>,
}

impl TryFrom<RebateFixture> for Rebate {
    type Error = FixtureError;

    fn try_from(fixture: RebateFixture) -> Result<Self, Self::Error> {
        Ok(Rebate {
            incentive: fixture.incentive,
            amount: optional_decimal(fixture.amount.as_deref())?,
            percentage: optional_decimal(fixture.percentage.as_deref())?,
        })
    }
}

fn optional_decimal(value: Option<&str>) -> Result<Decimal, FixtureError> {
    value.map_or(Ok(Decimal::ZERO), parse_decimal)
}
