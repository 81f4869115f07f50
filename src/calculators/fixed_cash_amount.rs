//! Fixed Cash Amount
//!
//! Pays the rebate's fixed amount once, whatever the volume.

use rust_decimal::Decimal;

use crate::{
    calculation::CalculateRebateRequest, calculators::IncentiveCalculator,
    incentives::IncentiveType, products::Product, rebates::Rebate,
};

/// Fixed Cash Amount Calculator
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FixedCashAmountCalculator;

impl IncentiveCalculator for FixedCashAmountCalculator {
    fn incentive(&self) -> IncentiveType {
        IncentiveType::FixedCashAmount
    }

    fn is_eligible(
        &self,
        rebate: &Rebate,
        product: &Product,
        _request: &CalculateRebateRequest,
    ) -> bool {
        product.supports(IncentiveType::FixedCashAmount) && !rebate.amount.is_zero()
    }

    fn calculate(
        &self,
        rebate: &Rebate,
        _product: &Product,
        _request: &CalculateRebateRequest,
    ) -> Option<Decimal> {
        Some(rebate.amount)
    }
}
