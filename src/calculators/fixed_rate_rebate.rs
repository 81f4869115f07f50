//! Fixed Rate Rebate
//!
//! Pays a percentage of the product price for every unit of volume.

use rust_decimal::Decimal;

use crate::{
    calculation::CalculateRebateRequest, calculators::IncentiveCalculator,
    incentives::IncentiveType, products::Product, rebates::Rebate,
};

/// Fixed Rate Rebate Calculator
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FixedRateRebateCalculator;

impl IncentiveCalculator for FixedRateRebateCalculator {
    fn incentive(&self) -> IncentiveType {
        IncentiveType::FixedRateRebate
    }

    fn is_eligible(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> bool {
        product.supports(IncentiveType::FixedRateRebate)
            && !rebate.percentage.is_zero()
            && !product.price.is_zero()
            && !request.volume.is_zero()
    }

    fn calculate(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> Option<Decimal> {
        product
            .price
            .checked_mul(rebate.percentage)?
            .checked_mul(request.volume)
    }
}
