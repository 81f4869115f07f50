//! Amount Per Unit of Measure
//!
//! Pays the rebate's fixed amount for every unit of volume.

use rust_decimal::Decimal;

use crate::{
    calculation::CalculateRebateRequest, calculators::IncentiveCalculator,
    incentives::IncentiveType, products::Product, rebates::Rebate,
};

/// Amount Per Unit of Measure Calculator
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AmountPerUomCalculator;

impl IncentiveCalculator for AmountPerUomCalculator {
    fn incentive(&self) -> IncentiveType {
        IncentiveType::AmountPerUom
    }

    fn is_eligible(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> bool {
        product.supports(IncentiveType::AmountPerUom)
            && !rebate.amount.is_zero()
            && !request.volume.is_zero()
    }

    fn calculate(
        &self,
        rebate: &Rebate,
        _product: &Product,
        request: &CalculateRebateRequest,
    ) -> Option<Decimal> {
        rebate.amount.checked_mul(request.volume)
    }
}
