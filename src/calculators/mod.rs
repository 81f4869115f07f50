//! Calculators
//!
//! One calculator per incentive type. Each decides whether a rebate/product/request combination is
//! eligible and, if it is, how much the rebate pays.

use rust_decimal::Decimal;

use crate::{
    calculation::CalculateRebateRequest, incentives::IncentiveType, products::Product,
    rebates::Rebate,
};

pub mod amount_per_uom;
pub mod fixed_cash_amount;
pub mod fixed_rate_rebate;

pub use amount_per_uom::AmountPerUomCalculator;
pub use fixed_cash_amount::FixedCashAmountCalculator;
pub use fixed_rate_rebate::FixedRateRebateCalculator;

/// Eligibility and amount rules for a single incentive type.
pub trait IncentiveCalculator {
    /// The incentive type this calculator handles.
    fn incentive(&self) -> IncentiveType;

    /// Return whether the combination may be paid out.
    fn is_eligible(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> bool;

    /// Compute the rebate amount, or `None` if it does not fit in a [`Decimal`].
    ///
    /// Only meaningful once [`IncentiveCalculator::is_eligible`] has returned `true`; no checks are
    /// repeated here.
    fn calculate(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> Option<Decimal>;
}

/// Calculator enum
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Calculator {
    /// Fixed Cash Amount
    FixedCashAmount(FixedCashAmountCalculator),

    /// Fixed Rate Rebate
    FixedRateRebate(FixedRateRebateCalculator),

    /// Amount Per Unit of Measure
    AmountPerUom(AmountPerUomCalculator),
}

impl Calculator {
    /// The calculators for every known incentive type.
    pub const ALL: [Calculator; 3] = [
        Calculator::FixedCashAmount(FixedCashAmountCalculator),
        Calculator::FixedRateRebate(FixedRateRebateCalculator),
        Calculator::AmountPerUom(AmountPerUomCalculator),
    ];

    /// Return the incentive type the inner calculator handles.
    pub fn incentive(&self) -> IncentiveType {
        match self {
            Calculator::FixedCashAmount(fixed_cash) => fixed_cash.incentive(),
            Calculator::FixedRateRebate(fixed_rate) => fixed_rate.incentive(),
            Calculator::AmountPerUom(per_uom) => per_uom.incentive(),
        }
    }

    /// Return whether the combination is eligible.
    ///
    /// A missing rebate or product is never eligible.
    pub fn is_eligible(
        &self,
        rebate: Option<&Rebate>,
        product: Option<&Product>,
        request: &CalculateRebateRequest,
    ) -> bool {
        let (Some(rebate), Some(product)) = (rebate, product) else {
            return false;
        };

        match self {
            Calculator::FixedCashAmount(fixed_cash) => {
                fixed_cash.is_eligible(rebate, product, request)
            }
            Calculator::FixedRateRebate(fixed_rate) => {
                fixed_rate.is_eligible(rebate, product, request)
            }
            Calculator::AmountPerUom(per_uom) => per_uom.is_eligible(rebate, product, request),
        }
    }

    /// Compute the amount with the inner calculator. `None` means the amount overflowed.
    pub fn calculate(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> Option<Decimal> {
        match self {
            Calculator::FixedCashAmount(fixed_cash) => {
                fixed_cash.calculate(rebate, product, request)
            }
            Calculator::FixedRateRebate(fixed_rate) => {
                fixed_rate.calculate(rebate, product, request)
            }
            Calculator::AmountPerUom(per_uom) => per_uom.calculate(rebate, product, request),
        }
    }
}

impl From<FixedCashAmountCalculator> for Calculator {
    fn from(calculator: FixedCashAmountCalculator) -> Self {
        Calculator::FixedCashAmount(calculator)
    }
}

impl From<FixedRateRebateCalculator> for Calculator {
    fn from(calculator: FixedRateRebateCalculator) -> Self {
        Calculator::FixedRateRebate(calculator)
    }
}

impl From<AmountPerUomCalculator> for Calculator {
    fn from(calculator: AmountPerUomCalculator) -> Self {
        Calculator::AmountPerUom(calculator)
    }
}
