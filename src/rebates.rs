//! Rebates

use rust_decimal::Decimal;

use crate::incentives::IncentiveType;

/// Rebate
///
/// A read-only snapshot of a rebate record. The identifier used to look it up is not part of the
/// entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Rebate {
    /// Payout mechanism
    pub incentive: IncentiveType,

    /// Fixed amount, used by [`IncentiveType::FixedCashAmount`] and [`IncentiveType::AmountPerUom`]
    pub amount: Decimal,

    /// Percentage of the product price, used by [`IncentiveType::FixedRateRebate`]
    pub percentage: Decimal,
}

impl Rebate {
    /// Create a rebate paying a fixed cash amount.
    pub fn fixed_cash_amount(amount: Decimal) -> Self {
        Self {
            incentive: IncentiveType::FixedCashAmount,
            amount,
            percentage: Decimal::ZERO,
        }
    }

    /// Create a rebate paying a percentage of the product price per unit.
    pub fn fixed_rate_rebate(percentage: Decimal) -> Self {
        Self {
            incentive: IncentiveType::FixedRateRebate,
            amount: Decimal::ZERO,
            percentage,
        }
    }

    /// Create a rebate paying a fixed amount per unit of measure.
    pub fn amount_per_uom(amount: Decimal) -> Self {
        Self {
            incentive: IncentiveType::AmountPerUom,
            amount,
            percentage: Decimal::ZERO,
        }
    }
}
