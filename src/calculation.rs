//! Calculation requests and results

use std::fmt;

use rust_decimal::Decimal;

use crate::incentives::IncentiveType;

/// A request to calculate one rebate.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateRebateRequest {
    /// Identifier used to look up the rebate
    pub rebate_identifier: String,

    /// Identifier used to look up the product
    pub product_identifier: String,

    /// Quantity of units
    pub volume: Decimal,
}

impl CalculateRebateRequest {
    /// Create a new request.
    pub fn new(
        rebate_identifier: impl Into<String>,
        product_identifier: impl Into<String>,
        volume: Decimal,
    ) -> Self {
        Self {
            rebate_identifier: rebate_identifier.into(),
            product_identifier: product_identifier.into(),
            volume,
        }
    }
}

/// Why a calculation did not produce an amount.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// No rebate exists for the requested identifier.
    RebateNotFound,

    /// No product exists for the requested identifier.
    ProductNotFound,

    /// No calculator is registered for the rebate's incentive type.
    UnsupportedIncentive(IncentiveType),

    /// The calculator rejected the rebate/product/request combination.
    NotEligible(IncentiveType),

    /// The amount is outside the range a `Decimal` can hold.
    AmountOverflow(IncentiveType),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::RebateNotFound => f.write_str("rebate not found"),
            FailureReason::ProductNotFound => f.write_str("product not found"),
            FailureReason::UnsupportedIncentive(incentive) => {
                write!(f, "no calculator registered for {incentive}")
            }
            FailureReason::NotEligible(incentive) => {
                write!(f, "not eligible for {incentive}")
            }
            FailureReason::AmountOverflow(incentive) => {
                write!(f, "{incentive} amount overflowed")
            }
        }
    }
}

/// The outcome of a calculation.
///
/// `success` is true only when an amount was computed and handed to persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculateRebateResult {
    /// Whether an amount was computed and stored
    pub success: bool,

    /// The stored amount, present on success
    pub amount: Option<Decimal>,

    /// The failing step, present on failure
    pub failure: Option<FailureReason>,
}

impl CalculateRebateResult {
    /// A successful result for the stored amount.
    pub fn succeeded(amount: Decimal) -> Self {
        Self {
            success: true,
            amount: Some(amount),
            failure: None,
        }
    }

    /// A failed result.
    pub fn failed(reason: FailureReason) -> Self {
        Self {
            success: false,
            amount: None,
            failure: Some(reason),
        }
    }
}
