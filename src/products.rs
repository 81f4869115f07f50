//! Products

use rust_decimal::Decimal;

use crate::incentives::{IncentiveType, SupportedIncentives};

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product price
    pub price: Decimal,

    /// Incentive types this product accepts
    pub supported_incentives: SupportedIncentives,
}

impl Product {
    /// Create a new product.
    pub fn new(price: Decimal, supported_incentives: SupportedIncentives) -> Self {
        Self {
            price,
            supported_incentives,
        }
    }

    /// Return whether the product accepts the given incentive type.
    pub fn supports(&self, incentive: IncentiveType) -> bool {
        self.supported_incentives.contains(incentive)
    }
}
