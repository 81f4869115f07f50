//! Incentives
//!
//! The payout mechanisms a rebate can declare, and the set of them a product accepts.

use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

use serde::Deserialize;

/// A rebate's payout mechanism.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveType {
    /// A fixed cash amount, independent of volume.
    FixedCashAmount,

    /// A percentage of the product price, per unit of volume.
    FixedRateRebate,

    /// A fixed amount per unit of measure.
    AmountPerUom,
}

impl IncentiveType {
    /// Every incentive type, in declaration order.
    pub const ALL: [IncentiveType; 3] = [
        IncentiveType::FixedCashAmount,
        IncentiveType::FixedRateRebate,
        IncentiveType::AmountPerUom,
    ];

    /// Return the snake case name used in fixtures and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            IncentiveType::FixedCashAmount => "fixed_cash_amount",
            IncentiveType::FixedRateRebate => "fixed_rate_rebate",
            IncentiveType::AmountPerUom => "amount_per_uom",
        }
    }

    /// Return the flag bit for this incentive type.
    const fn bit(self) -> u8 {
        match self {
            IncentiveType::FixedCashAmount => SupportedIncentives::FIXED_CASH_AMOUNT.0,
            IncentiveType::FixedRateRebate => SupportedIncentives::FIXED_RATE_REBATE.0,
            IncentiveType::AmountPerUom => SupportedIncentives::AMOUNT_PER_UOM.0,
        }
    }
}

impl fmt::Display for IncentiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of incentive types a product accepts.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct SupportedIncentives(u8);

impl SupportedIncentives {
    /// Fixed cash amount flag.
    pub const FIXED_CASH_AMOUNT: Self = Self(1);

    /// Fixed rate rebate flag.
    pub const FIXED_RATE_REBATE: Self = Self(1 << 1);

    /// Amount per unit of measure flag.
    pub const AMOUNT_PER_UOM: Self = Self(1 << 2);

    /// A set that supports no incentives.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// A set that supports every incentive.
    #[must_use]
    pub const fn all() -> Self {
        Self(Self::FIXED_CASH_AMOUNT.0 | Self::FIXED_RATE_REBATE.0 | Self::AMOUNT_PER_UOM.0)
    }

    /// Return the raw flag bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return whether the set includes the given incentive type.
    pub const fn contains(self, incentive: IncentiveType) -> bool {
        self.0 & incentive.bit() != 0
    }

    /// Add an incentive type to the set.
    pub fn insert(&mut self, incentive: IncentiveType) {
        self.0 |= incentive.bit();
    }

    /// Return whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the incentive types in the set.
    pub fn iter(self) -> impl Iterator<Item = IncentiveType> {
        IncentiveType::ALL
            .into_iter()
            .filter(move |incentive| self.contains(*incentive))
    }
}

impl From<IncentiveType> for SupportedIncentives {
    fn from(incentive: IncentiveType) -> Self {
        Self(incentive.bit())
    }
}

impl FromIterator<IncentiveType> for SupportedIncentives {
    fn from_iter<I: IntoIterator<Item = IncentiveType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, incentive| set | incentive.into())
    }
}

impl BitOr for SupportedIncentives {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SupportedIncentives {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
