//! Rebates
//!
//! Rebates is a rebate calculation engine: it looks up a rebate and a product, picks the
//! calculator for the rebate's incentive type and stores the amount when the pair is eligible.

pub mod calculation;
pub mod calculators;
pub mod data;
pub mod fixtures;
pub mod incentives;
pub mod prelude;
pub mod products;
pub mod rebates;
pub mod registry;
pub mod service;
