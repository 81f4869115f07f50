//! Rebate Service
//!
//! Looks up the rebate and product for a request, picks the calculator for the rebate's incentive
//! type and stores the amount when the combination is eligible.

use tracing::{Span, debug, info};

use crate::{
    calculation::{CalculateRebateRequest, CalculateRebateResult, FailureReason},
    data::{DataStoreError, ProductDataStore, RebateDataStore},
    registry::CalculatorRegistry,
};

/// Rebate calculation service.
#[derive(Debug)]
pub struct RebateService<R, P> {
    rebates: R,
    products: P,
    registry: CalculatorRegistry,
}

impl<R, P> RebateService<R, P>
where
    R: RebateDataStore,
    P: ProductDataStore,
{
    /// Create a new service over the given stores and calculators.
    pub fn new(rebates: R, products: P, registry: CalculatorRegistry) -> Self {
        Self {
            rebates,
            products,
            registry,
        }
    }

    /// Return the rebate store.
    pub fn rebates(&self) -> &R {
        &self.rebates
    }

    /// Calculate and store the rebate amount for a request.
    ///
    /// Missing records, unknown incentive types, ineligible combinations and amounts that
    /// overflow produce a failed result. The amount is stored exactly once, and only when the
    /// result is successful.
    ///
    /// # Errors
    ///
    /// Returns a [`DataStoreError`] if either store fails while fetching or storing.
    #[tracing::instrument(
        name = "rebates.service.calculate",
        skip(self, request),
        fields(
            rebate_identifier = %request.rebate_identifier,
            product_identifier = %request.product_identifier,
            volume = %request.volume,
            incentive = tracing::field::Empty,
            success = tracing::field::Empty
        ),
        err
    )]
    pub fn calculate(
        &self,
        request: &CalculateRebateRequest,
    ) -> Result<CalculateRebateResult, DataStoreError> {
        let span = Span::current();

        let Some(rebate) = self.rebates.get_rebate(&request.rebate_identifier)? else {
            return Ok(failed(&span, FailureReason::RebateNotFound));
        };

        span.record("incentive", tracing::field::display(rebate.incentive));

        let Some(product) = self.products.get_product(&request.product_identifier)? else {
            return Ok(failed(&span, FailureReason::ProductNotFound));
        };

        let Some(calculator) = self.registry.resolve(rebate.incentive) else {
            return Ok(failed(
                &span,
                FailureReason::UnsupportedIncentive(rebate.incentive),
            ));
        };

        if !calculator.is_eligible(Some(&rebate), Some(&product), request) {
            return Ok(failed(&span, FailureReason::NotEligible(rebate.incentive)));
        }

        let Some(amount) = calculator.calculate(&rebate, &product, request) else {
            return Ok(failed(&span, FailureReason::AmountOverflow(rebate.incentive)));
        };

        self.rebates.store_calculation_result(&rebate, amount)?;

        span.record("success", true);

        info!(%amount, "stored rebate calculation");

        Ok(CalculateRebateResult::succeeded(amount))
    }
}

fn failed(span: &Span, reason: FailureReason) -> CalculateRebateResult {
    span.record("success", false);

    debug!(%reason, "rebate calculation failed");

    CalculateRebateResult::failed(reason)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        calculators::{Calculator, FixedCashAmountCalculator},
        data::{MockProductDataStore, MockRebateDataStore},
        incentives::{IncentiveType, SupportedIncentives},
        products::Product,
        rebates::Rebate,
    };

    use super::*;

    fn request() -> CalculateRebateRequest {
        CalculateRebateRequest::new("R1", "P1", Decimal::TEN)
    }

    #[test]
    fn product_is_not_fetched_when_rebate_is_missing() -> TestResult {
        let mut rebates = MockRebateDataStore::new();
        let mut products = MockProductDataStore::new();

        rebates
            .expect_get_rebate()
            .once()
            .withf(|identifier| identifier == "R1")
            .returning(|_| Ok(None));

        rebates.expect_store_calculation_result().never();
        products.expect_get_product().never();

        let service = RebateService::new(rebates, products, CalculatorRegistry::standard());
        let result = service.calculate(&request())?;

        assert_eq!(
            result,
            CalculateRebateResult::failed(FailureReason::RebateNotFound)
        );

        Ok(())
    }

    #[test]
    fn unregistered_incentive_fails_without_storing() -> TestResult {
        let mut rebates = MockRebateDataStore::new();
        let mut products = MockProductDataStore::new();

        rebates
            .expect_get_rebate()
            .once()
            .returning(|_| Ok(Some(Rebate::amount_per_uom(Decimal::TEN))));

        rebates.expect_store_calculation_result().never();

        products
            .expect_get_product()
            .once()
            .returning(|_| Ok(Some(Product::new(Decimal::ONE, SupportedIncentives::all()))));

        let registry = CalculatorRegistry::new([Calculator::from(FixedCashAmountCalculator)])?;
        let service = RebateService::new(rebates, products, registry);
        let result = service.calculate(&request())?;

        assert_eq!(
            result,
            CalculateRebateResult::failed(FailureReason::UnsupportedIncentive(
                IncentiveType::AmountPerUom
            ))
        );

        Ok(())
    }

    #[test]
    fn store_failure_propagates() {
        let mut rebates = MockRebateDataStore::new();
        let mut products = MockProductDataStore::new();

        rebates
            .expect_get_rebate()
            .returning(|_| Ok(Some(Rebate::fixed_cash_amount(Decimal::from(100)))));

        rebates
            .expect_store_calculation_result()
            .once()
            .returning(|_, _| Err(DataStoreError::Unavailable("disk full".to_string())));

        products.expect_get_product().returning(|_| {
            Ok(Some(Product::new(
                Decimal::ONE,
                SupportedIncentives::FIXED_CASH_AMOUNT,
            )))
        });

        let service = RebateService::new(rebates, products, CalculatorRegistry::standard());

        assert!(matches!(
            service.calculate(&request()),
            Err(DataStoreError::Unavailable(message)) if message == "disk full"
        ));
    }
}
