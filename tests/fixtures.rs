//! End-to-end tests running the bundled fixtures through the in-memory stores

use rust_decimal::Decimal;
use testresult::TestResult;

use rebates::{
    calculation::{CalculateRebateRequest, FailureReason},
    data::{InMemoryProductStore, InMemoryRebateStore, StoredCalculation},
    fixtures::{Fixture, FixtureError},
    incentives::IncentiveType,
    rebates::Rebate,
    registry::CalculatorRegistry,
    service::RebateService,
};

type FixtureService = RebateService<InMemoryRebateStore, InMemoryProductStore>;

fn service() -> Result<FixtureService, FixtureError> {
    let mut fixture = Fixture::with_base_path(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"));

    fixture.load_rebates("default")?.load_products("default")?;

    let (rebates, products) = fixture.into_stores();

    Ok(RebateService::new(rebates, products, CalculatorRegistry::standard()))
}

#[test]
fn each_incentive_type_pays_out_on_widget() -> TestResult {
    let service = service()?;

    let cash = service.calculate(&CalculateRebateRequest::new("cash-100", "widget", Decimal::TEN))?;
    let rate = service.calculate(&CalculateRebateRequest::new(
        "rate-10pct",
        "widget",
        Decimal::from(5),
    ))?;
    let per_unit = service.calculate(&CalculateRebateRequest::new(
        "per-unit-10",
        "widget",
        Decimal::from(7),
    ))?;

    assert_eq!(cash.amount, Some(Decimal::from(100)));
    assert_eq!(rate.amount, Some(Decimal::from(100)));
    assert_eq!(per_unit.amount, Some(Decimal::from(70)));

    let stored = service.rebates().stored_calculations()?;

    assert_eq!(stored.len(), 3);
    assert_eq!(
        stored.first(),
        Some(&StoredCalculation {
            rebate: Rebate::fixed_cash_amount(Decimal::from(100)),
            amount: Decimal::from(100),
        })
    );

    Ok(())
}

#[test]
fn failures_store_nothing() -> TestResult {
    let service = service()?;

    let cases = [
        ("missing", "widget", FailureReason::RebateNotFound),
        ("cash-100", "missing", FailureReason::ProductNotFound),
        (
            "cash-100",
            "gadget",
            FailureReason::NotEligible(IncentiveType::FixedCashAmount),
        ),
        (
            "cash-zero",
            "widget",
            FailureReason::NotEligible(IncentiveType::FixedCashAmount),
        ),
        (
            "rate-10pct",
            "freebie",
            FailureReason::NotEligible(IncentiveType::FixedRateRebate),
        ),
        (
            "per-unit-10",
            "unsupported",
            FailureReason::NotEligible(IncentiveType::AmountPerUom),
        ),
    ];

    for (rebate, product, reason) in cases {
        let result =
            service.calculate(&CalculateRebateRequest::new(rebate, product, Decimal::ONE))?;

        assert!(!result.success, "{rebate}/{product} should fail");
        assert_eq!(result.failure, Some(reason), "{rebate}/{product}");
    }

    assert!(service.rebates().stored_calculations()?.is_empty());

    Ok(())
}

#[test]
fn overflowing_volume_fails_and_stores_nothing() -> TestResult {
    let service = service()?;

    let result = service.calculate(&CalculateRebateRequest::new(
        "per-unit-10",
        "widget",
        Decimal::MAX,
    ))?;

    assert_eq!(
        result.failure,
        Some(FailureReason::AmountOverflow(IncentiveType::AmountPerUom))
    );
    assert!(service.rebates().stored_calculations()?.is_empty());

    Ok(())
}

#[test]
fn fractional_price_keeps_exact_amount() -> TestResult {
    let service = service()?;

    // 49.99 * 0.1 * 3 = 14.997
    let result = service.calculate(&CalculateRebateRequest::new(
        "rate-10pct",
        "gadget",
        Decimal::from(3),
    ))?;

    assert_eq!(result.amount, Some(Decimal::new(14997, 3)));

    Ok(())
}
