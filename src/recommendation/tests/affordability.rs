use super::common::*;
use crate::recommendation::affordability::{max_loan_amount, max_purchase_price};
use crate::recommendation::{AffordabilityPolicy, ShortfallReason};

#[test]
fn mortgage_advances_collateral_at_ltv() {
    let policy = AffordabilityPolicy::default();

    let (amount, shortfall) = max_loan_amount(&borrower(), &mortgage_product("P1"), &policy);

    // floor(40000 * 70 / 100)
    assert_eq!(amount, 28_000);
    assert_eq!(shortfall, None);
}

#[test]
fn mortgage_respects_product_cap() {
    let policy = AffordabilityPolicy::default();
    let mut product = mortgage_product("P1");
    product.max_amount = Some(25_000);

    let (amount, _) = max_loan_amount(&borrower(), &product, &policy);

    assert_eq!(amount, 25_000);
}

#[test]
fn mortgage_without_numeric_cap_advances_fully() {
    let policy = AffordabilityPolicy::default();
    let mut product = mortgage_product("P1");
    product.max_amount = None;

    let (amount, _) = max_loan_amount(&borrower(), &product, &policy);

    assert_eq!(amount, 28_000);
}

#[test]
fn missing_collateral_degrades_to_zero_with_flag() {
    let policy = AffordabilityPolicy::default();
    let mut no_collateral = borrower();
    no_collateral.collateral_value = None;

    let (amount, shortfall) = max_loan_amount(&no_collateral, &mortgage_product("P1"), &policy);

    assert_eq!(amount, 0);
    assert_eq!(shortfall, Some(ShortfallReason::MissingCollateralValue));
}

#[test]
fn lease_advance_combines_income_credit_and_cap() {
    let policy = AffordabilityPolicy::default();

    // 5000 * 8 = 40000, credit 750 weights it to 32000, product caps at 20000.
    let (amount, shortfall) = max_loan_amount(&lease_borrower(), &lease_product("P1"), &policy);

    assert_eq!(amount, 20_000);
    assert_eq!(shortfall, None);
}

#[test]
fn lease_without_product_cap_uses_policy_advance() {
    let policy = AffordabilityPolicy::default();
    let mut product = lease_product("P1");
    product.max_amount = None;

    let (amount, _) = max_loan_amount(&lease_borrower(), &product, &policy);

    assert_eq!(amount, 32_000);
}

#[test]
fn dsr_relief_expands_the_advance() {
    let policy = AffordabilityPolicy::default();
    let mut product = lease_product("P1");
    product.max_amount = None;
    product.dsr_relief = true;

    let (amount, _) = max_loan_amount(&lease_borrower(), &product, &policy);

    assert_eq!(amount, 35_200);
}

#[test]
fn debt_drag_reduces_the_advance() {
    let policy = AffordabilityPolicy::default();
    let mut indebted = lease_borrower();
    indebted.existing_debt = 10_000;
    let mut product = lease_product("P1");
    product.max_amount = None;

    let (amount, _) = max_loan_amount(&indebted, &product, &policy);

    // (40000 - 10000) * 0.8
    assert_eq!(amount, 24_000);
}

#[test]
fn exhausted_capacity_flags_shortfall() {
    let policy = AffordabilityPolicy::default();
    let mut broke = lease_borrower();
    broke.annual_income = 0;

    let (amount, shortfall) = max_loan_amount(&broke, &lease_product("P1"), &policy);

    assert_eq!(amount, 0);
    assert_eq!(shortfall, Some(ShortfallReason::RepaymentCapacityExhausted));
}

#[test]
fn advance_is_monotonic_in_income_credit_and_debt() {
    let policy = AffordabilityPolicy::default();

    assert!(policy.income_advance(6_000, 750, 0) >= policy.income_advance(5_000, 750, 0));
    assert!(policy.income_advance(5_000, 900, 0) >= policy.income_advance(5_000, 750, 0));
    assert!(policy.income_advance(5_000, 750, 5_000) <= policy.income_advance(5_000, 750, 0));
}

#[test]
fn credit_bands_step_at_documented_floors() {
    let policy = AffordabilityPolicy::default();

    assert_eq!(policy.credit_factor(920), 1.0);
    assert_eq!(policy.credit_factor(800), 0.9);
    assert_eq!(policy.credit_factor(699), 0.7);
    assert_eq!(policy.credit_factor(560), 0.6);
    assert_eq!(policy.credit_factor(400), 0.5);
}

#[test]
fn income_caps_step_at_documented_floors() {
    let policy = AffordabilityPolicy::default();

    assert_eq!(policy.income_cap(12_000), 200_000);
    assert_eq!(policy.income_cap(4_500), 100_000);
    assert_eq!(policy.income_cap(500), 20_000);
}

#[test]
fn purchase_price_adds_liquid_assets_exactly() {
    assert_eq!(max_purchase_price(28_000, 3_000), 31_000);
    assert_eq!(max_purchase_price(28_000, 0), 28_000);
    assert_eq!(max_purchase_price(0, 3_000), 3_000);
}

#[test]
fn purchase_price_ignores_negative_assets() {
    assert_eq!(max_purchase_price(28_000, -500), 28_000);
}
