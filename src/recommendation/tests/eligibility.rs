use super::common::*;
use crate::catalog::HomeOwnership;
use crate::recommendation::eligibility::{eligible_products, is_eligible};

#[test]
fn borrower_clears_unconstrained_product() {
    assert!(is_eligible(&borrower(), &mortgage_product("P1")));
}

#[test]
fn loan_kind_mismatch_rejects() {
    assert!(!is_eligible(&borrower(), &lease_product("P1")));
}

#[test]
fn age_bounds_reject_outside_range() {
    let mut product = mortgage_product("P1");
    product.qualification.min_age = Some(19);
    product.qualification.max_age = Some(34);
    assert!(is_eligible(&borrower(), &product));

    let mut too_young = borrower();
    too_young.age = Some(17);
    assert!(!is_eligible(&too_young, &product));

    let mut too_old = borrower();
    too_old.age = Some(40);
    assert!(!is_eligible(&too_old, &product));
}

#[test]
fn missing_age_satisfies_age_bounds() {
    let mut product = mortgage_product("P1");
    product.qualification.min_age = Some(19);
    product.qualification.max_age = Some(34);

    let mut ageless = borrower();
    ageless.age = None;

    assert!(is_eligible(&ageless, &product));
}

#[test]
fn ownership_requirement_must_match_when_present() {
    let mut product = mortgage_product("P1");
    product.qualification.home_ownership = Some(HomeOwnership::NoHome);
    assert!(is_eligible(&borrower(), &product));

    let mut owner = borrower();
    owner.home_ownership = HomeOwnership::ExistingOwner;
    assert!(!is_eligible(&owner, &product));
}

#[test]
fn income_floor_rejects_below() {
    let mut product = mortgage_product("P1");
    product.qualification.min_income = Some(5_000);
    assert!(is_eligible(&borrower(), &product));

    product.qualification.min_income = Some(5_001);
    assert!(!is_eligible(&borrower(), &product));
}

#[test]
fn credit_floor_rejects_below() {
    let mut product = mortgage_product("P1");
    product.qualification.min_credit_score = Some(750);
    assert!(is_eligible(&borrower(), &product));

    product.qualification.min_credit_score = Some(751);
    assert!(!is_eligible(&borrower(), &product));
}

#[test]
fn collateral_type_must_be_accepted_when_declared() {
    let mut product = mortgage_product("P1");
    product
        .eligible_collateral_types
        .insert("officetel".to_string());
    assert!(is_eligible(&borrower(), &product));

    let mut mismatched = borrower();
    mismatched.collateral_type = Some("rural-land".to_string());
    assert!(!is_eligible(&mismatched, &product));
}

#[test]
fn undeclared_collateral_type_passes_restricted_products() {
    let mut undeclared = borrower();
    undeclared.collateral_type = None;
    assert!(is_eligible(&undeclared, &mortgage_product("P1")));
}

#[test]
fn empty_collateral_set_accepts_any_declaration() {
    let mut product = mortgage_product("P1");
    product.eligible_collateral_types.clear();

    let mut unusual = borrower();
    unusual.collateral_type = Some("rural-land".to_string());

    assert!(is_eligible(&unusual, &product));
}

#[test]
fn relaxing_bounds_never_removes_an_eligible_product() {
    let mut product = mortgage_product("P1");
    product.qualification.min_age = Some(30);
    product.qualification.max_age = Some(35);
    product.qualification.min_income = Some(5_000);
    product.qualification.min_credit_score = Some(700);
    product.qualification.home_ownership = Some(HomeOwnership::NoHome);
    let profile = borrower();
    assert!(is_eligible(&profile, &product));

    let mut relaxed = product.clone();
    relaxed.qualification.min_age = Some(20);
    assert!(is_eligible(&profile, &relaxed));

    let mut relaxed = product.clone();
    relaxed.qualification.max_age = Some(60);
    assert!(is_eligible(&profile, &relaxed));

    let mut relaxed = product.clone();
    relaxed.qualification.min_income = Some(1_000);
    assert!(is_eligible(&profile, &relaxed));

    let mut relaxed = product.clone();
    relaxed.qualification.min_credit_score = None;
    assert!(is_eligible(&profile, &relaxed));

    let mut relaxed = product.clone();
    relaxed.qualification.home_ownership = None;
    assert!(is_eligible(&profile, &relaxed));

    let mut relaxed = product.clone();
    relaxed.eligible_collateral_types.clear();
    assert!(is_eligible(&profile, &relaxed));
}

#[test]
fn filter_preserves_catalog_order() {
    let products = vec![
        mortgage_product("P1"),
        lease_product("P2"),
        mortgage_product("P3"),
    ];

    let eligible = eligible_products(&borrower(), &products);

    let ids: Vec<&str> = eligible
        .iter()
        .map(|product| product.id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["P1", "P3"]);
}
