use tracing::debug;

use super::profile::BorrowerProfile;
use crate::catalog::{LoanProduct, Qualification};

/// Products from `candidates` the borrower qualifies for, in catalog order.
///
/// Every rule treats an absent profile field as satisfying the bound: the
/// filter only rejects on positive evidence of a mismatch, so a sparse
/// profile widens the candidate set instead of emptying it.
pub fn eligible_products<'a>(
    profile: &BorrowerProfile,
    candidates: &'a [LoanProduct],
) -> Vec<&'a LoanProduct> {
    candidates
        .iter()
        .filter(|product| match first_failed_rule(profile, product) {
            None => true,
            Some(rule) => {
                debug!(product = %product.id.0, rule, "product filtered out");
                false
            }
        })
        .collect()
}

/// Whether the borrower clears every qualification rule for `product`.
pub fn is_eligible(profile: &BorrowerProfile, product: &LoanProduct) -> bool {
    first_failed_rule(profile, product).is_none()
}

fn first_failed_rule(profile: &BorrowerProfile, product: &LoanProduct) -> Option<&'static str> {
    if product.kind != profile.loan_type_preference {
        return Some("loan_kind");
    }
    if !age_within(profile, &product.qualification) {
        return Some("age");
    }
    if !ownership_allowed(profile, &product.qualification) {
        return Some("home_ownership");
    }
    if !meets_income_floor(profile, &product.qualification) {
        return Some("min_income");
    }
    if !meets_credit_floor(profile, &product.qualification) {
        return Some("min_credit_score");
    }
    if !collateral_accepted(profile, product) {
        return Some("collateral_type");
    }
    None
}

fn age_within(profile: &BorrowerProfile, qualification: &Qualification) -> bool {
    let Some(age) = profile.age else {
        return true;
    };
    let above_min = qualification.min_age.map(|min| age >= min).unwrap_or(true);
    let below_max = qualification.max_age.map(|max| age <= max).unwrap_or(true);
    above_min && below_max
}

fn ownership_allowed(profile: &BorrowerProfile, qualification: &Qualification) -> bool {
    qualification
        .home_ownership
        .map(|required| required == profile.home_ownership)
        .unwrap_or(true)
}

fn meets_income_floor(profile: &BorrowerProfile, qualification: &Qualification) -> bool {
    qualification
        .min_income
        .map(|floor| profile.income() >= floor)
        .unwrap_or(true)
}

fn meets_credit_floor(profile: &BorrowerProfile, qualification: &Qualification) -> bool {
    qualification
        .min_credit_score
        .map(|floor| profile.credit_score >= floor)
        .unwrap_or(true)
}

fn collateral_accepted(profile: &BorrowerProfile, product: &LoanProduct) -> bool {
    if product.eligible_collateral_types.is_empty() {
        return true;
    }
    match &profile.collateral_type {
        Some(declared) => product.eligible_collateral_types.contains(declared),
        None => true,
    }
}
