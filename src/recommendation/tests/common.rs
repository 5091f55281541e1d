use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::catalog::{
    CatalogSnapshot, HomeOwnership, InterestRateRange, LoanKind, LoanProduct, ProductId,
    Qualification, RateType,
};
use crate::recommendation::{
    BorrowerProfile, BorrowerSegment, EmploymentType, RecommendationConfig, RecommendationEngine,
};

/// Mortgage borrower: 32, no home, 50M KRW income, 750 credit, apartment
/// collateral worth 400M KRW.
pub(super) fn borrower() -> BorrowerProfile {
    BorrowerProfile {
        age: Some(32),
        home_ownership: HomeOwnership::NoHome,
        annual_income: 5_000,
        credit_score: 750,
        loan_type_preference: LoanKind::Mortgage,
        existing_debt: 0,
        liquid_assets: 3_000,
        employment: EmploymentType::FullTime,
        employment_months: 48,
        rate_preference: RateType::Fixed,
        collateral_type: Some("metro-apartment".to_string()),
        collateral_value: Some(40_000),
        segment: BorrowerSegment::General,
        preferred_bank: None,
    }
}

pub(super) fn lease_borrower() -> BorrowerProfile {
    let mut profile = borrower();
    profile.loan_type_preference = LoanKind::LeaseDeposit;
    profile.collateral_type = None;
    profile.collateral_value = None;
    profile
}

pub(super) fn mortgage_product(id: &str) -> LoanProduct {
    LoanProduct {
        id: ProductId(id.to_string()),
        bank: "Shinhan Bank".to_string(),
        name: "i-Home Mortgage".to_string(),
        kind: LoanKind::Mortgage,
        interest_rate: InterestRateRange { min: 3.1, max: 4.5 },
        max_amount: Some(50_000),
        term: "up to 30 years".to_string(),
        qualification: Qualification::default(),
        required_documents: BTreeSet::from(["identity".to_string(), "deed".to_string()]),
        eligible_collateral_types: BTreeSet::from(["metro-apartment".to_string()]),
        rate_types: BTreeSet::from([RateType::Fixed]),
        ltv_ratio: 70,
        dsr_relief: false,
        mobile_application: false,
        youth_preference: false,
        preferential_rate: None,
        simplified_documentation: false,
    }
}

pub(super) fn lease_product(id: &str) -> LoanProduct {
    let mut product = mortgage_product(id);
    product.bank = "KB Kookmin Bank".to_string();
    product.name = "Jeonse Trust Loan".to_string();
    product.kind = LoanKind::LeaseDeposit;
    product.max_amount = Some(20_000);
    product.eligible_collateral_types = BTreeSet::new();
    product.ltv_ratio = 0;
    product
}

pub(super) fn snapshot(products: Vec<LoanProduct>) -> CatalogSnapshot {
    let captured_at = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");
    CatalogSnapshot::assemble(captured_at, products).expect("consistent snapshot")
}

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::new(RecommendationConfig::default())
}
