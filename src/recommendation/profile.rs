use serde::{Deserialize, Serialize};

use crate::catalog::{HomeOwnership, LoanKind, RateType};

/// Highest score on the credit scale the engine understands.
pub const MAX_CREDIT_SCORE: u16 = 1000;

/// Employment categories captured by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    Contract,
    Freelance,
    BusinessOwner,
    Unemployed,
}

/// Borrower segment driving youth-preference alignment during scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorrowerSegment {
    Youth,
    FirstTimeBuyer,
    General,
}

/// Normalized borrower submission. Monetary fields are integers in 10,000-KRW
/// units and arrive signed so out-of-range input can be reported instead of
/// silently wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    pub age: Option<u8>,
    pub home_ownership: HomeOwnership,
    pub annual_income: i64,
    pub credit_score: u16,
    pub loan_type_preference: LoanKind,
    #[serde(default)]
    pub existing_debt: i64,
    #[serde(default)]
    pub liquid_assets: i64,
    pub employment: EmploymentType,
    #[serde(default)]
    pub employment_months: u32,
    pub rate_preference: RateType,
    #[serde(default)]
    pub collateral_type: Option<String>,
    #[serde(default)]
    pub collateral_value: Option<i64>,
    pub segment: BorrowerSegment,
    #[serde(default)]
    pub preferred_bank: Option<String>,
}

/// Violations raised by minimal profile validation. Each carries the
/// offending value for the caller's error report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileViolation {
    #[error("annual income must be non-negative, got {0}")]
    NegativeIncome(i64),
    #[error("existing debt must be non-negative, got {0}")]
    NegativeDebt(i64),
    #[error("credit score {0} exceeds the 1000-point scale")]
    CreditScoreOutOfRange(u16),
}

impl BorrowerProfile {
    /// Structural checks only; business judgment (low income, thin credit)
    /// belongs to eligibility and affordability.
    pub fn validate(&self) -> Result<(), ProfileViolation> {
        if self.annual_income < 0 {
            return Err(ProfileViolation::NegativeIncome(self.annual_income));
        }
        if self.existing_debt < 0 {
            return Err(ProfileViolation::NegativeDebt(self.existing_debt));
        }
        if self.credit_score > MAX_CREDIT_SCORE {
            return Err(ProfileViolation::CreditScoreOutOfRange(self.credit_score));
        }
        Ok(())
    }

    /// Annual income clamped to zero; calculators stay total even when
    /// validation was skipped.
    pub(crate) fn income(&self) -> u64 {
        self.annual_income.max(0) as u64
    }

    pub(crate) fn debt(&self) -> u64 {
        self.existing_debt.max(0) as u64
    }

    pub(crate) fn assets(&self) -> u64 {
        self.liquid_assets.max(0) as u64
    }

    /// Declared collateral value, present only when positive.
    pub(crate) fn collateral(&self) -> Option<u64> {
        self.collateral_value
            .filter(|value| *value > 0)
            .map(|value| value as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> BorrowerProfile {
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

    #[test]
    fn accepts_well_formed_profile() {
        assert_eq!(profile().validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_income() {
        let mut bad = profile();
        bad.annual_income = -100;
        assert_eq!(
            bad.validate(),
            Err(ProfileViolation::NegativeIncome(-100))
        );
    }

    #[test]
    fn rejects_negative_debt() {
        let mut bad = profile();
        bad.existing_debt = -1;
        assert_eq!(bad.validate(), Err(ProfileViolation::NegativeDebt(-1)));
    }

    #[test]
    fn rejects_credit_score_above_scale() {
        let mut bad = profile();
        bad.credit_score = 1_200;
        assert_eq!(
            bad.validate(),
            Err(ProfileViolation::CreditScoreOutOfRange(1_200))
        );
    }

    #[test]
    fn clamped_accessors_never_go_negative() {
        let mut raw = profile();
        raw.liquid_assets = -500;
        raw.collateral_value = Some(-40_000);
        assert_eq!(raw.assets(), 0);
        assert_eq!(raw.collateral(), None);
    }
}
