//! Affordability: how much each product would actually lend this borrower.
//!
//! Mortgages advance against collateral at the product's LTV ratio; lease
//! deposit loans advance against income and credit under a pluggable banded
//! policy. Every function here is total: insufficient input degrades to an
//! amount of zero with a shortfall flag, never an error, so one thin product
//! cannot abort a whole ranking.

mod policy;

pub use policy::{AffordabilityPolicy, CreditBand, IncomeCapBand};

use serde::{Deserialize, Serialize};

use super::profile::BorrowerProfile;
use crate::catalog::{LoanKind, LoanProduct};

/// Why an affordability computation degraded to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortfallReason {
    /// Collateral-backed product but the profile declares no usable
    /// collateral value.
    MissingCollateralValue,
    /// Income, credit, and debt leave no repayment capacity.
    RepaymentCapacityExhausted,
}

/// Maximum amount `product` would lend the borrower, in 10,000-KRW units,
/// with a shortfall flag when the computation degraded to zero.
pub fn max_loan_amount(
    profile: &BorrowerProfile,
    product: &LoanProduct,
    policy: &AffordabilityPolicy,
) -> (u64, Option<ShortfallReason>) {
    match product.kind {
        LoanKind::Mortgage => collateral_backed(profile, product),
        LoanKind::LeaseDeposit => income_backed(profile, product, policy),
    }
}

/// Loan plus liquid assets; assets below zero contribute nothing.
pub fn max_purchase_price(max_loan_amount: u64, liquid_assets: i64) -> u64 {
    max_loan_amount.saturating_add(liquid_assets.max(0) as u64)
}

fn collateral_backed(
    profile: &BorrowerProfile,
    product: &LoanProduct,
) -> (u64, Option<ShortfallReason>) {
    let Some(collateral_value) = profile.collateral() else {
        return (0, Some(ShortfallReason::MissingCollateralValue));
    };

    let ltv = u64::from(product.ltv_ratio.min(100));
    let advance = collateral_value.saturating_mul(ltv) / 100;
    let amount = match product.max_amount {
        Some(cap) => advance.min(cap),
        None => advance,
    };
    (amount, None)
}

fn income_backed(
    profile: &BorrowerProfile,
    product: &LoanProduct,
    policy: &AffordabilityPolicy,
) -> (u64, Option<ShortfallReason>) {
    let mut advance = policy.income_advance(profile.income(), profile.credit_score, profile.debt());
    if product.dsr_relief {
        advance = (advance as f64 * policy.dsr_relief_multiplier).floor() as u64;
    }

    let amount = match product.max_amount {
        Some(cap) => advance.min(cap),
        None => advance,
    };
    if amount == 0 {
        (0, Some(ShortfallReason::RepaymentCapacityExhausted))
    } else {
        (amount, None)
    }
}
