//! Preference-fit scoring. Each factor is normalized independently, weighted,
//! and reported in a breakdown so a ranking can be audited factor by factor.

mod weights;

pub use weights::ScoringWeights;

use serde::{Deserialize, Serialize};

use super::profile::{BorrowerProfile, BorrowerSegment};
use crate::catalog::LoanProduct;

/// Factors contributing to a product's preference-fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    RateTypeMatch,
    YouthAlignment,
    LtvFavorability,
    PreferentialRate,
    SimplifiedDocumentation,
    MobileApplication,
    BankAffinity,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::RateTypeMatch => "rate_type_match",
            ScoreFactor::YouthAlignment => "youth_alignment",
            ScoreFactor::LtvFavorability => "ltv_favorability",
            ScoreFactor::PreferentialRate => "preferential_rate",
            ScoreFactor::SimplifiedDocumentation => "simplified_documentation",
            ScoreFactor::MobileApplication => "mobile_application",
            ScoreFactor::BankAffinity => "bank_affinity",
        }
    }
}

/// Weighted award for a single factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub awarded: f64,
}

/// Auditable scoring outcome for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub total: f64,
}

/// Score `product` against the borrower's preferences. Totals stay within
/// `[0, weights.total()]`; with the default weights that is `[0, 1]`.
pub fn score_product(
    profile: &BorrowerProfile,
    product: &LoanProduct,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let components = vec![
        ScoreComponent {
            factor: ScoreFactor::RateTypeMatch,
            awarded: if product.rate_types.contains(&profile.rate_preference) {
                weights.rate_type_match
            } else {
                0.0
            },
        },
        ScoreComponent {
            factor: ScoreFactor::YouthAlignment,
            awarded: if youth_aligned(profile, product) {
                weights.youth_alignment
            } else {
                0.0
            },
        },
        ScoreComponent {
            factor: ScoreFactor::LtvFavorability,
            awarded: f64::from(product.ltv_ratio.min(100)) / 100.0 * weights.ltv_favorability,
        },
        ScoreComponent {
            factor: ScoreFactor::PreferentialRate,
            awarded: preferential_rate_bonus(product, weights),
        },
        ScoreComponent {
            factor: ScoreFactor::SimplifiedDocumentation,
            awarded: if product.simplified_documentation {
                weights.simplified_documentation
            } else {
                0.0
            },
        },
        ScoreComponent {
            factor: ScoreFactor::MobileApplication,
            awarded: if product.mobile_application {
                weights.mobile_application
            } else {
                0.0
            },
        },
        ScoreComponent {
            factor: ScoreFactor::BankAffinity,
            awarded: if bank_matches(profile, product) {
                weights.bank_affinity
            } else {
                0.0
            },
        },
    ];

    let total = components.iter().map(|component| component.awarded).sum();
    ScoreBreakdown { components, total }
}

fn youth_aligned(profile: &BorrowerProfile, product: &LoanProduct) -> bool {
    product.youth_preference
        && matches!(
            profile.segment,
            BorrowerSegment::Youth | BorrowerSegment::FirstTimeBuyer
        )
}

/// A preferential rate is the discounted rate itself, so lower is better.
/// Rates at or above the ceiling earn nothing; a missing rate earns nothing.
fn preferential_rate_bonus(product: &LoanProduct, weights: &ScoringWeights) -> f64 {
    let Some(rate) = product.preferential_rate else {
        return 0.0;
    };
    if weights.preferential_rate_ceiling <= 0.0 {
        return 0.0;
    }
    let normalized = (rate / weights.preferential_rate_ceiling).clamp(0.0, 1.0);
    (1.0 - normalized) * weights.preferential_rate
}

fn bank_matches(profile: &BorrowerProfile, product: &LoanProduct) -> bool {
    profile
        .preferred_bank
        .as_deref()
        .map(|bank| bank == product.bank)
        .unwrap_or(false)
}
