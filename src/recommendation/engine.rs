use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::affordability::{self, AffordabilityPolicy, ShortfallReason};
use super::eligibility;
use super::profile::{BorrowerProfile, ProfileViolation};
use super::scoring::{self, ScoringWeights};
use crate::catalog::{CatalogSnapshot, LoanProduct};

/// Tunable knobs of a recommendation run: the scoring rubric plus the
/// income-advance policy. Serializable so operators can supply overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub affordability: AffordabilityPolicy,
}

/// Errors that terminate a recommendation call before ranking.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("invalid borrower profile: {0}")]
    InvalidProfile(#[from] ProfileViolation),
}

/// Per-request pairing of a catalog product with its derived score and
/// affordability outcome. Owned by the result it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    pub product: LoanProduct,
    pub score: f64,
    pub max_loan_amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortfall: Option<ShortfallReason>,
}

/// Purchase-power summary derived from the top-ranked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInfo {
    pub max_loan_amount: u64,
    pub liquid_assets: u64,
    pub max_purchase_price: u64,
    pub top_product: ScoredProduct,
}

/// Ranked outcome handed back to the caller, best fit first. An empty
/// `ranked_products` with no `purchase_info` is the valid "nothing matched"
/// answer, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub ranked_products: Vec<ScoredProduct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_info: Option<PurchaseInfo>,
}

/// Stateless engine applying the configured rubric to a borrower profile and
/// one immutable catalog snapshot per call.
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Filter, score, rank, and price the catalog for one borrower.
    ///
    /// Deterministic: identical profile and snapshot yield an identical
    /// result, including ordering. Per-product affordability shortfalls are
    /// contained as zero amounts; only profile validation terminates the call.
    pub fn recommend(
        &self,
        profile: &BorrowerProfile,
        catalog: &CatalogSnapshot,
    ) -> Result<RecommendationResult, RecommendationError> {
        profile.validate()?;

        let eligible = eligibility::eligible_products(profile, catalog.products());
        debug!(
            candidates = catalog.len(),
            eligible = eligible.len(),
            "eligibility filter applied"
        );
        if eligible.is_empty() {
            info!("no eligible products for borrower");
            return Ok(RecommendationResult {
                ranked_products: Vec::new(),
                purchase_info: None,
            });
        }

        let mut ranked_products: Vec<ScoredProduct> = eligible
            .into_iter()
            .map(|product| {
                let score = scoring::score_product(profile, product, &self.config.weights).total;
                let (max_loan_amount, shortfall) =
                    affordability::max_loan_amount(profile, product, &self.config.affordability);
                ScoredProduct {
                    product: product.clone(),
                    score,
                    max_loan_amount,
                    shortfall,
                }
            })
            .collect();
        ranked_products.sort_by(rank_order);

        let purchase_info = ranked_products.first().map(|top| PurchaseInfo {
            max_loan_amount: top.max_loan_amount,
            liquid_assets: profile.assets(),
            max_purchase_price: affordability::max_purchase_price(
                top.max_loan_amount,
                profile.liquid_assets,
            ),
            top_product: top.clone(),
        });
        if let Some(summary) = &purchase_info {
            info!(
                ranked = ranked_products.len(),
                top_product = %summary.top_product.product.id.0,
                max_purchase_price = summary.max_purchase_price,
                "recommendation assembled"
            );
        }

        Ok(RecommendationResult {
            ranked_products,
            purchase_info,
        })
    }
}

/// Descending score, then descending LTV, then ascending product id so equal
/// fits rank reproducibly.
fn rank_order(a: &ScoredProduct, b: &ScoredProduct) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.product.ltv_ratio.cmp(&a.product.ltv_ratio))
        .then_with(|| a.product.id.cmp(&b.product.id))
}
