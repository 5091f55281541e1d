//! Borrower profiling, eligibility filtering, preference scoring, and
//! affordability for bank loan offers.
//!
//! The engine is pure and stateless: callers hand it a validated profile and
//! an immutable catalog snapshot, and it hands back a ranked result. All I/O
//! (catalog loading, profile persistence, serialization to a wire format)
//! belongs to the surrounding collaborator layer.

pub mod affordability;
pub mod eligibility;
pub mod engine;
pub mod profile;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use affordability::{AffordabilityPolicy, CreditBand, IncomeCapBand, ShortfallReason};
pub use engine::{
    PurchaseInfo, RecommendationConfig, RecommendationEngine, RecommendationError,
    RecommendationResult, ScoredProduct,
};
pub use profile::{
    BorrowerProfile, BorrowerSegment, EmploymentType, ProfileViolation, MAX_CREDIT_SCORE,
};
pub use scoring::{ScoreBreakdown, ScoreComponent, ScoreFactor, ScoringWeights};
