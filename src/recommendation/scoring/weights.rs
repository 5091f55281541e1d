use serde::{Deserialize, Serialize};

/// Rubric weights for preference-fit scoring. The defaults sum to 1.0 so a
/// product matching every preference scores exactly 1.0; operators supplying
/// custom weights keep that property by keeping the sum at 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub rate_type_match: f64,
    pub youth_alignment: f64,
    pub ltv_favorability: f64,
    pub preferential_rate: f64,
    pub simplified_documentation: f64,
    pub mobile_application: f64,
    pub bank_affinity: f64,
    /// Normalization ceiling, in percentage points, for the preferential-rate
    /// bonus. Rates at or above the ceiling earn nothing; a rate of zero
    /// earns the full weight.
    pub preferential_rate_ceiling: f64,
}

impl ScoringWeights {
    /// Sum of the seven factor weights; the ceiling is a parameter, not a
    /// weight.
    pub fn total(&self) -> f64 {
        self.rate_type_match
            + self.youth_alignment
            + self.ltv_favorability
            + self.preferential_rate
            + self.simplified_documentation
            + self.mobile_application
            + self.bank_affinity
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rate_type_match: 0.25,
            youth_alignment: 0.15,
            ltv_favorability: 0.20,
            preferential_rate: 0.15,
            simplified_documentation: 0.10,
            mobile_application: 0.10,
            bank_affinity: 0.05,
            preferential_rate_ceiling: 10.0,
        }
    }
}
