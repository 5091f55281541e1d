use serde::{Deserialize, Serialize};

/// Credit-quality adjustment band: scores at or above `floor` earn `factor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditBand {
    pub floor: u16,
    pub factor: f64,
}

/// Absolute advance ceiling for annual incomes at or above `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeCapBand {
    pub floor: u64,
    pub cap: u64,
}

/// Banded income-advance policy for deposit-backed lending. Amounts are in
/// 10,000-KRW units. Recalibration means swapping tables, never editing the
/// calculator; bands must be sorted by descending `floor` with factors and
/// caps non-decreasing in `floor` so the advance stays monotonic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityPolicy {
    /// Headline multiple of annual income before adjustments.
    pub income_multiple: u64,
    /// Portion of existing debt subtracted from the headline advance.
    pub debt_drag: f64,
    pub credit_bands: Vec<CreditBand>,
    pub income_caps: Vec<IncomeCapBand>,
    /// Applied to the advance on products carrying DSR preferential treatment.
    pub dsr_relief_multiplier: f64,
}

impl AffordabilityPolicy {
    pub fn credit_factor(&self, credit_score: u16) -> f64 {
        self.credit_bands
            .iter()
            .find(|band| credit_score >= band.floor)
            .map(|band| band.factor)
            .unwrap_or(1.0)
    }

    pub fn income_cap(&self, annual_income: u64) -> u64 {
        self.income_caps
            .iter()
            .find(|band| annual_income >= band.floor)
            .map(|band| band.cap)
            .unwrap_or(u64::MAX)
    }

    /// Maximum income-backed advance: income times the headline multiple,
    /// less the debt drag, weighted by credit quality, then capped by the
    /// income band. Total over all inputs and never negative.
    pub fn income_advance(&self, annual_income: u64, credit_score: u16, existing_debt: u64) -> u64 {
        let headline = annual_income.saturating_mul(self.income_multiple);
        let drag = (existing_debt as f64 * self.debt_drag).floor() as u64;
        let adjusted = headline.saturating_sub(drag);
        let weighted = (adjusted as f64 * self.credit_factor(credit_score)).floor() as u64;
        weighted.min(self.income_cap(annual_income))
    }
}

impl Default for AffordabilityPolicy {
    fn default() -> Self {
        Self {
            income_multiple: 8,
            debt_drag: 1.0,
            credit_bands: vec![
                CreditBand {
                    floor: 900,
                    factor: 1.0,
                },
                CreditBand {
                    floor: 800,
                    factor: 0.9,
                },
                CreditBand {
                    floor: 700,
                    factor: 0.8,
                },
                CreditBand {
                    floor: 600,
                    factor: 0.7,
                },
                CreditBand {
                    floor: 550,
                    factor: 0.6,
                },
                CreditBand {
                    floor: 0,
                    factor: 0.5,
                },
            ],
            income_caps: vec![
                IncomeCapBand {
                    floor: 10_000,
                    cap: 200_000,
                },
                IncomeCapBand {
                    floor: 8_000,
                    cap: 150_000,
                },
                IncomeCapBand {
                    floor: 6_000,
                    cap: 120_000,
                },
                IncomeCapBand {
                    floor: 4_000,
                    cap: 100_000,
                },
                IncomeCapBand {
                    floor: 3_000,
                    cap: 80_000,
                },
                IncomeCapBand {
                    floor: 2_000,
                    cap: 60_000,
                },
                IncomeCapBand {
                    floor: 1_000,
                    cap: 40_000,
                },
                IncomeCapBand { floor: 0, cap: 20_000 },
            ],
            dsr_relief_multiplier: 1.1,
        }
    }
}
