use std::collections::{BTreeSet, HashSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog products. Ordered so tie-breaks are reproducible.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// Loan categories the engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanKind {
    Mortgage,
    LeaseDeposit,
}

impl LoanKind {
    pub const fn label(self) -> &'static str {
        match self {
            LoanKind::Mortgage => "mortgage",
            LoanKind::LeaseDeposit => "lease_deposit",
        }
    }

    /// Fixed mapping table normalizing catalog labels into categories. Catalog
    /// exports carry both romanized and original Korean labels.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "mortgage" | "home-mortgage" | "주택담보대출" | "담보대출" => Some(LoanKind::Mortgage),
            "lease-deposit" | "lease_deposit" | "jeonse" | "전세자금대출" => {
                Some(LoanKind::LeaseDeposit)
            }
            _ => None,
        }
    }
}

/// Interest-rate modes a product offers or a borrower prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateType {
    Fixed,
    Variable,
    Mixed,
}

impl RateType {
    pub const fn label(self) -> &'static str {
        match self {
            RateType::Fixed => "fixed",
            RateType::Variable => "variable",
            RateType::Mixed => "mixed",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "fixed" | "고정금리" => Some(RateType::Fixed),
            "variable" | "변동금리" => Some(RateType::Variable),
            "mixed" | "혼합형" => Some(RateType::Mixed),
            _ => None,
        }
    }
}

/// Home-ownership statuses referenced by qualification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeOwnership {
    NoHome,
    FirstTimeBuyer,
    ExistingOwner,
}

impl HomeOwnership {
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "no-home" | "no_home" | "무주택자" => Some(HomeOwnership::NoHome),
            "first-time-buyer" | "first_time_buyer" | "생애최초" => {
                Some(HomeOwnership::FirstTimeBuyer)
            }
            "existing-owner" | "existing_owner" | "기존주택소유자" => {
                Some(HomeOwnership::ExistingOwner)
            }
            _ => None,
        }
    }
}

/// Advertised rate band in percent, parsed from catalog text such as
/// "3.1% ~ 4.5%" or a flat "2.66%".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRateRange {
    pub min: f64,
    pub max: f64,
}

impl InterestRateRange {
    pub fn parse(text: &str) -> Option<Self> {
        let (low, high) = match text.split_once('~') {
            Some((low, high)) => (parse_percent(low)?, parse_percent(high)?),
            None => {
                let flat = parse_percent(text)?;
                (flat, flat)
            }
        };

        if low <= high {
            Some(Self {
                min: low,
                max: high,
            })
        } else {
            None
        }
    }
}

fn parse_percent(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().trim_end_matches('%').trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

impl fmt::Display for InterestRateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.max - self.min).abs() < f64::EPSILON {
            write!(f, "{:.2}%", self.min)
        } else {
            write!(f, "{:.2}% ~ {:.2}%", self.min, self.max)
        }
    }
}

/// Hard qualification bounds a borrower must clear before a product is scored.
/// Absent bounds do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    pub min_age: Option<u8>,
    pub max_age: Option<u8>,
    pub home_ownership: Option<HomeOwnership>,
    pub min_income: Option<u64>,
    pub min_credit_score: Option<u16>,
}

/// Catalog entry describing a single bank loan offer. Amounts are integers in
/// 10,000-KRW units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanProduct {
    pub id: ProductId,
    pub bank: String,
    pub name: String,
    pub kind: LoanKind,
    pub interest_rate: InterestRateRange,
    /// Product-level cap; `None` means the offer has no fixed numeric bound
    /// (e.g. "up to 70% of collateral value").
    pub max_amount: Option<u64>,
    pub term: String,
    pub qualification: Qualification,
    pub required_documents: BTreeSet<String>,
    /// Empty set means any collateral category is accepted.
    pub eligible_collateral_types: BTreeSet<String>,
    pub rate_types: BTreeSet<RateType>,
    pub ltv_ratio: u8,
    pub dsr_relief: bool,
    pub mobile_application: bool,
    pub youth_preference: bool,
    pub preferential_rate: Option<f64>,
    pub simplified_documentation: bool,
}

/// Consistency violations raised while assembling a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate product id {0:?} in catalog snapshot")]
    DuplicateProduct(ProductId),
    #[error("product {id:?} declares LTV ratio {ltv} outside 0-100")]
    LtvOutOfRange { id: ProductId, ltv: u8 },
}

/// Immutable, consistency-checked product set. The engine computes against one
/// snapshot per call and never re-reads a live source mid-computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSnapshot {
    captured_at: NaiveDate,
    products: Vec<LoanProduct>,
}

impl CatalogSnapshot {
    /// Build a snapshot, rejecting duplicate ids and out-of-range LTV ratios.
    pub fn assemble(
        captured_at: NaiveDate,
        products: Vec<LoanProduct>,
    ) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&ProductId> = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            if product.ltv_ratio > 100 {
                return Err(CatalogError::LtvOutOfRange {
                    id: product.id.clone(),
                    ltv: product.ltv_ratio,
                });
            }
        }

        Ok(Self {
            captured_at,
            products,
        })
    }

    pub fn empty(captured_at: NaiveDate) -> Self {
        Self {
            captured_at,
            products: Vec::new(),
        }
    }

    pub fn captured_at(&self) -> NaiveDate {
        self.captured_at
    }

    pub fn products(&self) -> &[LoanProduct] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&LoanProduct> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Products sold by the named bank.
    pub fn by_bank(&self, bank: &str) -> Vec<&LoanProduct> {
        self.products
            .iter()
            .filter(|product| product.bank == bank)
            .collect()
    }

    /// Products carrying the youth-preference flag.
    pub fn youth_preference(&self) -> Vec<&LoanProduct> {
        self.products
            .iter()
            .filter(|product| product.youth_preference)
            .collect()
    }

    /// Products accepting fully mobile applications.
    pub fn mobile_application(&self) -> Vec<&LoanProduct> {
        self.products
            .iter()
            .filter(|product| product.mobile_application)
            .collect()
    }

    pub fn of_kind(&self, kind: LoanKind) -> Vec<&LoanProduct> {
        self.products
            .iter()
            .filter(|product| product.kind == kind)
            .collect()
    }
}
