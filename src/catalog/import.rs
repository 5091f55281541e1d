use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::domain::{
    CatalogError, CatalogSnapshot, HomeOwnership, InterestRateRange, LoanKind, LoanProduct,
    ProductId, Qualification, RateType,
};

/// Failures while turning a catalog CSV export into a snapshot. Row errors
/// carry the 1-based line number of the offending record.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: unknown loan type label '{label}'")]
    UnknownLoanType { line: usize, label: String },
    #[error("line {line}: unknown rate type label '{label}'")]
    UnknownRateType { line: usize, label: String },
    #[error("line {line}: unknown home-ownership label '{label}'")]
    UnknownHomeOwnership { line: usize, label: String },
    #[error("line {line}: malformed interest rate '{text}'")]
    MalformedInterestRate { line: usize, text: String },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Reads bank product exports and assembles consistency-checked snapshots.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        captured_at: NaiveDate,
    ) -> Result<CatalogSnapshot, ImportError> {
        let file = File::open(path)?;
        Self::from_reader(file, captured_at)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        captured_at: NaiveDate,
    ) -> Result<CatalogSnapshot, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut products = Vec::new();

        for (index, record) in csv_reader.deserialize::<ProductRow>().enumerate() {
            let row = record?;
            // Header occupies line 1.
            products.push(row.into_product(index + 2)?);
        }

        debug!(products = products.len(), "parsed catalog export");
        Ok(CatalogSnapshot::assemble(captured_at, products)?)
    }
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    product_id: String,
    bank: String,
    name: String,
    loan_type: String,
    interest_rate: String,
    max_amount: Option<u64>,
    term: String,
    min_age: Option<u8>,
    max_age: Option<u8>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    home_ownership: Option<String>,
    min_income: Option<u64>,
    min_credit_score: Option<u16>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    required_documents: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    collateral_types: Option<String>,
    rate_types: String,
    ltv_ratio: u8,
    dsr_relief: bool,
    mobile_application: bool,
    youth_preference: bool,
    preferential_rate: Option<f64>,
    simplified_documentation: bool,
}

impl ProductRow {
    fn into_product(self, line: usize) -> Result<LoanProduct, ImportError> {
        let kind = LoanKind::from_label(&self.loan_type).ok_or_else(|| {
            ImportError::UnknownLoanType {
                line,
                label: self.loan_type.clone(),
            }
        })?;
        let interest_rate = InterestRateRange::parse(&self.interest_rate).ok_or_else(|| {
            ImportError::MalformedInterestRate {
                line,
                text: self.interest_rate.clone(),
            }
        })?;
        let home_ownership = match self.home_ownership.as_deref() {
            Some(label) => Some(HomeOwnership::from_label(label).ok_or_else(|| {
                ImportError::UnknownHomeOwnership {
                    line,
                    label: label.to_string(),
                }
            })?),
            None => None,
        };

        let mut rate_types = BTreeSet::new();
        for label in split_list(&self.rate_types) {
            let rate_type =
                RateType::from_label(label).ok_or_else(|| ImportError::UnknownRateType {
                    line,
                    label: label.to_string(),
                })?;
            rate_types.insert(rate_type);
        }

        Ok(LoanProduct {
            id: ProductId(self.product_id),
            bank: self.bank,
            name: self.name,
            kind,
            interest_rate,
            max_amount: self.max_amount,
            term: self.term,
            qualification: Qualification {
                min_age: self.min_age,
                max_age: self.max_age,
                home_ownership,
                min_income: self.min_income,
                min_credit_score: self.min_credit_score,
            },
            required_documents: collect_list(self.required_documents.as_deref()),
            eligible_collateral_types: collect_list(self.collateral_types.as_deref()),
            rate_types,
            ltv_ratio: self.ltv_ratio,
            dsr_relief: self.dsr_relief,
            mobile_application: self.mobile_application,
            youth_preference: self.youth_preference,
            preferential_rate: self.preferential_rate,
            simplified_documentation: self.simplified_documentation,
        })
    }
}

/// Multi-valued CSV columns use `|` separators.
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

fn collect_list(raw: Option<&str>) -> BTreeSet<String> {
    raw.map(|value| split_list(value).map(str::to_string).collect())
        .unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
