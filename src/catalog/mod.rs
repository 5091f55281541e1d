//! Loan-product catalog: domain types, snapshot assembly, and CSV ingest.
//!
//! A snapshot is the unit the recommendation engine computes against. It is
//! validated once at assembly time (unique ids, LTV bounds) so downstream
//! code never revisits those checks.

pub mod domain;
pub mod import;

pub use domain::{
    CatalogError, CatalogSnapshot, HomeOwnership, InterestRateRange, LoanKind, LoanProduct,
    ProductId, Qualification, RateType,
};
pub use import::{CatalogImporter, ImportError};
