//! Loan-product recommendation engine: rank bank offers against a borrower's
//! credit profile and price out what the top offer supports.
//!
//! The crate splits into a side-effect-free core ([`recommendation`]) fed by
//! immutable catalog snapshots ([`catalog`]), with configuration, telemetry,
//! and error plumbing for the binary around it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod recommendation;
pub mod telemetry;
