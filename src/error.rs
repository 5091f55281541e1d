use crate::catalog::{CatalogError, ImportError};
use crate::config::ConfigError;
use crate::recommendation::RecommendationError;
use crate::telemetry::TelemetryError;

/// Top-level error for the command-line binary, aggregating every subsystem
/// failure into one displayable kind.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog import error: {0}")]
    Import(#[from] ImportError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("recommendation error: {0}")]
    Recommendation(#[from] RecommendationError),
}
