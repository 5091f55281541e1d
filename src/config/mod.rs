use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::recommendation::RecommendationConfig;

/// Distinguishes runtime behavior for different stages of the tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    /// Optional JSON file overriding the built-in scoring weights and
    /// affordability policy.
    pub rubric_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let rubric_path = env::var("APP_RUBRIC_FILE").ok().map(PathBuf::from);

        Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            rubric_path,
        }
    }

    /// Rubric override from `APP_RUBRIC_FILE`, or `None` when unset. Partial
    /// files are fine; omitted sections keep their defaults.
    pub fn load_rubric(&self) -> Result<Option<RecommendationConfig>, ConfigError> {
        let Some(path) = &self.rubric_path else {
            return Ok(None);
        };

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::RubricRead {
            path: path.clone(),
            source,
        })?;
        let rubric =
            serde_json::from_str(&raw).map_err(|source| ConfigError::RubricFormat {
                path: path.clone(),
                source,
            })?;
        Ok(Some(rubric))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    RubricRead {
        path: PathBuf,
        source: std::io::Error,
    },
    RubricFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::RubricRead { path, .. } => {
                write!(f, "could not read rubric file {}", path.display())
            }
            ConfigError::RubricFormat { path, .. } => {
                write!(f, "rubric file {} is not valid JSON", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::RubricRead { source, .. } => Some(source),
            ConfigError::RubricFormat { source, .. } => Some(source),
        }
    }
}
