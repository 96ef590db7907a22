use thiserror::Error;

/// Errors raised at the boundary: loading, validating and configuring
///
/// Scoring and search themselves never fail.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
