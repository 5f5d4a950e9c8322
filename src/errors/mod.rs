use std::path::Path;

use anyhow::Context as _;
use thiserror::Error;

/// Failures that end a rating run
#[derive(Debug, Error)]
pub enum RatingError {
    #[error("contest source unavailable at {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },

    #[error("contest source {path} contains no contest records")]
    EmptySource { path: String },

    #[error("contest at position {position} is earlier than its predecessor")]
    OutOfOrder { position: usize },

    #[error("invalid rating settings: {0}")]
    InvalidSettings(String),
}

impl RatingError {
    pub fn source_unavailable(path: &Path, reason: impl ToString) -> Self {
        RatingError::SourceUnavailable {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to export errors
pub fn export_context(path: &Path) -> String {
    format!("Failed to write export: {}", path.display())
}

/// Wrap result with export context
pub fn with_export_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| export_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
