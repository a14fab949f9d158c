//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction error
    #[error(transparent)]
    Extract(#[from] draftdiff_extract::ExtractError),

    /// Pipeline stage error
    #[error(transparent)]
    Pipeline(#[from] draftdiff_pipeline::PipelineError),

    /// Matching/scoring error
    #[error(transparent)]
    Score(#[from] draftdiff_score::ScoreError),

    /// Language capability error
    #[error("Language capability error: {0}")]
    Lang(#[from] draftdiff_lang::LangError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
