//! Error types for the pipeline stages

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running a pipeline stage
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input directory missing at stage start; the only fatal condition
    #[error("input directory not found: {0}")]
    MissingInputDir(PathBuf),

    /// Extraction error for a single document
    #[error(transparent)]
    Extract(#[from] draftdiff_extract::ExtractError),

    /// A language capability (lemmatizer/tokenizer/embedder) failed
    #[error("language capability error: {0}")]
    Capability(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
