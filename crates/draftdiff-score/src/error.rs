//! Error types for the Matcher/Scorer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during pairing and scoring
#[derive(Error, Debug)]
pub enum ScoreError {
    /// Vector directory missing at start of run; fatal
    #[error("input directory not found: {0}")]
    MissingInputDir(PathBuf),

    /// A vector file could not be parsed; skips that pair only
    #[error("failed to parse vector file {path}: {message}")]
    Parse {
        /// Path of the malformed vector file
        path: PathBuf,
        /// Underlying parse diagnostic
        message: String,
    },

    /// Paired vectors have unequal lengths; skips that pair only
    #[error("dimension mismatch for '{key}': {base_dim} vs {final_dim}")]
    DimensionMismatch {
        /// Pair key
        key: String,
        /// Base vector dimension
        base_dim: usize,
        /// Final vector dimension
        final_dim: usize,
    },

    /// A paired vector has zero norm, so cosine similarity is undefined;
    /// skips that pair only
    #[error("zero-norm vector in pair '{key}'")]
    ZeroNorm {
        /// Pair key
        key: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
