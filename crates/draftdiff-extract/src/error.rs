//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Source file does not exist; raised before any parsing is attempted
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Extension does not map to a supported container format
    #[error("unsupported document format: '{0}'")]
    UnsupportedFormat(String),

    /// The file exists but its contents could not be parsed
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// Path of the unreadable document
        path: PathBuf,
        /// Underlying parser diagnostic
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ExtractError {
    /// Build a parse error for the given document.
    pub(crate) fn parse(path: &std::path::Path, message: impl ToString) -> Self {
        ExtractError::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}
