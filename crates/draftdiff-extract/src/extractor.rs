//! Path-to-cleaned-text extraction entry point.

use crate::cleaner::Cleaner;
use crate::config::CleanConfig;
use crate::error::ExtractError;
use crate::format::DocumentFormat;
use std::path::Path;
use tracing::debug;

/// Extracts and cleans one document per call.
///
/// Holds the configured [`Cleaner`]; format dispatch happens per path.
/// Temp/lock files are expected to be filtered by batch discovery
/// upstream, not here.
pub struct DocumentExtractor {
    cleaner: Cleaner,
}

impl DocumentExtractor {
    /// Create an extractor with the given cleaning configuration.
    pub fn new(config: &CleanConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            cleaner: Cleaner::new(config)?,
        })
    }

    /// Whether the path's extension maps to a supported format.
    pub fn supported(path: &Path) -> bool {
        DocumentFormat::from_path(path).is_ok()
    }

    /// Extract the raw paragraph units of the document, uncleaned.
    ///
    /// A missing file fails with [`ExtractError::NotFound`] before any
    /// parsing is attempted.
    pub fn extract_raw(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        if !path.exists() {
            return Err(ExtractError::NotFound(path.to_path_buf()));
        }
        let format = DocumentFormat::from_path(path)?;
        debug!("extracting {} as {:?}", path.display(), format);
        format.read_units(path)
    }

    /// Extract and clean, returning the surviving units joined by
    /// newlines.
    pub fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        let units = self.extract_raw(path)?;
        Ok(self.cleaner.clean_to_text(units))
    }

    /// The configured cleaner.
    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }
}
