//! Configuration for the Cleaner

use serde::{Deserialize, Serialize};

/// Configuration for paragraph cleaning.
///
/// Passed into the [`Cleaner`](crate::Cleaner) at construction time so
/// batches with different conventions can run side by side; nothing here
/// is process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Lowercase substrings that mark a header unit as boilerplate.
    /// Only the first two units of a document are tested against these.
    pub header_keywords: Vec<String>,

    /// Letters allowed to open an identifier token. An identifier is one
    /// of these letters followed by exactly eight digits, matched
    /// case-insensitively as a whole word.
    pub id_letters: String,
}

impl Default for CleanConfig {
    /// Defaults matching the original submission corpus: feedback/AI
    /// annotations in headers, and `R`-prefixed identifiers.
    fn default() -> Self {
        Self {
            header_keywords: vec![
                "feedback".to_string(),
                "ai assistance".to_string(),
                "ai declaration".to_string(),
                "reviewed by".to_string(),
            ],
            id_letters: "r".to_string(),
        }
    }
}

impl CleanConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.id_letters.is_empty() {
            return Err("id_letters must not be empty".to_string());
        }
        if !self.id_letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err("id_letters must contain ASCII letters only".to_string());
        }
        if self.header_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err("header_keywords must not contain blank entries".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
