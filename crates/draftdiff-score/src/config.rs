//! Configuration for the Matcher/Scorer

use serde::{Deserialize, Serialize};

/// Filename conventions used to pair vector files.
///
/// Both conventions are configuration rather than constants so other
/// batch-naming schemes can be matched without code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Marker substring identifying a "final" file; the pair key is the
    /// filename prefix preceding it, trimmed.
    pub final_marker: String,

    /// Suffix identifying a "base" file; the pair key is the filename
    /// with this suffix stripped.
    pub base_suffix: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            final_marker: " - Final_".to_string(),
            base_suffix: "_normalized_tokenized_vectorized.txt".to_string(),
        }
    }
}

impl MatchConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.final_marker.is_empty() {
            return Err("final_marker must not be empty".to_string());
        }
        if self.base_suffix.is_empty() {
            return Err("base_suffix must not be empty".to_string());
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
