//! Configuration for the pipeline stages

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory and filename conventions for the pipeline.
///
/// Defaults mirror the original batch layout; the suffixes compose into
/// the naming convention the scorer pairs on
/// (`<stem>_normalized_tokenized_vectorized.txt`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Output directory of the extraction stage.
    pub extracted_dir: PathBuf,

    /// Output directory of the normalization stage.
    pub normalized_dir: PathBuf,

    /// Output directory of the tokenization stage.
    pub tokenized_dir: PathBuf,

    /// Output directory of the vectorization stage.
    pub vectorized_dir: PathBuf,

    /// Directory holding the similarity results file.
    pub results_dir: PathBuf,

    /// Name of the similarity results file.
    pub results_file: String,

    /// Filename suffix appended by the normalization stage.
    pub normalized_suffix: String,

    /// Filename suffix appended by the tokenization stage.
    pub tokenized_suffix: String,

    /// Filename suffix appended by the vectorization stage.
    pub vectorized_suffix: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            extracted_dir: PathBuf::from("Extracted Data"),
            normalized_dir: PathBuf::from("Normalized Data"),
            tokenized_dir: PathBuf::from("Tokenized Data"),
            vectorized_dir: PathBuf::from("Vectorized Data"),
            results_dir: PathBuf::from("Cosine Similarity Results"),
            results_file: "cosine_similarity_output.txt".to_string(),
            normalized_suffix: "_normalized".to_string(),
            tokenized_suffix: "_tokenized".to_string(),
            vectorized_suffix: "_vectorized".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, suffix) in [
            ("normalized_suffix", &self.normalized_suffix),
            ("tokenized_suffix", &self.tokenized_suffix),
            ("vectorized_suffix", &self.vectorized_suffix),
        ] {
            if suffix.is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }
        if self.results_file.is_empty() {
            return Err("results_file must not be empty".to_string());
        }
        Ok(())
    }

    /// The same layout with every directory resolved under `base`.
    pub fn rooted(&self, base: &Path) -> Self {
        Self {
            extracted_dir: base.join(&self.extracted_dir),
            normalized_dir: base.join(&self.normalized_dir),
            tokenized_dir: base.join(&self.tokenized_dir),
            vectorized_dir: base.join(&self.vectorized_dir),
            results_dir: base.join(&self.results_dir),
            ..self.clone()
        }
    }

    /// Full path of the similarity results file.
    pub fn results_path(&self) -> PathBuf {
        self.results_dir.join(&self.results_file)
    }

    /// The filename suffix of fully vectorized base files, as matched by
    /// the scorer's pairing convention.
    pub fn base_suffix(&self) -> String {
        format!(
            "{}{}{}.txt",
            self.normalized_suffix, self.tokenized_suffix, self.vectorized_suffix
        )
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
