//! Application configuration, aggregating the per-crate sections.

use crate::error::{CliError, Result};
use draftdiff_extract::CleanConfig;
use draftdiff_lang::HashEmbedder;
use draftdiff_pipeline::PipelineConfig;
use draftdiff_score::MatchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table (default)
    Table,
    /// JSON
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table
    }
}

/// Settings for the embedding stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Dimension of the produced vectors.
    pub dimension: usize,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            dimension: HashEmbedder::DEFAULT_DIMENSION,
        }
    }
}

/// Top-level application configuration.
///
/// Every section has working defaults, so a config file is optional and
/// may supply any subset of sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document cleaning rules.
    pub clean: CleanConfig,

    /// Pipeline directory and suffix conventions.
    pub pipeline: PipelineConfig,

    /// Vector-file pairing conventions.
    pub matching: MatchConfig,

    /// Embedding settings.
    pub embedding: EmbeddingSettings,

    /// Default output format.
    pub output_format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from the given file, or defaults when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                debug!("loading configuration from {}", path.display());
                let contents = std::fs::read_to_string(path)?;
                toml::from_str(&contents)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate every configuration section.
    pub fn validate(&self) -> Result<()> {
        self.clean.validate().map_err(CliError::Config)?;
        self.pipeline.validate().map_err(CliError::Config)?;
        self.matching.validate().map_err(CliError::Config)?;
        if self.embedding.dimension == 0 {
            return Err(CliError::Config(
                "embedding.dimension must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [embedding]
            dimension = 64

            [matching]
            final_marker = " - Revised_"
            "#,
        )
        .unwrap();
        assert_eq!(config.embedding.dimension, 64);
        assert_eq!(config.matching.final_marker, " - Revised_");
        assert_eq!(
            config.matching.base_suffix,
            "_normalized_tokenized_vectorized.txt"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let mut config = AppConfig::default();
        config.embedding.dimension = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = AppConfig::load(Some(Path::new("/no/such/config.toml")));
        assert!(err.is_err());
    }

    #[test]
    fn test_load_none_uses_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.pipeline.results_file, "cosine_similarity_output.txt");
    }
}
