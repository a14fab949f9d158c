//! Per-pair cosine scoring and the results table.

use crate::config::MatchConfig;
use crate::error::ScoreError;
use crate::matcher::{PairFiles, PairMatcher};
use draftdiff_domain::{EmbeddingVector, SimilarityRecord, VectorError};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Header row of the similarity results table.
pub const RESULTS_HEADER: &str = "File Name,Cosine Similarity";

/// Scores every complete pair of a vector directory into a results table.
pub struct Scorer {
    matcher: PairMatcher,
}

impl Scorer {
    /// Create a scorer with the given pairing conventions.
    pub fn new(config: MatchConfig) -> Result<Self, ScoreError> {
        Ok(Self {
            matcher: PairMatcher::new(config)?,
        })
    }

    /// The pairing half of the scorer, for callers that want to present
    /// the matched pairs before scoring.
    pub fn matcher(&self) -> &PairMatcher {
        &self.matcher
    }

    /// Score the directory and write the results table to `output`.
    ///
    /// The output file is truncated at start of run, so prior contents
    /// never survive across runs. One row is written per fully scored
    /// pair, in pair discovery order; per-pair failures are logged and
    /// skipped without aborting the batch.
    pub fn score_directory(
        &self,
        dir: &Path,
        output: &Path,
    ) -> Result<Vec<SimilarityRecord>, ScoreError> {
        let pairs = self.matcher.scan(dir)?;
        self.score_pairs(dir, &pairs, output)
    }

    /// Score an already-scanned pair listing (see [`PairMatcher::scan`]).
    pub fn score_pairs(
        &self,
        dir: &Path,
        pairs: &[(String, PairFiles)],
        output: &Path,
    ) -> Result<Vec<SimilarityRecord>, ScoreError> {
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut table = BufWriter::new(fs::File::create(output)?);
        writeln!(table, "{}", RESULTS_HEADER)?;

        let mut records = Vec::new();
        for (key, files) in pairs {
            let (Some(base), Some(final_file)) = (&files.base, &files.final_file) else {
                debug!("pair '{}' incomplete, excluded from results", key);
                continue;
            };

            match self.score_pair(dir, key, base, final_file) {
                Ok(record) => {
                    writeln!(table, "{},{}", record.key, record.formatted_score())?;
                    records.push(record);
                }
                Err(e) => warn!("skipping pair '{}': {}", key, e),
            }
        }
        table.flush()?;

        info!(
            "scored {} of {} pair key(s) into {}",
            records.len(),
            pairs.len(),
            output.display()
        );
        Ok(records)
    }

    fn score_pair(
        &self,
        dir: &Path,
        key: &str,
        base: &str,
        final_file: &str,
    ) -> Result<SimilarityRecord, ScoreError> {
        let base_vec = load_vector(&dir.join(base))?;
        let final_vec = load_vector(&dir.join(final_file))?;

        if base_vec.dimension() != final_vec.dimension() {
            return Err(ScoreError::DimensionMismatch {
                key: key.to_string(),
                base_dim: base_vec.dimension(),
                final_dim: final_vec.dimension(),
            });
        }

        let score = base_vec.cosine(&final_vec).map_err(|e| match e {
            VectorError::ZeroNorm => ScoreError::ZeroNorm {
                key: key.to_string(),
            },
            other => ScoreError::Parse {
                path: dir.join(base),
                message: other.to_string(),
            },
        })?;

        Ok(SimilarityRecord::new(key, score))
    }
}

/// Load one serialized vector: a single line of comma-separated decimals.
pub fn load_vector(path: &Path) -> Result<EmbeddingVector, ScoreError> {
    let text = fs::read_to_string(path)?;
    text.parse().map_err(|e: VectorError| ScoreError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_vector() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.txt");
        fs::write(&path, "1,0,0.5").unwrap();
        let v = load_vector(&path).unwrap();
        assert_eq!(v.values(), &[1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_load_vector_empty_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.txt");
        fs::write(&path, "").unwrap();
        assert!(matches!(
            load_vector(&path),
            Err(ScoreError::Parse { .. })
        ));
    }
}
