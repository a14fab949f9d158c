//! Filename-convention pairing of base and final vector files.

use crate::config::MatchConfig;
use crate::error::ScoreError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// The two role slots of one pair key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairFiles {
    /// Filename registered for the base role, if any.
    pub base: Option<String>,
    /// Filename registered for the final role, if any.
    pub final_file: Option<String>,
}

impl PairFiles {
    /// Whether both roles are present.
    pub fn is_complete(&self) -> bool {
        self.base.is_some() && self.final_file.is_some()
    }
}

/// Groups a vector directory into (key, roles) pairs.
pub struct PairMatcher {
    config: MatchConfig,
}

impl PairMatcher {
    /// Create a matcher with the given naming conventions.
    pub fn new(config: MatchConfig) -> Result<Self, ScoreError> {
        config.validate().map_err(ScoreError::Config)?;
        Ok(Self { config })
    }

    /// Classify one filename. Returns the (key, is_final) routing, or
    /// `None` when the name matches neither convention.
    ///
    /// The final-marker test runs first: final files typically also end
    /// with the base suffix, and the marker is the distinguishing
    /// feature.
    pub fn classify(&self, filename: &str) -> Option<(String, bool)> {
        if let Some(idx) = filename.find(&self.config.final_marker) {
            return Some((filename[..idx].trim().to_string(), true));
        }
        if let Some(stem) = filename.strip_suffix(&self.config.base_suffix) {
            return Some((stem.to_string(), false));
        }
        None
    }

    /// Scan `dir` and build the complete key → roles mapping before any
    /// scoring happens.
    ///
    /// Only regular `.txt` files are considered, non-recursively; the
    /// listing is sorted so discovery order is deterministic. Keys are
    /// returned in first-appearance order. On a (key, role) collision the
    /// later file wins and a warning is logged.
    pub fn scan(&self, dir: &Path) -> Result<Vec<(String, PairFiles)>, ScoreError> {
        if !dir.is_dir() {
            return Err(ScoreError::MissingInputDir(dir.to_path_buf()));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".txt") {
                names.push(name);
            }
        }
        names.sort();

        let mut order: Vec<String> = Vec::new();
        let mut pairs: HashMap<String, PairFiles> = HashMap::new();

        for name in names {
            let Some((key, is_final)) = self.classify(&name) else {
                debug!("ignoring unmatched filename: {}", name);
                continue;
            };

            let entry = pairs.entry(key.clone()).or_insert_with(|| {
                order.push(key.clone());
                PairFiles::default()
            });

            let slot = if is_final {
                &mut entry.final_file
            } else {
                &mut entry.base
            };
            if let Some(previous) = slot.replace(name.clone()) {
                // Last write wins; the sorted scan keeps this stable.
                warn!(
                    "pair '{}': {} replaces earlier {} for the same role",
                    key, name, previous
                );
            }
        }

        Ok(order
            .into_iter()
            .map(|key| {
                let files = pairs.remove(&key).unwrap_or_default();
                (key, files)
            })
            .collect())
    }
}
