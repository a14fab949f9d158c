//! Scored pair results.

/// One scored (base, final) document pair.
///
/// Records are produced only for pairs where both roles were present and
/// the similarity computation succeeded; their order follows the discovery
/// order of pair keys during the directory scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityRecord {
    /// The pair key shared by the base and final documents.
    pub key: String,

    /// Cosine similarity between the two embedding vectors, in [-1, 1].
    pub score: f64,
}

impl SimilarityRecord {
    /// Create a record for a scored pair.
    pub fn new(key: impl Into<String>, score: f64) -> Self {
        Self {
            key: key.into(),
            score,
        }
    }

    /// The similarity in the fixed six-decimal wire format.
    pub fn formatted_score(&self) -> String {
        format!("{:.6}", self.score)
    }
}
