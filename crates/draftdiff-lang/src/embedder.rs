//! Embedding implementations: signed feature hashing and a test mock.

use crate::LangError;
use draftdiff_domain::{Embedder, EmbeddingVector};

/// Deterministic bag-of-words embedder using signed feature hashing.
///
/// Each whitespace token is lowercased and FNV-1a hashed; the hash picks a
/// component and a sign, and occurrences accumulate. Not a semantic model,
/// but it satisfies the `Embedder` contract (fixed dimension, stable
/// across runs) and makes identical normalized texts embed identically.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    /// Default output dimensionality.
    pub const DEFAULT_DIMENSION: usize = 256;

    /// Create an embedder with the given output dimension.
    pub fn new(dimension: usize) -> Result<Self, LangError> {
        if dimension == 0 {
            return Err(LangError::ZeroDimension);
        }
        Ok(Self { dimension })
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self {
            dimension: Self::DEFAULT_DIMENSION,
        }
    }
}

/// 64-bit FNV-1a.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

impl Embedder for HashEmbedder {
    type Error = LangError;

    fn embed(&self, text: &str) -> Result<EmbeddingVector, Self::Error> {
        let mut values = vec![0.0f32; self.dimension];
        for token in text.split_whitespace() {
            let hash = fnv1a(token.to_lowercase().as_bytes());
            let index = (hash % self.dimension as u64) as usize;
            let sign = if hash & (1 << 63) == 0 { 1.0 } else { -1.0 };
            values[index] += sign;
        }
        Ok(EmbeddingVector::new(values))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Embedder returning a fixed vector for every input.
///
/// Deterministic test double, in the spirit of a mock provider: lets
/// pipeline tests assert on exact file contents without caring about
/// hashing.
#[derive(Debug, Clone)]
pub struct MockEmbedder {
    values: Vec<f32>,
}

impl MockEmbedder {
    /// Create a mock that answers every request with `values`.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }
}

impl Embedder for MockEmbedder {
    type Error = LangError;

    fn embed(&self, _text: &str) -> Result<EmbeddingVector, Self::Error> {
        Ok(EmbeddingVector::new(self.values.clone()))
    }

    fn dimension(&self) -> usize {
        self.values.len()
    }
}
