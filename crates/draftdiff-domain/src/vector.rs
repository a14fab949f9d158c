//! Embedding vector value type and the cosine similarity primitive.

use std::fmt;
use std::str::FromStr;

/// A fixed-dimension embedding vector produced by an [`Embedder`].
///
/// All vectors compared against each other within a run must share the same
/// dimensionality; a mismatch is a detectable, per-pair condition rather
/// than a panic.
///
/// [`Embedder`]: crate::traits::Embedder
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingVector {
    values: Vec<f32>,
}

impl EmbeddingVector {
    /// Wrap raw component values into a vector.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Number of components (the dimensionality D).
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Component values in order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Euclidean norm, accumulated in f64.
    pub fn norm(&self) -> f64 {
        self.values
            .iter()
            .map(|v| f64::from(*v) * f64::from(*v))
            .sum::<f64>()
            .sqrt()
    }

    /// Cosine similarity with another vector: dot product over the product
    /// of Euclidean norms, in [-1, 1].
    ///
    /// Fails with [`VectorError::DimensionMismatch`] when the lengths
    /// differ and [`VectorError::ZeroNorm`] when either norm is zero; the
    /// caller decides how those conditions surface.
    pub fn cosine(&self, other: &Self) -> Result<f64, VectorError> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }

        let dot: f64 = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| f64::from(*a) * f64::from(*b))
            .sum();

        let norm_left = self.norm();
        let norm_right = other.norm();
        if norm_left == 0.0 || norm_right == 0.0 {
            return Err(VectorError::ZeroNorm);
        }

        Ok(dot / (norm_left * norm_right))
    }

    /// Serialize as a single line of comma-separated decimal values.
    pub fn to_csv(&self) -> String {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        parts.join(",")
    }
}

impl FromStr for EmbeddingVector {
    type Err = VectorError;

    /// Parse the wire form: one line of comma-separated decimal literals.
    /// Only the first line is read; a trailing newline is not required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.lines().next().unwrap_or("").trim();
        if line.is_empty() {
            return Err(VectorError::Empty);
        }

        let mut values = Vec::new();
        for (position, token) in line.split(',').enumerate() {
            let value = token.trim().parse::<f32>().map_err(|_| VectorError::InvalidValue {
                position,
                token: token.trim().to_string(),
            })?;
            values.push(value);
        }
        Ok(Self { values })
    }
}

/// Errors arising from vector parsing or comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// The serialized form contained no values.
    Empty,

    /// A component could not be parsed as a decimal literal.
    InvalidValue {
        /// Zero-based position of the offending component.
        position: usize,
        /// The unparseable token.
        token: String,
    },

    /// The two vectors have different dimensionality.
    DimensionMismatch {
        /// Left operand dimension.
        left: usize,
        /// Right operand dimension.
        right: usize,
    },

    /// One of the operands has a Euclidean norm of zero, so cosine
    /// similarity is undefined.
    ZeroNorm,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::Empty => write!(f, "empty vector"),
            VectorError::InvalidValue { position, token } => {
                write!(f, "invalid value '{}' at position {}", token, position)
            }
            VectorError::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch ({} vs {})", left, right)
            }
            VectorError::ZeroNorm => write!(f, "zero-norm vector"),
        }
    }
}

impl std::error::Error for VectorError {}
