//! Trait definitions for the external language capabilities
//!
//! These traits define the boundaries between the pipeline and the
//! lemmatization/tokenization/embedding machinery. Implementations live in
//! other crates (draftdiff-lang ships the reference ones).

use crate::vector::EmbeddingVector;

/// One token as seen by a [`Lemmatizer`]: its normalized lemma plus the
/// flags the pipeline filters on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemmaToken {
    /// Canonical dictionary form of the token, lowercase.
    pub lemma: String,

    /// High-frequency function word to be excluded from normalized text.
    pub is_stopword: bool,

    /// Token consists solely of punctuation.
    pub is_punctuation: bool,

    /// Token is whitespace only.
    pub is_space: bool,
}

impl LemmaToken {
    /// Whether this token survives normalization: all three exclusion
    /// flags are false.
    pub fn is_content(&self) -> bool {
        !self.is_stopword && !self.is_punctuation && !self.is_space
    }
}

/// Reduces text to a sequence of lemmas with stopword/punctuation/space
/// flags.
///
/// Called once per whole cleaned document; the pipeline keeps tokens where
/// [`LemmaToken::is_content`] holds and joins them with single spaces,
/// preserving source order.
pub trait Lemmatizer {
    /// Error type for lemmatization operations
    type Error;

    /// Lemmatize the given (already lowercased) text.
    fn lemmatize(&self, text: &str) -> Result<Vec<LemmaToken>, Self::Error>;
}

/// Splits text into surface tokens.
///
/// Whitespace-only tokens are filtered by implementations; surviving
/// tokens keep their surface form.
pub trait Tokenizer {
    /// Error type for tokenization operations
    type Error;

    /// Tokenize the given text.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, Self::Error>;
}

/// Maps arbitrary-length text to a fixed-dimension embedding vector.
///
/// The dimension is implementation-defined and must stay constant across a
/// run for pairwise comparison to be meaningful.
pub trait Embedder {
    /// Error type for embedding operations
    type Error;

    /// Embed the given text.
    fn embed(&self, text: &str) -> Result<EmbeddingVector, Self::Error>;

    /// The fixed output dimensionality D.
    fn dimension(&self) -> usize;
}
