//! Draftdiff Language Capability Layer
//!
//! Reference implementations of the capability traits from
//! `draftdiff-domain`. They are deterministic and self-contained, so the
//! pipeline runs and tests end to end without a model runtime; a
//! model-backed embedder would implement the same `Embedder` trait.
//!
//! # Implementations
//!
//! - [`RuleLemmatizer`]: rule-based English lemmatization with stopword
//!   and punctuation flags
//! - [`UnicodeTokenizer`]: word-boundary tokenization
//! - [`HashEmbedder`]: signed feature hashing into a fixed dimension
//! - [`MockEmbedder`]: fixed-response embedder for tests
//!
//! # Examples
//!
//! ```
//! use draftdiff_lang::UnicodeTokenizer;
//! use draftdiff_domain::Tokenizer;
//!
//! let tokens = UnicodeTokenizer.tokenize("two words").unwrap();
//! assert_eq!(tokens, vec!["two", "words"]);
//! ```

#![warn(missing_docs)]

pub mod embedder;
pub mod lemmatizer;
pub mod tokenizer;

use thiserror::Error;

pub use embedder::{HashEmbedder, MockEmbedder};
pub use lemmatizer::RuleLemmatizer;
pub use tokenizer::UnicodeTokenizer;

/// Errors that can occur in the language capability layer
#[derive(Error, Debug)]
pub enum LangError {
    /// An embedder was configured with dimension zero
    #[error("embedding dimension must be greater than zero")]
    ZeroDimension,

    /// Generic capability error
    #[error("language capability error: {0}")]
    Other(String),
}
