//! Draftdiff Domain Layer
//!
//! This crate contains the core value types and trait interfaces for the
//! draft/final similarity pipeline. It has no external dependencies;
//! infrastructure implementations live in the other crates.
//!
//! ## Key Concepts
//!
//! - **EmbeddingVector**: fixed-dimension numeric representation of a text,
//!   with the cosine similarity primitive
//! - **LemmaToken**: one normalized token plus its stopword/punctuation/space
//!   flags, as produced by a `Lemmatizer`
//! - **SimilarityRecord**: a scored (pair key, cosine similarity) result
//! - **Capability traits**: `Lemmatizer`, `Tokenizer`, `Embedder` — the
//!   seams behind which the language/model machinery sits

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod record;
pub mod traits;
pub mod vector;

// Re-exports for convenience
pub use record::SimilarityRecord;
pub use traits::{Embedder, LemmaToken, Lemmatizer, Tokenizer};
pub use vector::{EmbeddingVector, VectorError};
