//! Draftdiff Matcher/Scorer
//!
//! Pairs embedded-vector files by filename convention and scores cosine
//! similarity per (base, final) pair.
//!
//! # Overview
//!
//! The pairing scan visits the full vector directory before any scoring
//! begins, building the complete key → {base, final} mapping, so member
//! files can appear in either order. Scoring is strictly per pair: parse
//! failures, dimension mismatches and zero-norm vectors skip that pair
//! with a logged warning and the batch continues.
//!
//! # Example Usage
//!
//! ```no_run
//! use draftdiff_score::{MatchConfig, Scorer};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scorer = Scorer::new(MatchConfig::default())?;
//! let records = scorer.score_directory(
//!     "Vectorized Data".as_ref(),
//!     "Cosine Similarity Results/cosine_similarity_output.txt".as_ref(),
//! )?;
//! println!("scored {} pair(s)", records.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod matcher;
mod scorer;

#[cfg(test)]
mod tests;

pub use config::MatchConfig;
pub use error::ScoreError;
pub use matcher::{PairFiles, PairMatcher};
pub use scorer::Scorer;
