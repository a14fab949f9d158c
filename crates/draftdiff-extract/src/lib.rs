//! Draftdiff Extractor
//!
//! Turns heterogeneous document files into cleaned paragraph text.
//!
//! # Overview
//!
//! The Extractor reads a document in one of three container formats and
//! produces an ordered sequence of non-empty paragraph units, which the
//! Cleaner then scrubs of header boilerplate and identifier-bearing lines.
//!
//! # Architecture
//!
//! ```text
//! Path → DocumentFormat → raw units → Cleaner → cleaned text
//! ```
//!
//! Format boundary rules:
//!
//! - **docx**: one `w:p` paragraph = one unit
//! - **pdf**: pages split into lines, one line = one unit
//! - **html**: one `<p>` element = one unit, tags stripped
//!
//! # Example Usage
//!
//! ```no_run
//! use draftdiff_extract::{CleanConfig, DocumentExtractor};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = DocumentExtractor::new(&CleanConfig::default())?;
//! let text = extractor.extract("submissions/R11749001.docx".as_ref())?;
//! println!("{} cleaned bytes", text.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod cleaner;
mod config;
mod error;
mod extractor;
mod format;

#[cfg(test)]
mod tests;

pub use cleaner::Cleaner;
pub use config::CleanConfig;
pub use error::ExtractError;
pub use extractor::DocumentExtractor;
pub use format::DocumentFormat;
