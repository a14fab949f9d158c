//! Draftdiff Pipeline
//!
//! Batch stage runners connecting the extractor and the language
//! capabilities through the filesystem.
//!
//! # Architecture
//!
//! ```text
//! documents → ExtractStage → NormalizeStage → TokenizeStage → VectorizeStage → (scoring)
//! ```
//!
//! Each stage consumes the prior stage's output directory and exclusively
//! owns its own: the output directory is created and cleared of files at
//! the start of every run, so stale results never leak forward. Failures
//! are per item — one bad document is logged and recorded in the
//! [`BatchReport`], and the batch continues.
//!
//! Processing is single-threaded and synchronous; all communication
//! between stages is flat files.

#![warn(missing_docs)]

mod config;
mod discovery;
mod error;
mod stages;

pub use config::PipelineConfig;
pub use discovery::{discover_inputs, prepare_output_dir};
pub use error::PipelineError;
pub use stages::{
    BatchReport, ExtractStage, NormalizeStage, StageFailure, TokenizeStage, VectorizeStage,
};
