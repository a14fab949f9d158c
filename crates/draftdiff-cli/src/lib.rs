//! Draftdiff CLI library.
//!
//! Command-line driver for the draft/final similarity pipeline.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::{AppConfig, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
