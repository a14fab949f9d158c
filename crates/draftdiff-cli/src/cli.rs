//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Draftdiff CLI - score similarity between draft and final documents.
#[derive(Debug, Parser)]
#[command(name = "draftdiff")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract and clean document text
    Extract(StageArgs),

    /// Normalize cleaned text to lemma form
    Normalize(StageArgs),

    /// Tokenize normalized text, one token per line
    Tokenize(StageArgs),

    /// Embed token files into fixed-dimension vectors
    Vectorize(StageArgs),

    /// Pair vector files and score cosine similarity
    Score(ScoreArgs),

    /// Run the full pipeline: extract through score
    Run(RunArgs),
}

/// Arguments shared by the four stage commands.
#[derive(Debug, Parser)]
pub struct StageArgs {
    /// Input directory
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory (cleared at start of run)
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Directory of serialized embedding vectors
    #[arg(short, long)]
    pub input: PathBuf,

    /// Results file (defaults to the configured results path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Directory of submitted documents
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for intermediate stage outputs and results
    #[arg(short, long, default_value = ".")]
    pub work_dir: PathBuf,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
