//! Draftdiff CLI - batch similarity scoring of draft and final documents.

use clap::Parser;
use draftdiff_cli::commands;
use draftdiff_cli::{AppConfig, Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> draftdiff_cli::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let format = cli.format.map(Into::into).unwrap_or(config.output_format);
    let formatter = Formatter::new(format, !cli.no_color);

    match &cli.command {
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter),
        Command::Normalize(args) => commands::execute_normalize(args, &config, &formatter),
        Command::Tokenize(args) => commands::execute_tokenize(args, &config, &formatter),
        Command::Vectorize(args) => commands::execute_vectorize(args, &config, &formatter),
        Command::Score(args) => commands::execute_score(args, &config, &formatter),
        Command::Run(args) => commands::execute_run(args, &config, &formatter),
    }
}
