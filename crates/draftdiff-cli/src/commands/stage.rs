//! The four per-stage commands.

use crate::cli::StageArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::Formatter;
use draftdiff_lang::{HashEmbedder, RuleLemmatizer, UnicodeTokenizer};
use draftdiff_pipeline::{ExtractStage, NormalizeStage, TokenizeStage, VectorizeStage};

/// Execute the extract command.
pub fn execute_extract(
    args: &StageArgs,
    config: &AppConfig,
    formatter: &Formatter,
) -> Result<()> {
    let stage = ExtractStage::new(&config.clean)?;
    let report = stage.run(&args.input, &args.output)?;
    println!("{}", formatter.stage_summary("extract", &report));
    Ok(())
}

/// Execute the normalize command.
pub fn execute_normalize(
    args: &StageArgs,
    config: &AppConfig,
    formatter: &Formatter,
) -> Result<()> {
    let stage = NormalizeStage::new(
        RuleLemmatizer::new(),
        config.pipeline.normalized_suffix.clone(),
    );
    let report = stage.run(&args.input, &args.output)?;
    println!("{}", formatter.stage_summary("normalize", &report));
    Ok(())
}

/// Execute the tokenize command.
pub fn execute_tokenize(
    args: &StageArgs,
    config: &AppConfig,
    formatter: &Formatter,
) -> Result<()> {
    let stage = TokenizeStage::new(UnicodeTokenizer, config.pipeline.tokenized_suffix.clone());
    let report = stage.run(&args.input, &args.output)?;
    println!("{}", formatter.stage_summary("tokenize", &report));
    Ok(())
}

/// Execute the vectorize command.
pub fn execute_vectorize(
    args: &StageArgs,
    config: &AppConfig,
    formatter: &Formatter,
) -> Result<()> {
    let stage = VectorizeStage::new(
        HashEmbedder::new(config.embedding.dimension)?,
        config.pipeline.vectorized_suffix.clone(),
    );
    let report = stage.run(&args.input, &args.output)?;
    println!("{}", formatter.stage_summary("vectorize", &report));
    Ok(())
}
