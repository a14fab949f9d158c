//! The full-pipeline run command.

use crate::cli::RunArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::Formatter;
use draftdiff_lang::{HashEmbedder, RuleLemmatizer, UnicodeTokenizer};
use draftdiff_pipeline::{ExtractStage, NormalizeStage, TokenizeStage, VectorizeStage};
use draftdiff_score::{MatchConfig, Scorer};

/// Execute the run command: extract, normalize, tokenize, vectorize and
/// score in sequence, with intermediate directories under the work dir.
pub fn execute_run(args: &RunArgs, config: &AppConfig, formatter: &Formatter) -> Result<()> {
    let layout = config.pipeline.rooted(&args.work_dir);

    let report = ExtractStage::new(&config.clean)?.run(&args.input, &layout.extracted_dir)?;
    println!("{}", formatter.stage_summary("extract", &report));

    let report = NormalizeStage::new(RuleLemmatizer::new(), layout.normalized_suffix.clone())
        .run(&layout.extracted_dir, &layout.normalized_dir)?;
    println!("{}", formatter.stage_summary("normalize", &report));

    let report = TokenizeStage::new(UnicodeTokenizer, layout.tokenized_suffix.clone())
        .run(&layout.normalized_dir, &layout.tokenized_dir)?;
    println!("{}", formatter.stage_summary("tokenize", &report));

    let report = VectorizeStage::new(
        HashEmbedder::new(config.embedding.dimension)?,
        layout.vectorized_suffix.clone(),
    )
    .run(&layout.tokenized_dir, &layout.vectorized_dir)?;
    println!("{}", formatter.stage_summary("vectorize", &report));

    // Pair on the suffix chain the stages actually produced, not the
    // statically configured one.
    let scorer = Scorer::new(MatchConfig {
        final_marker: config.matching.final_marker.clone(),
        base_suffix: layout.base_suffix(),
    })?;
    let output = layout.results_path();
    let records = scorer.score_directory(&layout.vectorized_dir, &output)?;

    println!("{}", formatter.format_records(&records)?);
    println!(
        "{}",
        formatter.success(&format!(
            "Wrote {} row(s) to {}",
            records.len(),
            output.display()
        ))
    );
    Ok(())
}
