//! The score command.

use crate::cli::ScoreArgs;
use crate::config::AppConfig;
use crate::error::Result;
use crate::output::Formatter;
use draftdiff_score::{MatchConfig, Scorer};

/// Execute the score command.
pub fn execute_score(args: &ScoreArgs, config: &AppConfig, formatter: &Formatter) -> Result<()> {
    let scorer = Scorer::new(MatchConfig {
        final_marker: config.matching.final_marker.clone(),
        base_suffix: config.matching.base_suffix.clone(),
    })?;

    let pairs = scorer.matcher().scan(&args.input)?;
    println!("{}", formatter.format_pairs(&pairs)?);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.pipeline.results_path());
    let records = scorer.score_pairs(&args.input, &pairs, &output)?;

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
