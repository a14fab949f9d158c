//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use draftdiff_domain::SimilarityRecord;
use draftdiff_pipeline::BatchReport;
use draftdiff_score::PairFiles;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format scored similarity records.
    pub fn format_records(&self, records: &[SimilarityRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_records_json(records),
            OutputFormat::Table => self.format_records_table(records),
        }
    }

    fn format_records_json(&self, records: &[SimilarityRecord]) -> Result<String> {
        let json_records: Vec<serde_json::Value> = records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "file_name": r.key,
                    "cosine_similarity": r.score,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_records)?)
    }

    fn format_records_table(&self, records: &[SimilarityRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok(self.colorize("No pairs scored.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["File Name", "Cosine Similarity"]);
        for record in records {
            builder.push_record([record.key.as_str(), &record.formatted_score()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format the matched-pairs listing produced by a pairing scan.
    pub fn format_pairs(&self, pairs: &[(String, PairFiles)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_pairs: Vec<serde_json::Value> = pairs
                    .iter()
                    .map(|(key, files)| {
                        serde_json::json!({
                            "key": key,
                            "base": files.base,
                            "final": files.final_file,
                            "complete": files.is_complete(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_pairs)?)
            }
            OutputFormat::Table => {
                if pairs.is_empty() {
                    return Ok(self.colorize("No vector files matched.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Key", "Base", "Final"]);
                for (key, files) in pairs {
                    let role = |file: &Option<String>| {
                        file.clone().unwrap_or_else(|| "(missing)".to_string())
                    };
                    builder.push_record([key.as_str(), &role(&files.base), &role(&files.final_file)]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
        }
    }

    /// Format a one-line stage summary.
    pub fn stage_summary(&self, stage: &str, report: &BatchReport) -> String {
        let message = format!(
            "{}: {} file(s) written, {} failure(s)",
            stage,
            report.written.len(),
            report.failures.len()
        );
        if report.is_clean() {
            self.success(&message)
        } else {
            self.warning(&message)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<SimilarityRecord> {
        vec![
            SimilarityRecord::new("Essay A", 0.987654321),
            SimilarityRecord::new("Essay B", 0.5),
        ]
    }

    #[test]
    fn test_table_format_uses_six_decimals() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&records()).unwrap();
        assert!(output.contains("Essay A"));
        assert!(output.contains("0.987654"));
        assert!(output.contains("0.500000"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_records(&records()).unwrap();
        assert!(output.contains("\"file_name\": \"Essay A\""));
        assert!(output.contains("cosine_similarity"));
    }

    #[test]
    fn test_empty_records_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&[]).unwrap();
        assert_eq!(output, "No pairs scored.");
    }

    #[test]
    fn test_no_color_plain_text() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }

    #[test]
    fn test_incomplete_pair_shows_missing_role() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let pairs = vec![(
            "Solo".to_string(),
            PairFiles {
                base: Some("Solo_vec.txt".into()),
                final_file: None,
            },
        )];
        let output = formatter.format_pairs(&pairs).unwrap();
        assert!(output.contains("(missing)"));
    }
}
