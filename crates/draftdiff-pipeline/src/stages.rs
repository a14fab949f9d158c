//! The four batch stages: extract, normalize, tokenize, vectorize.

use crate::discovery::{discover_inputs, prepare_output_dir};
use crate::error::PipelineError;
use draftdiff_domain::{Embedder, Lemmatizer, Tokenizer};
use draftdiff_extract::{CleanConfig, DocumentExtractor, DocumentFormat};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One item that could not be processed; the batch continued without it.
#[derive(Debug)]
pub struct StageFailure {
    /// Source file that failed.
    pub source: PathBuf,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Per-item outcome of a stage run.
///
/// A stage only fails as a whole for setup problems (missing input
/// directory, unusable output directory); everything per-item lands here.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files written, in input order.
    pub written: Vec<PathBuf>,
    /// Items that failed, in input order.
    pub failures: Vec<StageFailure>,
}

impl BatchReport {
    /// Whether every discovered item was processed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, source: &Path, outcome: Result<PathBuf, PipelineError>) {
        match outcome {
            Ok(output) => {
                info!("wrote {}", output.display());
                self.written.push(output);
            }
            Err(e) => {
                warn!("skipping {}: {}", source.display(), e);
                self.failures.push(StageFailure {
                    source: source.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Stage 1: documents in, cleaned paragraph text out (`<stem>.txt`).
pub struct ExtractStage {
    extractor: DocumentExtractor,
}

impl ExtractStage {
    /// Create the stage with the given cleaning configuration.
    pub fn new(config: &CleanConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            extractor: DocumentExtractor::new(config)?,
        })
    }

    /// Extract every supported document of `input` into `output`.
    pub fn run(&self, input: &Path, output: &Path) -> Result<BatchReport, PipelineError> {
        let inputs = discover_inputs(input, DocumentFormat::extensions())?;
        prepare_output_dir(output)?;
        info!("extracting {} document(s) from {}", inputs.len(), input.display());

        let mut report = BatchReport::default();
        for path in &inputs {
            report.record(path, self.process(path, output));
        }
        Ok(report)
    }

    fn process(&self, path: &Path, output: &Path) -> Result<PathBuf, PipelineError> {
        let text = self.extractor.extract(path)?;
        let out = output.join(format!("{}.txt", file_stem(path)));
        fs::write(&out, text)?;
        Ok(out)
    }
}

/// Stage 2: cleaned text in, space-joined lemma string out
/// (`<stem><suffix>.txt`).
///
/// The whole document is lowercased, lemmatized once, and tokens keep
/// their source order; stopword/punctuation/whitespace tokens are
/// filtered.
pub struct NormalizeStage<L> {
    lemmatizer: L,
    suffix: String,
}

impl<L> NormalizeStage<L>
where
    L: Lemmatizer,
    L::Error: Display,
{
    /// Create the stage around a lemmatizer capability.
    pub fn new(lemmatizer: L, suffix: impl Into<String>) -> Self {
        Self {
            lemmatizer,
            suffix: suffix.into(),
        }
    }

    /// Normalize every `.txt` file of `input` into `output`.
    pub fn run(&self, input: &Path, output: &Path) -> Result<BatchReport, PipelineError> {
        let inputs = discover_inputs(input, &["txt"])?;
        prepare_output_dir(output)?;
        info!("normalizing {} file(s) from {}", inputs.len(), input.display());

        let mut report = BatchReport::default();
        for path in &inputs {
            report.record(path, self.process(path, output));
        }
        Ok(report)
    }

    fn process(&self, path: &Path, output: &Path) -> Result<PathBuf, PipelineError> {
        let text = fs::read_to_string(path)?.to_lowercase();
        let tokens = self
            .lemmatizer
            .lemmatize(&text)
            .map_err(|e| PipelineError::Capability(e.to_string()))?;

        let lemmas: Vec<String> = tokens
            .into_iter()
            .filter(|t| t.is_content())
            .map(|t| t.lemma)
            .collect();

        let out = output.join(format!("{}{}.txt", file_stem(path), self.suffix));
        fs::write(&out, lemmas.join(" "))?;
        Ok(out)
    }
}

/// Stage 3: normalized text in, one surface token per line out
/// (`<stem><suffix>.txt`).
pub struct TokenizeStage<T> {
    tokenizer: T,
    suffix: String,
}

impl<T> TokenizeStage<T>
where
    T: Tokenizer,
    T::Error: Display,
{
    /// Create the stage around a tokenizer capability.
    pub fn new(tokenizer: T, suffix: impl Into<String>) -> Self {
        Self {
            tokenizer,
            suffix: suffix.into(),
        }
    }

    /// Tokenize every `.txt` file of `input` into `output`.
    pub fn run(&self, input: &Path, output: &Path) -> Result<BatchReport, PipelineError> {
        let inputs = discover_inputs(input, &["txt"])?;
        prepare_output_dir(output)?;
        info!("tokenizing {} file(s) from {}", inputs.len(), input.display());

        let mut report = BatchReport::default();
        for path in &inputs {
            report.record(path, self.process(path, output));
        }
        Ok(report)
    }

    fn process(&self, path: &Path, output: &Path) -> Result<PathBuf, PipelineError> {
        let text = fs::read_to_string(path)?;
        let tokens = self
            .tokenizer
            .tokenize(&text)
            .map_err(|e| PipelineError::Capability(e.to_string()))?;

        let mut body = tokens.join("\n");
        if !body.is_empty() {
            body.push('\n');
        }

        let out = output.join(format!("{}{}.txt", file_stem(path), self.suffix));
        fs::write(&out, body)?;
        Ok(out)
    }
}

/// Stage 4: token text in, one comma-separated vector line out
/// (`<stem><suffix>.txt`).
pub struct VectorizeStage<E> {
    embedder: E,
    suffix: String,
}

impl<E> VectorizeStage<E>
where
    E: Embedder,
    E::Error: Display,
{
    /// Create the stage around an embedder capability.
    pub fn new(embedder: E, suffix: impl Into<String>) -> Self {
        Self {
            embedder,
            suffix: suffix.into(),
        }
    }

    /// Embed every `.txt` file of `input` into `output`.
    pub fn run(&self, input: &Path, output: &Path) -> Result<BatchReport, PipelineError> {
        let inputs = discover_inputs(input, &["txt"])?;
        prepare_output_dir(output)?;
        info!(
            "vectorizing {} file(s) from {} (dimension {})",
            inputs.len(),
            input.display(),
            self.embedder.dimension()
        );

        let mut report = BatchReport::default();
        for path in &inputs {
            report.record(path, self.process(path, output));
        }
        Ok(report)
    }

    fn process(&self, path: &Path, output: &Path) -> Result<PathBuf, PipelineError> {
        let text = fs::read_to_string(path)?;
        let vector = self
            .embedder
            .embed(&text)
            .map_err(|e| PipelineError::Capability(e.to_string()))?;

        let out = output.join(format!("{}{}.txt", file_stem(path), self.suffix));
        fs::write(&out, vector.to_csv())?;
        Ok(out)
    }
}
