//! Surface tokenization on unicode word boundaries.

use crate::LangError;
use draftdiff_domain::Tokenizer;
use unicode_segmentation::UnicodeSegmentation;

/// Tokenizer that splits on unicode word boundaries and drops
/// whitespace-only segments, keeping punctuation as surface tokens.
#[derive(Debug, Clone, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    type Error = LangError;

    fn tokenize(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        Ok(text
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}
