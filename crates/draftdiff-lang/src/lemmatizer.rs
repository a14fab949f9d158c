//! Rule-based English lemmatization.

use crate::LangError;
use draftdiff_domain::{LemmaToken, Lemmatizer};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Common English function words excluded from normalized text.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "if", "then", "than", "so", "as", "of", "at",
        "by", "for", "with", "about", "against", "between", "into", "through", "during",
        "before", "after", "above", "below", "to", "from", "up", "down", "in", "out", "on",
        "off", "over", "under", "again", "further", "once", "here", "there", "when", "where",
        "why", "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
        "such", "no", "nor", "not", "only", "own", "same", "too", "very", "can", "will",
        "just", "should", "now", "i", "me", "my", "we", "our", "you", "your", "he", "him",
        "his", "she", "her", "it", "its", "they", "them", "their", "this", "that", "these",
        "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
        "had", "do", "does", "did", "would", "could", "what", "which", "who", "whom",
    ]
    .into_iter()
    .collect()
});

/// Irregular forms the suffix rules cannot reach.
static IRREGULAR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"),
        ("feet", "foot"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "person"),
        ("ran", "run"),
        ("went", "go"),
        ("wrote", "write"),
        ("written", "write"),
        ("saw", "see"),
        ("seen", "see"),
        ("made", "make"),
        ("said", "say"),
        ("took", "take"),
        ("taken", "take"),
        ("found", "find"),
        ("gave", "give"),
        ("given", "give"),
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
    ]
    .into_iter()
    .collect()
});

/// Deterministic rule-based lemmatizer.
///
/// Segments on unicode word boundaries, flags whitespace, punctuation and
/// stopword tokens, and reduces the rest with a small irregular-form table
/// plus suffix-stripping rules. Intentionally rougher than a statistical
/// lemmatizer; it is stable across runs, which is what pairwise comparison
/// needs.
#[derive(Debug, Clone, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    /// Create a new lemmatizer.
    pub fn new() -> Self {
        Self
    }

    fn lemma_of(&self, word: &str) -> String {
        if let Some(lemma) = IRREGULAR.get(word) {
            return (*lemma).to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if stem.len() >= 2 {
                return format!("{stem}y");
            }
        }
        if let Some(stem) = word.strip_suffix("sses") {
            return format!("{stem}ss");
        }
        if let Some(stem) = word.strip_suffix("ing") {
            if stem.len() >= 3 {
                return undouble(stem);
            }
        }
        if let Some(stem) = word.strip_suffix("ed") {
            if stem.len() >= 3 {
                return undouble(stem);
            }
        }
        if let Some(stem) = word.strip_suffix('s') {
            if stem.len() >= 3 && !stem.ends_with('s') && !stem.ends_with('u') && !stem.ends_with('i')
            {
                return stem.to_string();
            }
        }

        word.to_string()
    }
}

/// Collapse a trailing doubled consonant ("runn" → "run").
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        let prev = chars[chars.len() - 2];
        if last == prev && last.is_ascii_alphabetic() && !"aeiou".contains(last) {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    stem.to_string()
}

impl Lemmatizer for RuleLemmatizer {
    type Error = LangError;

    fn lemmatize(&self, text: &str) -> Result<Vec<LemmaToken>, Self::Error> {
        let mut tokens = Vec::new();
        for segment in text.split_word_bounds() {
            let is_space = segment.chars().all(char::is_whitespace);
            let is_punctuation = !is_space && !segment.chars().any(char::is_alphanumeric);
            let lower = segment.to_lowercase();
            let is_stopword = STOPWORDS.contains(lower.as_str());

            let lemma = if is_space || is_punctuation {
                lower
            } else {
                self.lemma_of(&lower)
            };

            tokens.push(LemmaToken {
                lemma,
                is_stopword,
                is_punctuation,
                is_space,
            });
        }
        Ok(tokens)
    }
}
