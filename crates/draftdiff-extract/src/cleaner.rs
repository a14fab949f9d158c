//! Two-phase paragraph cleaning: header boilerplate, then identifier lines.

use crate::config::CleanConfig;
use crate::error::ExtractError;
use regex::Regex;
use tracing::debug;

/// Strips header boilerplate and identifier-bearing units from a raw
/// paragraph sequence.
///
/// The two passes are independent and ordered:
///
/// 1. **Header suppression** examines only the first two units and blanks
///    a unit (in place, without shifting indices) when its lowercased text
///    contains any configured keyword.
/// 2. **Identifier suppression** drops every unit, header or not, that
///    contains a whole-word identifier token: one configured letter
///    followed by exactly eight digits, case-insensitive.
///
/// Blank units never survive; the cleaned output preserves the original
/// order of the remaining units.
pub struct Cleaner {
    keywords: Vec<String>,
    id_pattern: Regex,
}

impl Cleaner {
    /// Build a cleaner, compiling the identifier pattern once.
    pub fn new(config: &CleanConfig) -> Result<Self, ExtractError> {
        config.validate().map_err(ExtractError::Config)?;

        let letters: String = config.id_letters.to_ascii_lowercase();
        let pattern = format!(r"(?i)\b[{}][0-9]{{8}}\b", regex::escape(&letters));
        let id_pattern =
            Regex::new(&pattern).map_err(|e| ExtractError::Config(e.to_string()))?;

        let keywords = config
            .header_keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();

        Ok(Self {
            keywords,
            id_pattern,
        })
    }

    /// Run both cleaning passes over the raw units.
    pub fn clean(&self, mut units: Vec<String>) -> Vec<String> {
        // Phase 1: header suppression. Matched units are blanked rather
        // than removed so the two-unit lookahead window never shifts.
        for unit in units.iter_mut().take(2) {
            let lowered = unit.to_lowercase();
            if self.keywords.iter().any(|k| lowered.contains(k.as_str())) {
                debug!("suppressing header unit: {:?}", unit);
                unit.clear();
            }
        }

        // Phase 2: identifier suppression over every unit. Blanked headers
        // fall out here via the non-empty filter.
        units.retain(|unit| !unit.trim().is_empty() && !self.id_pattern.is_match(unit));
        units
    }

    /// Clean and join the surviving units with newlines.
    pub fn clean_to_text(&self, units: Vec<String>) -> String {
        self.clean(units).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleaner() -> Cleaner {
        Cleaner::new(&CleanConfig::default()).unwrap()
    }

    fn units(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_header_keyword_blanks_first_unit() {
        let cleaned = cleaner().clean(units(&[
            "Feedback summary: great work",
            "Introduction",
            "Body text",
        ]));
        assert_eq!(cleaned, vec!["Introduction", "Body text"]);
    }

    #[test]
    fn test_header_keyword_blanks_second_unit() {
        let cleaned = cleaner().clean(units(&[
            "Title",
            "AI Assistance was used for grammar",
            "Body text",
        ]));
        assert_eq!(cleaned, vec!["Title", "Body text"]);
    }

    #[test]
    fn test_third_unit_never_header_suppressed() {
        let cleaned = cleaner().clean(units(&[
            "Title",
            "Introduction",
            "Feedback on methodology follows",
        ]));
        assert_eq!(
            cleaned,
            vec!["Title", "Introduction", "Feedback on methodology follows"]
        );
    }

    #[test]
    fn test_identifier_unit_dropped_anywhere() {
        let cleaned = cleaner().clean(units(&[
            "Title",
            "Body",
            "Submitted by R11749001 on Monday",
            "Conclusion",
        ]));
        assert_eq!(cleaned, vec!["Title", "Body", "Conclusion"]);
    }

    #[test]
    fn test_identifier_case_insensitive() {
        let cleaned = cleaner().clean(units(&["intro", "id r11749001 mid-sentence"]));
        assert_eq!(cleaned, vec!["intro"]);
    }

    #[test]
    fn test_seven_digits_not_dropped() {
        let unit = "Reference R1174900 stays";
        let cleaned = cleaner().clean(units(&["intro", "body", unit]));
        assert_eq!(cleaned, vec!["intro", "body", unit]);
    }

    #[test]
    fn test_nine_digits_not_dropped() {
        let unit = "Reference R117490011 stays";
        let cleaned = cleaner().clean(units(&["intro", "body", unit]));
        assert_eq!(cleaned, vec!["intro", "body", unit]);
    }

    #[test]
    fn test_identifier_must_be_whole_word() {
        let unit = "Code XR11749001 is a different token";
        let cleaned = cleaner().clean(units(&["intro", "body", unit]));
        assert_eq!(cleaned, vec!["intro", "body", unit]);
    }

    #[test]
    fn test_identifier_in_header_dropped_even_without_keyword() {
        // The header pass did not match, but the identifier pass still
        // covers the first two units.
        let cleaned = cleaner().clean(units(&["Student R11749001", "Body"]));
        assert_eq!(cleaned, vec!["Body"]);
    }

    #[test]
    fn test_order_preserved_and_no_blanks_retained() {
        let cleaned = cleaner().clean(units(&["c", "a", "  ", "b", ""]));
        assert_eq!(cleaned, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_short_documents() {
        assert!(cleaner().clean(Vec::new()).is_empty());
        let cleaned = cleaner().clean(units(&["Feedback only"]));
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_clean_to_text_joins_with_newlines() {
        let text = cleaner().clean_to_text(units(&["one", "two", "three"]));
        assert_eq!(text, "one\ntwo\nthree");
    }

    #[test]
    fn test_custom_alphabet() {
        let config = CleanConfig {
            id_letters: "bd".to_string(),
            ..CleanConfig::default()
        };
        let cleaner = Cleaner::new(&config).unwrap();
        let cleaned = cleaner.clean(units(&["x", "y", "ref B12345678", "ref R12345678"]));
        // 'b' is in the alphabet, 'r' no longer is.
        assert_eq!(cleaned, vec!["x", "y", "ref R12345678"]);
    }
}
