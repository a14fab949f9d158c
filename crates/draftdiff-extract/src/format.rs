//! Supported container formats and their unit-boundary rules.

use crate::error::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use scraper::{Html, Selector};
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

/// The closed set of document container formats the extractor understands.
///
/// Each variant implements the single capability "path → ordered paragraph
/// sequence" with its own text-unit boundary rule, so new formats slot in
/// without touching the Cleaner or downstream stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Word container: one `w:p` paragraph = one unit.
    Docx,
    /// Paginated document: pages split into lines, one line = one unit.
    Pdf,
    /// Flat markup: one `<p>` element = one unit, tags stripped.
    Html,
}

impl DocumentFormat {
    /// Classify a path by its extension.
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "pdf" => Ok(DocumentFormat::Pdf),
            "html" | "htm" => Ok(DocumentFormat::Html),
            _ => Err(ExtractError::UnsupportedFormat(ext)),
        }
    }

    /// File extensions the extractor accepts, for batch discovery.
    pub fn extensions() -> &'static [&'static str] {
        &["docx", "pdf", "html", "htm"]
    }

    /// Read the ordered, whitespace-stripped, non-empty units of the
    /// document at `path`.
    pub fn read_units(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        match self {
            DocumentFormat::Docx => read_docx_units(path),
            DocumentFormat::Pdf => read_pdf_units(path),
            DocumentFormat::Html => read_html_units(path),
        }
    }
}

/// Pull the text of each `w:p` paragraph out of `word/document.xml`.
fn read_docx_units(path: &Path) -> Result<Vec<String>, ExtractError> {
    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| ExtractError::parse(path, e))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::parse(path, e))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::parse(path, e))?;

    let mut reader = Reader::from_str(&xml);
    let mut units = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"p" => {
                current = Some(String::new());
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"p" => {
                if let Some(text) = current.take() {
                    let text = text.trim().to_string();
                    if !text.is_empty() {
                        units.push(text);
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(buf) = current.as_mut() {
                    let text = t.unescape().map_err(|e| ExtractError::parse(path, e))?;
                    buf.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractError::parse(path, e)),
        }
    }

    Ok(units)
}

/// Page-level PDF text, split into trimmed non-empty lines.
fn read_pdf_units(path: &Path) -> Result<Vec<String>, ExtractError> {
    let bytes = fs::read(path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| ExtractError::parse(path, e))?;

    let mut units = Vec::new();
    for page in &pages {
        for line in page.lines() {
            let line = line.trim();
            if !line.is_empty() {
                units.push(line.to_string());
            }
        }
    }
    Ok(units)
}

/// `<p>` element text with tags stripped and whitespace collapsed.
fn read_html_units(path: &Path) -> Result<Vec<String>, ExtractError> {
    let html = fs::read_to_string(path)?;
    let document = Html::parse_document(&html);
    let paragraphs = Selector::parse("p")
        .map_err(|e| ExtractError::parse(path, format!("invalid selector: {:?}", e)))?;

    let mut units = Vec::new();
    for element in document.select(&paragraphs) {
        let text: String = element.text().collect::<Vec<_>>().join(" ");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            units.push(text);
        }
    }
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_dispatch() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a.docx")).unwrap(),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a.PDF")).unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a.htm")).unwrap(),
            DocumentFormat::Html
        );
    }

    #[test]
    fn test_unsupported_extension_named_in_error() {
        let err = DocumentFormat::from_path(Path::new("notes.odt")).unwrap_err();
        match err {
            ExtractError::UnsupportedFormat(ext) => assert_eq!(ext, "odt"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_extension_rejected() {
        assert!(matches!(
            DocumentFormat::from_path(Path::new("README")),
            Err(ExtractError::UnsupportedFormat(_))
        ));
    }
}
