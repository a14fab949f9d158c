//! Integration-style tests exercising real container fixtures.

use crate::{CleanConfig, DocumentExtractor, ExtractError};
use std::io::Write;
use std::path::Path;

fn extractor() -> DocumentExtractor {
    DocumentExtractor::new(&CleanConfig::default()).unwrap()
}

/// Build a minimal OOXML container with one `w:p` per paragraph.
fn make_test_docx(paragraphs: &[&str]) -> Vec<u8> {
    use zip::write::SimpleFileOptions;

    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut archive = zip::ZipWriter::new(&mut cursor);
        archive
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();

        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
            .collect();
        write!(
            archive,
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        )
        .unwrap();
        archive.finish().unwrap();
    }
    cursor.into_inner()
}

/// Generate a valid single-page PDF with lopdf (the library pdf-extract
/// uses internally).
fn make_test_pdf(text: &str) -> Vec<u8> {
    use lopdf::dictionary;
    use lopdf::{Document, Object, Stream};

    let mut doc = Document::with_version("1.4");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

    let resources = dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    };

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
        "Resources" => resources,
    });

    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    });

    if let Ok(Object::Dictionary(ref mut dict)) = doc.get_object_mut(page_id) {
        dict.set("Parent", pages_id);
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_docx_paragraphs_are_units() {
    let dir = tempfile::tempdir().unwrap();
    let docx = make_test_docx(&["First paragraph", "Second paragraph", "  ", "Third"]);
    let path = write_fixture(dir.path(), "doc.docx", &docx);

    let units = extractor().extract_raw(&path).unwrap();
    assert_eq!(units, vec!["First paragraph", "Second paragraph", "Third"]);
}

#[test]
fn test_docx_extract_applies_cleaning() {
    let dir = tempfile::tempdir().unwrap();
    let docx = make_test_docx(&[
        "Feedback: well structured",
        "An essay about rivers",
        "Submitted by R11749001",
        "Rivers are long.",
    ]);
    let path = write_fixture(dir.path(), "essay.docx", &docx);

    let text = extractor().extract(&path).unwrap();
    assert_eq!(text, "An essay about rivers\nRivers are long.");
}

#[test]
fn test_pdf_lines_are_units() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = make_test_pdf("Hello from a page");
    let path = write_fixture(dir.path(), "doc.pdf", &pdf);

    let units = extractor().extract_raw(&path).unwrap();
    assert!(!units.is_empty());
    assert!(
        units.iter().any(|u| u.contains("Hello")),
        "expected a unit containing 'Hello', got: {:?}",
        units
    );
    assert!(units.iter().all(|u| !u.trim().is_empty()));
}

#[test]
fn test_corrupt_pdf_is_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "bad.pdf", b"not a pdf");

    let err = extractor().extract_raw(&path).unwrap_err();
    assert!(matches!(err, ExtractError::Parse { .. }));
}

#[test]
fn test_html_paragraph_elements_are_units() {
    let dir = tempfile::tempdir().unwrap();
    let html = br#"<html><body>
        <h1>Not a unit</h1>
        <p>First <b>bold</b> paragraph</p>
        <p>
            Second
            paragraph
        </p>
        <p></p>
    </body></html>"#;
    let path = write_fixture(dir.path(), "page.html", html);

    let units = extractor().extract_raw(&path).unwrap();
    assert_eq!(units, vec!["First bold paragraph", "Second paragraph"]);
}

#[test]
fn test_missing_file_is_not_found() {
    let err = extractor()
        .extract_raw(Path::new("/nonexistent/essay.docx"))
        .unwrap_err();
    assert!(matches!(err, ExtractError::NotFound(_)));
}

#[test]
fn test_unsupported_extension_checked_after_existence() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), "notes.odt", b"whatever");

    let err = extractor().extract_raw(&path).unwrap_err();
    match err {
        ExtractError::UnsupportedFormat(ext) => assert_eq!(ext, "odt"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}
