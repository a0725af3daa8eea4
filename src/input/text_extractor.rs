//! Text extraction from PDF and DOCX documents

use crate::error::{CvEvaluatorError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        // pdf-extract panics on some malformed inputs instead of erroring.
        let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes))
            .map_err(|_| CvEvaluatorError::corrupt_document(path, "PDF parser aborted"))?;

        extracted.map_err(|e| CvEvaluatorError::corrupt_document(path, e))
    }
}

pub struct DocxExtractor;

/// Part of a DOCX package holding the main document body.
const DOCUMENT_PART: &str = "word/document.xml";

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let xml = read_document_part(&bytes)
            .map_err(|e| CvEvaluatorError::corrupt_document(path, e))?;
        docx_xml_to_text(&xml).map_err(|e| CvEvaluatorError::corrupt_document(path, e))
    }
}

fn read_document_part(bytes: &[u8]) -> std::result::Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| format!("Failed to open DOCX container: {}", e))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| format!("Missing {}: {}", DOCUMENT_PART, e))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| format!("Failed to read {}: {}", DOCUMENT_PART, e))?;
    Ok(xml)
}

/// Flatten WordprocessingML into plain text: run text is concatenated,
/// paragraphs and breaks become newlines, tabs become `\t`.
pub fn docx_xml_to_text(xml: &str) -> std::result::Result<String, String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text_run => {
                let unescaped = e.unescape().map_err(|err| {
                    format!("Invalid text at {}: {}", reader.buffer_position(), err)
                })?;
                text.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!("Malformed XML at {}: {}", reader.buffer_position(), e));
            }
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_xml_paragraphs_and_runs() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane</w:t></w:r><w:r><w:t xml:space="preserve"> Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>Email:</w:t><w:tab/><w:t>jane@example.com</w:t></w:r></w:p>
    <w:p><w:r><w:t>R&amp;D</w:t><w:br/><w:t>2019</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        let text = docx_xml_to_text(xml).unwrap();
        assert_eq!(text, "Jane Doe\nEmail:\tjane@example.com\nR&D\n2019\n");
    }

    #[test]
    fn test_docx_xml_ignores_non_text_content() {
        let xml = concat!(
            "<w:document><w:body><w:p><w:r>",
            "<w:instrText>PAGE</w:instrText>",
            "</w:r></w:p></w:body></w:document>"
        );
        assert_eq!(docx_xml_to_text(xml).unwrap(), "\n");
    }

    #[test]
    fn test_docx_xml_malformed() {
        assert!(docx_xml_to_text("<w:document><w:p></w:document>").is_err());
    }

    #[test]
    fn test_read_document_part_rejects_non_zip() {
        assert!(read_document_part(b"definitely not a zip").is_err());
    }
}
