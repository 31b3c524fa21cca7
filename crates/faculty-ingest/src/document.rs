//! Document dispatch: bytes in, text out, then the matching parser.
//!
//! Turning PDF or DOCX bytes into text belongs to a collaborator behind
//! [`TextExtractor`]. The bundled [`PlainTextExtractor`] handles text files.

use faculty_model::{BiographySections, DocumentFormat, DocumentRole, RawDocument, ScheduleEntry};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::DocumentError;
use crate::schedule::ScheduleExtractor;
use crate::sections::detect_sections;

/// Converts document bytes of a known format to text.
pub trait TextExtractor {
    fn extract(
        &self,
        bytes: &[u8],
        format: DocumentFormat,
        filename: &str,
    ) -> Result<String, DocumentError>;
}

/// Decodes UTF-8 text documents; rejects binary formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(
        &self,
        bytes: &[u8],
        format: DocumentFormat,
        filename: &str,
    ) -> Result<String, DocumentError> {
        if format != DocumentFormat::Text {
            return Err(DocumentError::UnsupportedKind {
                filename: filename.to_string(),
                reason: format!("{format} documents need an external text extractor"),
            });
        }
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let text = std::str::from_utf8(bytes).map_err(|source| DocumentError::Unreadable {
            filename: filename.to_string(),
            source,
        })?;
        Ok(text.to_string())
    }
}

/// Output of CV ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiographyIngest {
    pub raw_text: String,
    pub sections: BiographySections,
    pub source_file: String,
}

fn document_text(
    document: &RawDocument,
    expected: DocumentRole,
    extractor: &dyn TextExtractor,
) -> Result<String, DocumentError> {
    if document.role != expected {
        return Err(DocumentError::UnsupportedKind {
            filename: document.filename.clone(),
            reason: format!("expected a {expected} document, got {}", document.role),
        });
    }
    let format = document
        .format()
        .ok_or_else(|| DocumentError::UnsupportedKind {
            filename: document.filename.clone(),
            reason: "unknown file extension".to_string(),
        })?;
    let text = extractor.extract(&document.bytes, format, &document.filename)?;
    if text.trim().is_empty() {
        return Err(DocumentError::NoText {
            filename: document.filename.clone(),
        });
    }
    debug!(%format, chars = text.chars().count(), "document text extracted");
    Ok(text)
}

/// Extracts a CV's text and splits it into biography sections.
pub fn ingest_biography(
    document: &RawDocument,
    extractor: &dyn TextExtractor,
) -> Result<BiographyIngest, DocumentError> {
    let raw_text = document_text(document, DocumentRole::Biography, extractor)?;
    let sections = detect_sections(&raw_text);
    info!(sections = sections.populated_count(), "biography ingested");
    Ok(BiographyIngest {
        raw_text,
        sections,
        source_file: document.filename.clone(),
    })
}

/// Extracts a program dump's text and parses its sessions.
pub fn ingest_schedule(
    document: &RawDocument,
    extractor: &dyn TextExtractor,
    schedule: &ScheduleExtractor,
) -> Result<Vec<ScheduleEntry>, DocumentError> {
    let text = document_text(document, DocumentRole::Schedule, extractor)?;
    let entries = schedule.extract(&text);
    info!(entries = entries.len(), "schedule ingested");
    Ok(entries)
}
