//! Error types for ingestion boundaries.
//!
//! Content problems never surface here: malformed text degrades to smaller
//! output. These errors cover collaborator boundaries only.

use std::path::PathBuf;

use thiserror::Error;

/// Failure turning uploaded bytes into text.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("unsupported document kind for {filename}: {reason}")]
    UnsupportedKind { filename: String, reason: String },
    #[error("no text extracted from {filename}")]
    NoText { filename: String },
    #[error("unreadable document {filename}")]
    Unreadable {
        filename: String,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Failure reading rosters or document folders.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },
    #[error("failed to read directory {}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("roster csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster is missing the {0} column")]
    MissingColumn(&'static str),
}

/// Invalid rule configuration.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("invalid pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("day {0} is out of range (expected 1..=3)")]
    DayOutOfRange(u8),
    #[error("cue table entry {0} has no cues")]
    EmptyCues(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
