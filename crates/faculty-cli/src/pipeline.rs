//! Pipeline stages behind the subcommands: read files, run the library
//! algorithms, and shape the results for printing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use faculty_ingest::{
    BiographyIngest, CV_EXTENSIONS, PHOTO_EXTENSIONS, PlainTextExtractor, ScheduleExtractor,
    ingest_biography, ingest_schedule, link_documents, list_documents, load_roster, speaker_facing,
};
use faculty_map::{
    ConfidenceLevel, ConfidenceThresholds, NameResolver, NameSuggestion, name_from_filename,
};
use faculty_model::{DocumentRole, Person, RawDocument, ScheduleEntry, SpeakerLink};
use serde::Serialize;
use tracing::{debug, info};

use crate::logging::redact_value;

/// Reads a file from disk as a document of the given role.
pub fn read_document(path: &Path, role: DocumentRole) -> Result<RawDocument> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();
    Ok(RawDocument::new(bytes, role, filename))
}

pub fn sections_from_file(path: &Path) -> Result<BiographyIngest> {
    let document = read_document(path, DocumentRole::Biography)?;
    ingest_biography(&document, &PlainTextExtractor)
        .with_context(|| format!("ingest biography {}", path.display()))
}

pub fn schedule_from_file(path: &Path, extractor: &ScheduleExtractor) -> Result<Vec<ScheduleEntry>> {
    let document = read_document(path, DocumentRole::Schedule)?;
    ingest_schedule(&document, &PlainTextExtractor, extractor)
        .with_context(|| format!("ingest schedule {}", path.display()))
}

pub fn roster_from_file(path: &Path) -> Result<Vec<Person>> {
    let roster = load_roster(path).with_context(|| format!("load roster {}", path.display()))?;
    info!(persons = roster.len(), "roster ready");
    Ok(roster)
}

/// Resolved speakers of one schedule entry.
#[derive(Debug, Clone, Serialize)]
pub struct SpeakerRow {
    pub ordinal: u32,
    pub day: u8,
    pub venue: String,
    pub time_slot: String,
    pub title: String,
    pub links: Vec<SpeakerLink>,
}

/// Resolves the speakers of every speaker-facing entry that lists any.
pub fn link_speakers(
    entries: &[ScheduleEntry],
    roster: &[Person],
    resolver: &NameResolver,
) -> Vec<SpeakerRow> {
    speaker_facing(entries)
        .into_iter()
        .filter(|entry| !entry.speakers.trim().is_empty())
        .map(|entry| {
            let links = resolver.resolve_speakers(&entry.speakers, roster);
            for link in links.iter().filter(|link| !link.is_resolved()) {
                debug!(
                    ordinal = entry.ordinal,
                    speaker = redact_value(&link.label),
                    "speaker unresolved"
                );
            }
            SpeakerRow {
                ordinal: entry.ordinal,
                day: entry.day,
                venue: entry.venue.clone(),
                time_slot: entry.time_slot.clone(),
                title: entry.title.clone(),
                links,
            }
        })
        .collect()
}

/// One file of a CV or photo folder and the person it was linked to.
#[derive(Debug, Clone, Serialize)]
pub struct LinkRow {
    pub path: PathBuf,
    pub person_id: Option<String>,
    pub person_name: Option<String>,
    pub confidence: f64,
    pub level: Option<ConfidenceLevel>,
    /// Closest roster names, filled for unresolved files only.
    pub suggestions: Vec<NameSuggestion>,
}

/// Options for [`link_folder`].
#[derive(Debug, Clone, Copy)]
pub struct LinkOptions {
    pub thresholds: ConfidenceThresholds,
    pub suggestions: usize,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            thresholds: ConfidenceThresholds::default(),
            suggestions: 3,
        }
    }
}

/// Links every CV and photo in `dir` to the roster by file name.
pub fn link_folder(
    dir: &Path,
    roster: &[Person],
    resolver: &NameResolver,
    options: LinkOptions,
) -> Result<Vec<LinkRow>> {
    let extensions: Vec<&str> = CV_EXTENSIONS
        .iter()
        .chain(PHOTO_EXTENSIONS)
        .copied()
        .collect();
    let files = list_documents(dir, &extensions)
        .with_context(|| format!("list documents in {}", dir.display()))?;
    let linked = link_documents(&files, roster, resolver);

    let rows: Vec<LinkRow> = linked
        .into_iter()
        .map(|document| {
            let resolution = &document.resolution;
            let suggestions = if resolution.is_resolved() {
                Vec::new()
            } else {
                let name = name_from_filename(document.file_name());
                resolver.suggest(&name, roster, options.suggestions)
            };
            LinkRow {
                person_id: resolution.person_id().map(String::from),
                person_name: resolution.person.as_ref().map(|person| person.name.clone()),
                confidence: resolution.confidence,
                level: options.thresholds.level_of(resolution),
                suggestions,
                path: document.path,
            }
        })
        .collect();
    let unmatched = rows.iter().filter(|row| row.person_id.is_none()).count();
    info!(files = rows.len(), unmatched, "folder linked");
    Ok(rows)
}
