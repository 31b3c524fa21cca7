#![deny(unsafe_code)]

pub mod classifier;
pub mod discovery;
pub mod document;
pub mod error;
pub mod roster;
pub mod schedule;
pub mod sections;

pub use classifier::{CueMode, CueTable, Detector, classify, is_heading_like};
pub use discovery::{
    CV_EXTENSIONS, LinkedDocument, PHOTO_EXTENSIONS, link_documents, list_documents,
};
pub use document::{
    BiographyIngest, PlainTextExtractor, TextExtractor, ingest_biography, ingest_schedule,
};
pub use error::{DocumentError, IngestError, Result, RulesError};
pub use roster::{load_roster, person_id_from_name, read_roster};
pub use schedule::{
    ScheduleExtractor, ScheduleRules, extract_schedule, group_by_day_and_venue, speaker_facing,
    split_pages,
};
pub use sections::{
    SectionAccumulator, default_section_table, detect_sections, detect_sections_with,
};
