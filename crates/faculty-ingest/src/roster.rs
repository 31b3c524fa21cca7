//! Faculty roster loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use faculty_model::Person;
use tracing::debug;

use crate::error::{IngestError, Result};

const MAX_SLUG_LEN: usize = 40;

fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    id: Option<usize>,
    name: usize,
    institution: Option<usize>,
    qualification: Option<usize>,
    designation: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|header| normalize_header(header) == wanted)
        };
        Ok(Self {
            id: find("id"),
            name: find("name").ok_or(IngestError::MissingColumn("Name"))?,
            institution: find("institution"),
            qualification: find("qualification"),
            designation: find("designation"),
        })
    }
}

fn cell(record: &StringRecord, index: Option<usize>) -> Option<String> {
    index
        .and_then(|index| record.get(index))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

/// Stable id for a roster row without one: `slug(name)-<row>`.
pub fn person_id_from_name(name: &str, row: usize) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug: String = slug.chars().take(MAX_SLUG_LEN).collect();
    format!("{slug}-{row}")
}

/// Reads a roster from CSV. Rows are numbered from 1 after the header.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<Person>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let columns = Columns::locate(reader.headers()?)?;

    let mut roster = Vec::new();
    let mut skipped = 0usize;
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 1;
        let Some(name) = cell(&record, Some(columns.name)) else {
            skipped += 1;
            continue;
        };
        let id = cell(&record, columns.id).unwrap_or_else(|| person_id_from_name(&name, row));
        roster.push(Person {
            id,
            name,
            institution: cell(&record, columns.institution),
            qualification: cell(&record, columns.qualification),
            designation: cell(&record, columns.designation),
        });
    }
    debug!(persons = roster.len(), skipped, "roster loaded");
    Ok(roster)
}

/// Reads a roster CSV from disk.
pub fn load_roster(path: &Path) -> Result<Vec<Person>> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_roster(file)
}
