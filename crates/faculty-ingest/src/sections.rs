//! CV section detection.
//!
//! Lines are folded through a [`SectionAccumulator`]: a heading-like line
//! carrying a category cue switches the current category, and every line is
//! appended to whichever category is current.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use faculty_model::{BiographySections, Category};
use tracing::trace;

use crate::classifier::{CueTable, Detector};

const EDUCATION_CUES: &[&str] = &[
    "education",
    "academic",
    "qualification",
    "degree",
    "university",
    "college",
    "school",
    "diploma",
    "certificate",
];
const EXPERIENCE_CUES: &[&str] = &[
    "experience",
    "employment",
    "work history",
    "career",
    "position",
    "hospital",
    "clinic",
    "consultant",
    "professor",
    "surgeon",
];
const PUBLICATION_CUES: &[&str] = &[
    "publication",
    "paper",
    "research",
    "journal",
    "article",
    "study",
    "doi",
    "isbn",
];
const AWARD_CUES: &[&str] = &[
    "award",
    "honor",
    "honour",
    "achievement",
    "recognition",
    "fellowship",
    "medal",
    "prize",
];

static DEFAULT_SECTION_TABLE: LazyLock<CueTable<Category>> = LazyLock::new(|| {
    let detector = |cues: &[&str]| Detector::words(cues).expect("Invalid section cue table");
    CueTable::new()
        .with(Category::Education, detector(EDUCATION_CUES))
        .with(Category::Experience, detector(EXPERIENCE_CUES))
        .with(Category::Publications, detector(PUBLICATION_CUES))
        .with(Category::Awards, detector(AWARD_CUES))
});

/// The built-in category cue table, in tie-break order.
pub fn default_section_table() -> &'static CueTable<Category> {
    &DEFAULT_SECTION_TABLE
}

/// Running state of section detection.
#[derive(Debug, Clone)]
pub struct SectionAccumulator {
    current: Category,
    blocks: BTreeMap<Category, Vec<String>>,
}

impl Default for SectionAccumulator {
    fn default() -> Self {
        Self {
            current: Category::Other,
            blocks: BTreeMap::new(),
        }
    }
}

impl SectionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Category {
        self.current
    }

    /// Consumes one line. Blank lines are ignored.
    #[must_use]
    pub fn push_line(mut self, line: &str, table: &CueTable<Category>) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return self;
        }
        if let Some(category) = table.classify(trimmed) {
            trace!(from = %self.current, to = %category, "section switch");
            self.current = category;
        }
        self.blocks
            .entry(self.current)
            .or_default()
            .push(trimmed.to_string());
        self
    }

    pub fn finish(self) -> BiographySections {
        let mut sections = BiographySections::default();
        for (category, lines) in self.blocks {
            if !lines.is_empty() {
                sections.set(category, Some(lines.join("\n")));
            }
        }
        sections
    }
}

/// Splits CV text into categorized sections using the default cue table.
pub fn detect_sections(text: &str) -> BiographySections {
    detect_sections_with(text, default_section_table())
}

/// Splits CV text into categorized sections using a custom cue table.
pub fn detect_sections_with(text: &str, table: &CueTable<Category>) -> BiographySections {
    text.lines()
        .fold(SectionAccumulator::new(), |acc, line| acc.push_line(line, table))
        .finish()
}
