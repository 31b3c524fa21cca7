//! Configurable schedule heuristics.
//!
//! [`ScheduleRules`] is plain data (deserializable from a rules file);
//! [`ScheduleExtractor::new`](super::ScheduleExtractor::new) compiles and
//! validates it.

use serde::{Deserialize, Serialize};

/// Highest day number a program can have.
pub const MAX_DAY: u8 = 3;

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Maps a page-level pattern to a day number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCue {
    pub day: u8,
    /// Regex, matched case-insensitively anywhere in the page.
    pub pattern: String,
}

/// Maps a page-level pattern to a venue label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueCue {
    pub venue: String,
    /// Regex, matched case-insensitively anywhere in the page.
    pub pattern: String,
}

/// Heuristics of the schedule extractor.
///
/// The default day cues only recognize `Day-N` labels. Programs whose pages
/// are bannered by a date or weekday alone need extra cues, either from a
/// rules file or through [`ScheduleRules::with_weekday_cues`]; otherwise
/// those pages are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRules {
    /// Checked in order; the first cue found in a page sets its day.
    pub day_cues: Vec<DayCue>,
    /// Checked in order; the first cue found in a page sets its venue.
    pub venue_cues: Vec<VenueCue>,
    pub default_venue: String,
    /// Literal openings of a speaker clause that follows a whitespace gap.
    pub speaker_cues: Vec<String>,
    /// Literal titles used to locate a speaker clause when there is no gap.
    pub honorific_cues: Vec<String>,
    /// Nouns that end a bare session header line.
    pub structural_nouns: Vec<String>,
    /// Regexes (case-insensitive, anchored at line start) for page furniture.
    pub furniture_patterns: Vec<String>,
    /// Header lines must be shorter than this many chars.
    pub header_max_len: usize,
    /// Titles shorter than this many chars are dropped.
    pub min_title_len: usize,
    /// The honorific fallback only fires past this many chars of title.
    pub min_title_before_honorific: usize,
}

impl Default for ScheduleRules {
    fn default() -> Self {
        Self {
            day_cues: vec![
                DayCue {
                    day: 1,
                    pattern: r"\bday[\s-]*1\b".to_string(),
                },
                DayCue {
                    day: 3,
                    pattern: r"\bday[\s-]*3\b".to_string(),
                },
                DayCue {
                    day: 2,
                    pattern: r"\bday[\s-]*2\b".to_string(),
                },
            ],
            venue_cues: ["C", "B", "A"]
                .into_iter()
                .map(|hall| VenueCue {
                    venue: format!("Hall {hall}"),
                    pattern: format!(r"\bhall[\s-]*{hall}\b"),
                })
                .collect(),
            default_venue: "Hall A".to_string(),
            speaker_cues: ["Dr.", "Prof.", "Delegates", "Panel", "Judges", "All "]
                .into_iter()
                .map(String::from)
                .collect(),
            honorific_cues: vec!["Dr.".to_string(), "Prof.".to_string()],
            structural_nouns: [
                "session",
                "workshop",
                "oration",
                "symposium",
                "forum",
                "quiz",
                "discussion",
                "ceremony",
                "masters",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            furniture_patterns: vec![
                r"(?:symposium|specialty|practice|hall\s*[a-z])\s*(?:day|specialty)\b".to_string(),
                r"\d{1,2}-\d{1,2}-\d{2,4}\b".to_string(),
                r"time\s+session\b".to_string(),
                r"day[\s-]*\d+\b".to_string(),
                r"hall[\s-]*[a-z]\b".to_string(),
                r"(?:mon|tues|wednes|thurs|fri|satur|sun)day\b".to_string(),
                r"page\s+\d+\b".to_string(),
            ],
            header_max_len: 120,
            min_title_len: 3,
            min_title_before_honorific: 15,
        }
    }
}

impl ScheduleRules {
    /// Adds a day cue checked after the existing ones.
    #[must_use]
    pub fn with_day_cue(mut self, day: u8, pattern: impl Into<String>) -> Self {
        self.day_cues.push(DayCue {
            day,
            pattern: pattern.into(),
        });
        self
    }

    /// Adds weekday cues for a program whose day 1 falls on `first_weekday`;
    /// the following weekdays become day 2 and day 3. They are checked after
    /// the existing cues. An unknown weekday name adds nothing.
    #[must_use]
    pub fn with_weekday_cues(self, first_weekday: &str) -> Self {
        let wanted = first_weekday.trim().to_lowercase();
        let Some(start) = WEEKDAYS.iter().position(|weekday| *weekday == wanted) else {
            return self;
        };
        (1..=MAX_DAY).fold(self, |rules, day| {
            let weekday = WEEKDAYS[(start + usize::from(day) - 1) % WEEKDAYS.len()];
            rules.with_day_cue(day, format!(r"\b{weekday}\b"))
        })
    }

    /// Adds a venue cue checked after the existing ones.
    #[must_use]
    pub fn with_venue_cue(mut self, venue: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.venue_cues.push(VenueCue {
            venue: venue.into(),
            pattern: pattern.into(),
        });
        self
    }
}
