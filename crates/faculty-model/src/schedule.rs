//! Scheduled program sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Session kind inferred from keyword cues in a session title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionKind {
    /// Plain talk; the fallback when no cue matches.
    #[default]
    Talk,
    Workshop,
    Oration,
    Forum,
    CaseDiscussion,
    FreePaper,
    Medal,
    Quiz,
    MeetTheMasters,
    /// Lunch, dinner, banquet and similar non-academic slots.
    Break,
    /// Inaugural and valedictory functions.
    Ceremony,
    /// Bare session header line without a time slot.
    Header,
}

impl SessionKind {
    pub const ALL: [SessionKind; 12] = [
        SessionKind::Talk,
        SessionKind::Workshop,
        SessionKind::Oration,
        SessionKind::Forum,
        SessionKind::CaseDiscussion,
        SessionKind::FreePaper,
        SessionKind::Medal,
        SessionKind::Quiz,
        SessionKind::MeetTheMasters,
        SessionKind::Break,
        SessionKind::Ceremony,
        SessionKind::Header,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Talk => "talk",
            SessionKind::Workshop => "workshop",
            SessionKind::Oration => "oration",
            SessionKind::Forum => "forum",
            SessionKind::CaseDiscussion => "case-discussion",
            SessionKind::FreePaper => "free-paper",
            SessionKind::Medal => "medal",
            SessionKind::Quiz => "quiz",
            SessionKind::MeetTheMasters => "meet-the-masters",
            SessionKind::Break => "break",
            SessionKind::Ceremony => "ceremony",
            SessionKind::Header => "header",
        }
    }

    /// Returns false for entries that never carry speakers (headers and breaks).
    pub fn is_speaker_facing(&self) -> bool {
        !matches!(self, SessionKind::Header | SessionKind::Break)
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SessionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        SessionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownSessionKind(s.to_string()))
    }
}

/// One extracted program entry.
///
/// `ordinal` is strictly increasing within one extraction run and defines
/// presentation order. `moderator` and `chairperson` carry the sticky page
/// context that was active when the entry was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: u8,
    /// Normalized clock time or range; empty for header entries.
    pub time_slot: String,
    pub venue: String,
    pub title: String,
    /// Free-text speaker clause as printed; may list several names.
    pub speakers: String,
    pub kind: SessionKind,
    pub moderator: Option<String>,
    pub chairperson: Option<String>,
    pub ordinal: u32,
}

impl ScheduleEntry {
    pub fn is_header(&self) -> bool {
        self.kind == SessionKind::Header
    }
}
