//! Session kind inference from title keywords.

use std::sync::LazyLock;

use faculty_model::SessionKind;

use crate::classifier::{CueTable, Detector};

static DEFAULT_KIND_TABLE: LazyLock<CueTable<SessionKind>> = LazyLock::new(|| {
    let detector = |cues: &[&str]| Detector::substrings(cues).expect("Invalid session kind cues");
    CueTable::new()
        .with(SessionKind::Workshop, detector(&["workshop"]))
        .with(SessionKind::Oration, detector(&["oration"]))
        .with(SessionKind::Forum, detector(&["open forum"]))
        .with(SessionKind::CaseDiscussion, detector(&["case discussion"]))
        .with(SessionKind::FreePaper, detector(&["free paper"]))
        .with(SessionKind::Medal, detector(&["medal"]))
        .with(SessionKind::Quiz, detector(&["quiz"]))
        .with(SessionKind::MeetTheMasters, detector(&["meet the master"]))
        .with(
            SessionKind::Break,
            detector(&["lunch", "dinner", "banquet", "tea break", "coffee break"]),
        )
        .with(SessionKind::Ceremony, detector(&["inaugur", "valedictory"]))
});

/// The built-in title cue table, in tie-break order.
pub fn default_kind_table() -> &'static CueTable<SessionKind> {
    &DEFAULT_KIND_TABLE
}

/// Kind of a timed session; [`SessionKind::Talk`] when no cue matches.
pub fn session_kind(title: &str) -> SessionKind {
    DEFAULT_KIND_TABLE.first_match(title).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cue_wins() {
        assert_eq!(session_kind("Gold Medal Oration"), SessionKind::Oration);
        assert_eq!(session_kind("Arthroscopy Workshop: Medal round"), SessionKind::Workshop);
    }

    #[test]
    fn substring_cues() {
        assert_eq!(session_kind("Inaugural Function"), SessionKind::Ceremony);
        assert_eq!(session_kind("Meet the Masters"), SessionKind::MeetTheMasters);
        assert_eq!(session_kind("LUNCH"), SessionKind::Break);
        assert_eq!(session_kind("Open Forum on trauma"), SessionKind::Forum);
        assert_eq!(session_kind("Free Paper Session 3"), SessionKind::FreePaper);
    }

    #[test]
    fn falls_back_to_talk() {
        assert_eq!(session_kind("Symposium Opening"), SessionKind::Talk);
        assert_eq!(session_kind(""), SessionKind::Talk);
    }
}
