//! Per-page running context and its transitions.

use faculty_model::{ScheduleEntry, SessionKind};

use super::line::{Declaration, Role};

/// A timed line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub time_slot: String,
    pub title: String,
    pub speakers: String,
    pub kind: SessionKind,
}

/// What one logical line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Timed(Session),
    Declaration(Declaration),
    /// Column headers, date stamps, day and hall banners.
    Furniture,
    /// Bare session header; carries the cleaned title.
    Header(String),
    Unrecognized,
}

impl LineClass {
    /// Short tag for trace output; never includes line content.
    pub fn label(&self) -> &'static str {
        match self {
            LineClass::Timed(_) => "timed",
            LineClass::Declaration(_) => "declaration",
            LineClass::Furniture => "furniture",
            LineClass::Header(_) => "header",
            LineClass::Unrecognized => "unrecognized",
        }
    }
}

/// Hands out presentation ordinals for one extraction run, starting at 1.
#[derive(Debug, Clone)]
pub struct OrdinalCounter {
    next: u32,
}

impl Default for OrdinalCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl OrdinalCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_ordinal(&mut self) -> u32 {
        let ordinal = self.next;
        self.next += 1;
        ordinal
    }

    /// Number of ordinals handed out so far.
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

/// Sticky context of one page. Day and venue are fixed when the page is
/// opened; moderator and chairperson change on declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub day: u8,
    pub venue: String,
    pub moderator: Option<String>,
    pub chairperson: Option<String>,
}

impl PageState {
    pub fn new(day: u8, venue: impl Into<String>) -> Self {
        Self {
            day,
            venue: venue.into(),
            moderator: None,
            chairperson: None,
        }
    }

    /// Applies one classified line, returning the entry it emits if any.
    pub fn apply(&mut self, class: LineClass, ordinals: &mut OrdinalCounter) -> Option<ScheduleEntry> {
        match class {
            LineClass::Timed(session) => Some(self.entry(
                session.time_slot,
                session.title,
                session.speakers,
                session.kind,
                ordinals,
            )),
            LineClass::Header(title) => Some(self.entry(
                String::new(),
                title,
                String::new(),
                SessionKind::Header,
                ordinals,
            )),
            LineClass::Declaration(Declaration { role, value }) => {
                match role {
                    Role::Moderator => self.moderator = Some(value),
                    Role::Chairperson => self.chairperson = Some(value),
                }
                None
            }
            LineClass::Furniture | LineClass::Unrecognized => None,
        }
    }

    fn entry(
        &self,
        time_slot: String,
        title: String,
        speakers: String,
        kind: SessionKind,
        ordinals: &mut OrdinalCounter,
    ) -> ScheduleEntry {
        ScheduleEntry {
            day: self.day,
            time_slot,
            venue: self.venue.clone(),
            title,
            speakers,
            kind,
            moderator: self.moderator.clone(),
            chairperson: self.chairperson.clone(),
            ordinal: ordinals.next_ordinal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(title: &str) -> LineClass {
        LineClass::Timed(Session {
            time_slot: "9:00 am".to_string(),
            title: title.to_string(),
            speakers: "Dr. X".to_string(),
            kind: SessionKind::Talk,
        })
    }

    fn moderator(name: &str) -> LineClass {
        LineClass::Declaration(Declaration {
            role: Role::Moderator,
            value: name.to_string(),
        })
    }

    #[test]
    fn declarations_stick_until_overwritten() {
        let mut state = PageState::new(1, "Hall A");
        let mut ordinals = OrdinalCounter::new();

        let first = state.apply(timed("One"), &mut ordinals).unwrap();
        assert_eq!(first.moderator, None);

        assert!(state.apply(moderator("Dr. B"), &mut ordinals).is_none());
        let second = state.apply(timed("Two"), &mut ordinals).unwrap();
        let third = state.apply(timed("Three"), &mut ordinals).unwrap();
        assert_eq!(second.moderator.as_deref(), Some("Dr. B"));
        assert_eq!(third.moderator.as_deref(), Some("Dr. B"));

        state.apply(moderator("Dr. C"), &mut ordinals);
        let fourth = state.apply(timed("Four"), &mut ordinals).unwrap();
        assert_eq!(fourth.moderator.as_deref(), Some("Dr. C"));
        assert_eq!(fourth.chairperson, None);
    }

    #[test]
    fn chairperson_is_independent_of_moderator() {
        let mut state = PageState::new(2, "Hall B");
        let mut ordinals = OrdinalCounter::new();
        state.apply(
            LineClass::Declaration(Declaration {
                role: Role::Chairperson,
                value: "Dr. P".to_string(),
            }),
            &mut ordinals,
        );
        assert_eq!(state.chairperson.as_deref(), Some("Dr. P"));
        assert_eq!(state.moderator, None);
    }

    #[test]
    fn headers_have_no_slot_or_speakers() {
        let mut state = PageState::new(3, "Hall C");
        let mut ordinals = OrdinalCounter::new();
        let header = state
            .apply(LineClass::Header("Free Paper Session".to_string()), &mut ordinals)
            .unwrap();
        assert!(header.is_header());
        assert!(header.time_slot.is_empty());
        assert!(header.speakers.is_empty());
        assert_eq!((header.day, header.venue.as_str()), (3, "Hall C"));
    }

    #[test]
    fn ordinals_only_advance_on_emitted_entries() {
        let mut state = PageState::new(1, "Hall A");
        let mut ordinals = OrdinalCounter::new();
        state.apply(LineClass::Furniture, &mut ordinals);
        state.apply(LineClass::Unrecognized, &mut ordinals);
        let first = state.apply(timed("One"), &mut ordinals).unwrap();
        state.apply(moderator("Dr. B"), &mut ordinals);
        let second = state.apply(timed("Two"), &mut ordinals).unwrap();
        assert_eq!((first.ordinal, second.ordinal), (1, 2));
        assert_eq!(ordinals.issued(), 2);
    }
}
