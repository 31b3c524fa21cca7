//! Program schedule extraction.
//!
//! Each page is reduced to logical lines (see [`line`]), every line is
//! classified, and the classes are folded through a [`PageState`] that
//! carries the day, venue, moderator and chairperson of the page. One
//! [`OrdinalCounter`] spans the whole run so entry order survives regrouping.

pub mod kind;
pub mod line;
pub mod rules;
pub mod state;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use faculty_model::ScheduleEntry;
use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

use crate::error::RulesError;

pub use kind::{default_kind_table, session_kind};
pub use line::{Declaration, Role};
pub use rules::{DayCue, MAX_DAY, ScheduleRules, VenueCue};
pub use state::{LineClass, OrdinalCounter, PageState, Session};

static PAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)-{3}\s*page\s+\d+\s*-{3}").expect("Invalid page marker regex")
});

static STANDARD: LazyLock<ScheduleExtractor> = LazyLock::new(|| {
    ScheduleExtractor::new(ScheduleRules::default()).expect("Invalid built-in schedule rules")
});

/// Splits extracted PDF text on `--- Page N ---` markers, dropping blank pages.
pub fn split_pages(text: &str) -> Vec<&str> {
    PAGE_MARKER
        .split(text)
        .filter(|page| !page.trim().is_empty())
        .collect()
}

/// Extracts a program with the built-in rules.
pub fn extract_schedule(text: &str) -> Vec<ScheduleEntry> {
    ScheduleExtractor::standard().extract(text)
}

/// Compiled [`ScheduleRules`].
#[derive(Debug, Clone)]
pub struct ScheduleExtractor {
    rules: ScheduleRules,
    day_cues: Vec<(u8, Regex)>,
    venue_cues: Vec<(String, Regex)>,
    furniture: Vec<Regex>,
    /// Furniture patterns anchored at both ends.
    furniture_line: Vec<Regex>,
    header: Regex,
}

impl ScheduleExtractor {
    pub fn new(rules: ScheduleRules) -> Result<Self, RulesError> {
        let day_cues = rules
            .day_cues
            .iter()
            .map(|cue| {
                if cue.day == 0 || cue.day > MAX_DAY {
                    return Err(RulesError::DayOutOfRange(cue.day));
                }
                Ok((cue.day, compile(&cue.pattern)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let venue_cues = rules
            .venue_cues
            .iter()
            .map(|cue| Ok((cue.venue.clone(), compile(&cue.pattern)?)))
            .collect::<Result<Vec<_>, RulesError>>()?;
        let furniture = rules
            .furniture_patterns
            .iter()
            .map(|pattern| compile(&format!("^(?:{pattern})")))
            .collect::<Result<Vec<_>, _>>()?;
        let furniture_line = rules
            .furniture_patterns
            .iter()
            .map(|pattern| compile(&format!(r"^(?:{pattern})\s*:?$")))
            .collect::<Result<Vec<_>, _>>()?;
        if rules.structural_nouns.is_empty() {
            return Err(RulesError::EmptyCues("structural_nouns".to_string()));
        }
        let nouns = rules
            .structural_nouns
            .iter()
            .map(|noun| regex::escape(noun.trim()))
            .collect::<Vec<_>>()
            .join("|");
        let header = compile(&format!(
            r"\b(?:{nouns})(?:e?s)?(?:\s+(?:\d+|[ivx]+))?\s*:?$"
        ))?;

        Ok(Self {
            rules,
            day_cues,
            venue_cues,
            furniture,
            furniture_line,
            header,
        })
    }

    /// Extractor for the built-in rules, compiled once.
    pub fn standard() -> &'static ScheduleExtractor {
        &STANDARD
    }

    pub fn rules(&self) -> &ScheduleRules {
        &self.rules
    }

    pub fn extract(&self, text: &str) -> Vec<ScheduleEntry> {
        self.extract_pages(&split_pages(text))
    }

    /// Extracts pre-segmented pages; ordinals run across all of them.
    pub fn extract_pages<S: AsRef<str>>(&self, pages: &[S]) -> Vec<ScheduleEntry> {
        let mut ordinals = OrdinalCounter::new();
        let entries: Vec<ScheduleEntry> = pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| self.extract_page(index + 1, page.as_ref(), &mut ordinals))
            .collect();
        debug!(
            pages = pages.len(),
            entries = entries.len(),
            "schedule extracted"
        );
        entries
    }

    fn extract_page(
        &self,
        page_number: usize,
        page: &str,
        ordinals: &mut OrdinalCounter,
    ) -> Vec<ScheduleEntry> {
        let Some(day) = self.page_day(page) else {
            debug!(page = page_number, "no day cue on page, skipping");
            return Vec::new();
        };
        let venue = self.page_venue(page);
        let mut state = PageState::new(day, venue);
        line::logical_lines(page)
            .iter()
            .filter_map(|logical| {
                let class = self.classify_line(logical);
                trace!(page = page_number, class = class.label(), "line classified");
                state.apply(class, ordinals)
            })
            .collect()
    }

    /// Day of the first day cue found in the page.
    pub fn page_day(&self, page: &str) -> Option<u8> {
        self.day_cues
            .iter()
            .find(|(_, pattern)| pattern.is_match(page))
            .map(|(day, _)| *day)
    }

    /// Venue of the first venue cue found in the page, else the default.
    pub fn page_venue(&self, page: &str) -> String {
        self.venue_cues
            .iter()
            .find(|(_, pattern)| pattern.is_match(page))
            .map_or_else(|| self.rules.default_venue.clone(), |(venue, _)| venue.clone())
    }

    /// Classifies one logical line. Rules are tried in order: timed entry,
    /// declaration, furniture, session header.
    pub fn classify_line(&self, logical: &str) -> LineClass {
        let logical = logical.trim();
        if let Some((time_slot, rest)) = line::split_time_prefix(logical) {
            return self.classify_timed(time_slot, rest);
        }
        if let Some(declaration) = line::parse_declaration(logical) {
            return LineClass::Declaration(declaration);
        }
        if line::is_declaration(logical) {
            return LineClass::Unrecognized;
        }
        if self.is_furniture(logical) {
            return LineClass::Furniture;
        }
        if self.is_header(logical) {
            let title = line::collapse_gaps(logical.trim_end_matches(':'));
            return LineClass::Header(title);
        }
        LineClass::Unrecognized
    }

    fn classify_timed(&self, time_slot: String, rest: &str) -> LineClass {
        if rest.is_empty() || self.is_furniture_line(rest) {
            return LineClass::Furniture;
        }
        let (title, speakers) = line::split_title_speaker(
            rest,
            &self.rules.speaker_cues,
            &self.rules.honorific_cues,
            self.rules.min_title_before_honorific,
        );
        let title = line::strip_footer(title);
        if title.chars().count() < self.rules.min_title_len {
            return LineClass::Unrecognized;
        }
        LineClass::Timed(Session {
            kind: session_kind(&title),
            time_slot,
            speakers: line::strip_footer(speakers),
            title,
        })
    }

    /// Whether `text` opens with page furniture.
    pub fn is_furniture(&self, text: &str) -> bool {
        self.furniture.iter().any(|pattern| pattern.is_match(text))
    }

    /// Whether `text` is nothing but page furniture. Timed lines are held to
    /// this, so a title that merely opens with a weekday survives.
    pub fn is_furniture_line(&self, text: &str) -> bool {
        self.furniture_line
            .iter()
            .any(|pattern| pattern.is_match(text.trim()))
    }

    fn is_header(&self, text: &str) -> bool {
        text.chars().next().is_some_and(char::is_uppercase)
            && text.chars().count() < self.rules.header_max_len
            && self.header.is_match(text)
    }
}

fn compile(pattern: &str) -> Result<Regex, RulesError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| RulesError::Pattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Entries grouped by day, then venue, each group in ordinal order.
pub fn group_by_day_and_venue(
    entries: &[ScheduleEntry],
) -> BTreeMap<u8, BTreeMap<String, Vec<&ScheduleEntry>>> {
    let mut grouped: BTreeMap<u8, BTreeMap<String, Vec<&ScheduleEntry>>> = BTreeMap::new();
    for entry in entries {
        grouped
            .entry(entry.day)
            .or_default()
            .entry(entry.venue.clone())
            .or_default()
            .push(entry);
    }
    for venues in grouped.values_mut() {
        for group in venues.values_mut() {
            group.sort_by_key(|entry| entry.ordinal);
        }
    }
    grouped
}

/// Entries that can carry speakers: everything except headers and breaks.
pub fn speaker_facing(entries: &[ScheduleEntry]) -> Vec<&ScheduleEntry> {
    entries
        .iter()
        .filter(|entry| entry.kind.is_speaker_facing())
        .collect()
}

#[cfg(test)]
mod tests {
    use faculty_model::SessionKind;

    use super::*;

    const PAGE: &str = "Day-1 Hall A\n9:00 am Symposium Opening  Dr. A Rao, Hyderabad\nModerator: Dr. B Kumar\n9:30 am Panel Discussion  Dr. C Singh";

    #[test]
    fn moderator_applies_only_after_its_declaration() {
        let entries = extract_schedule(PAGE);
        assert_eq!(entries.len(), 2);
        for entry in &entries {
            assert_eq!((entry.day, entry.venue.as_str()), (1, "Hall A"));
        }
        assert_eq!(entries[0].title, "Symposium Opening");
        assert_eq!(entries[0].speakers, "Dr. A Rao, Hyderabad");
        assert_eq!(entries[0].moderator, None);
        assert_eq!(entries[1].title, "Panel Discussion");
        assert_eq!(entries[1].speakers, "Dr. C Singh");
        assert_eq!(entries[1].moderator.as_deref(), Some("Dr. B Kumar"));
        assert_eq!((entries[0].ordinal, entries[1].ordinal), (1, 2));
    }

    #[test]
    fn flattened_page_matches_newline_page() {
        let flattened = PAGE.replace('\n', " ");
        assert_eq!(extract_schedule(&flattened), extract_schedule(PAGE));
    }

    #[test]
    fn pages_without_day_cue_are_skipped() {
        let text = "--- Page 1 ---\nCover page  9:00 am Something  Dr. X\n--- Page 2 ---\n".to_string()
            + PAGE;
        let entries = extract_schedule(&text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].ordinal, 1);
    }

    #[test]
    fn context_resets_per_page_but_ordinals_do_not() {
        let text = format!("{PAGE}\n--- Page 2 ---\nDay-2 Hall B\n10:00 am Knee Workshop  Dr. D Das");
        let entries = extract_schedule(&text);
        assert_eq!(entries.len(), 3);
        let last = &entries[2];
        assert_eq!((last.day, last.venue.as_str()), (2, "Hall B"));
        assert_eq!(last.moderator, None);
        assert_eq!(last.kind, SessionKind::Workshop);
        assert_eq!(last.ordinal, 3);
    }

    #[test]
    fn day_and_venue_cue_order() {
        let extractor = ScheduleExtractor::standard();
        assert_eq!(extractor.page_day("Day 3 ... Day-2"), Some(3));
        assert_eq!(extractor.page_day("Day-1 then day-3"), Some(1));
        assert_eq!(extractor.page_day("Day 12"), None);
        assert_eq!(extractor.page_venue("Hall A and Hall C"), "Hall C");
        assert_eq!(extractor.page_venue("Main auditorium"), "Hall A");
    }

    #[test]
    fn headers_and_furniture() {
        let extractor = ScheduleExtractor::standard();
        assert_eq!(
            extractor.classify_line("Free Paper Session 2:"),
            LineClass::Header("Free Paper Session 2".to_string())
        );
        assert_eq!(extractor.classify_line("Time Session Speaker"), LineClass::Furniture);
        assert_eq!(extractor.classify_line("Time Session"), LineClass::Furniture);
        assert_eq!(extractor.classify_line("20-2-2026"), LineClass::Furniture);
        assert_eq!(extractor.classify_line("Hall B Symposium Day"), LineClass::Furniture);
        assert_eq!(extractor.classify_line("lowercase session"), LineClass::Unrecognized);
        assert_eq!(extractor.classify_line("Registration opens"), LineClass::Unrecognized);
    }

    #[test]
    fn titles_opening_with_day_words_are_sessions() {
        let entries = extract_schedule(
            "Day-2 Hall B\n10:00 am Sunday Morning Quiz  Dr. X Das\n11:00 am Management of Day 1 fractures  Dr. Y Iyer",
        );
        let sessions: Vec<(&str, &str)> = entries
            .iter()
            .map(|entry| (entry.title.as_str(), entry.speakers.as_str()))
            .collect();
        assert_eq!(
            sessions,
            vec![
                ("Sunday Morning Quiz", "Dr. X Das"),
                ("Management of Day 1 fractures", "Dr. Y Iyer"),
            ]
        );
        assert_eq!(entries[0].kind, SessionKind::Quiz);
    }

    #[test]
    fn timed_footer_only_lines_are_furniture() {
        let extractor = ScheduleExtractor::standard();
        assert_eq!(extractor.classify_line("9:00 am Day 2"), LineClass::Furniture);
        assert_eq!(
            extractor.classify_line("9:00 am Hall A Symposium Day"),
            LineClass::Unrecognized
        );
        assert!(extractor.is_furniture_line("Saturday"));
        assert!(!extractor.is_furniture_line("Saturday Quiz"));
    }

    #[test]
    fn page_footer_never_reaches_speakers() {
        let newline = "Day-1 Hall A\n9:00 am Opening Lecture  Dr. A Rao\nHall A Symposium Day\n20-2-2026";
        let gapped = "Day-1 Hall A   9:00 am Opening Lecture  Dr. A Rao   Hall A Symposium Day   20-2-2026";
        let joined = newline.replace('\n', " ");
        for page in [newline, gapped, joined.as_str()] {
            let entries = extract_schedule(page);
            assert_eq!(entries.len(), 1, "{page}");
            assert_eq!(entries[0].title, "Opening Lecture");
            assert_eq!(entries[0].speakers, "Dr. A Rao");
        }
    }

    #[test]
    fn short_titles_are_dropped() {
        let extractor = ScheduleExtractor::standard();
        assert_eq!(extractor.classify_line("9:00 am Hi"), LineClass::Unrecognized);
        assert_eq!(extractor.classify_line("9:00 am"), LineClass::Furniture);
    }

    #[test]
    fn header_entries_are_emitted_in_order() {
        let text = "Day-2 Hall C\nGold Medal Oration\n11:00 am Medal Talk  Prof. E Iyer\n1:00 pm Lunch";
        let entries = extract_schedule(text);
        let kinds: Vec<SessionKind> = entries.iter().map(|entry| entry.kind).collect();
        assert_eq!(
            kinds,
            vec![SessionKind::Header, SessionKind::Medal, SessionKind::Break]
        );
        assert_eq!(speaker_facing(&entries).len(), 1);
    }

    #[test]
    fn custom_rules_are_validated() {
        let rules = ScheduleRules::default().with_day_cue(4, "day four");
        assert!(matches!(
            ScheduleExtractor::new(rules),
            Err(RulesError::DayOutOfRange(4))
        ));
        let rules = ScheduleRules::default().with_venue_cue("Hall D", "hall (d");
        assert!(matches!(
            ScheduleExtractor::new(rules),
            Err(RulesError::Pattern { .. })
        ));
        let rules = ScheduleRules::default().with_day_cue(2, r"21-2-2026");
        let extractor = ScheduleExtractor::new(rules).unwrap();
        assert_eq!(extractor.page_day("Saturday 21-2-2026"), Some(2));
    }

    #[test]
    fn weekday_banners_need_weekday_cues() {
        let page = "Saturday 21-2-2026 Hall B\n9:00 am Spine Quiz  Dr. X Das";
        assert!(extract_schedule(page).is_empty());

        let rules = ScheduleRules::default().with_weekday_cues("Friday");
        assert_eq!(rules.day_cues.len(), 6);
        let extractor = ScheduleExtractor::new(rules).unwrap();
        assert_eq!(extractor.page_day("Friday 20-2-2026"), Some(1));
        assert_eq!(extractor.page_day("Sunday"), Some(3));
        let entries = extractor.extract(page);
        assert_eq!(entries.len(), 1);
        assert_eq!((entries[0].day, entries[0].venue.as_str()), (2, "Hall B"));

        let unchanged = ScheduleRules::default().with_weekday_cues("Funday");
        assert_eq!(unchanged, ScheduleRules::default());
    }

    #[test]
    fn grouping_keeps_ordinal_order() {
        let text = format!("{PAGE}\n--- Page 2 ---\nDay-1 Hall B\n10:00 am Spine Talk  Dr. D Das");
        let entries = extract_schedule(&text);
        let grouped = group_by_day_and_venue(&entries);
        let day_one = &grouped[&1];
        assert_eq!(day_one.keys().collect::<Vec<_>>(), vec!["Hall A", "Hall B"]);
        let ordinals: Vec<u32> = day_one["Hall A"].iter().map(|entry| entry.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2]);
    }

    #[test]
    fn split_pages_handles_missing_markers() {
        assert_eq!(split_pages("just text"), vec!["just text"]);
        assert_eq!(split_pages("--- Page 1 ---\n\n--- Page 2 ---\nbody").len(), 1);
    }
}
