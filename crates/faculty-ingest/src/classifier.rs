//! Keyword-cue classification shared by section and schedule parsing.
//!
//! A [`CueTable`] is an ordered list of `(label, detector)` pairs. The first
//! detector that fires wins, so table order is the tie-break.

use regex::{Regex, RegexBuilder};

use crate::error::RulesError;

/// Lines at or above this many chars are never headings.
const HEADING_MAX_LEN: usize = 100;
/// Short lines count as headings even in mixed case.
const HEADING_SHORT_LEN: usize = 50;

/// How cues are matched against a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueMode {
    /// Whole words, tolerating a plural `s`/`es` suffix.
    Words,
    /// Plain substrings ("inaugur" matches "Inaugural").
    Substrings,
}

/// Case-insensitive keyword detector compiled from cue words.
#[derive(Debug, Clone)]
pub struct Detector {
    pattern: Regex,
}

impl Detector {
    /// Builds a detector from cue words. A space inside a cue matches any
    /// run of whitespace, including none ("work history" matches "WorkHistory").
    pub fn new<S: AsRef<str>>(cues: &[S], mode: CueMode) -> Result<Self, RulesError> {
        let alternatives: Vec<String> = cues
            .iter()
            .map(|cue| cue.as_ref().trim())
            .filter(|cue| !cue.is_empty())
            .map(|cue| {
                cue.split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s*")
            })
            .collect();
        if alternatives.is_empty() {
            return Err(RulesError::EmptyCues(format!("{mode:?}")));
        }
        let joined = alternatives.join("|");
        let pattern = match mode {
            CueMode::Words => format!(r"\b(?:{joined})(?:e?s)?\b"),
            CueMode::Substrings => format!("(?:{joined})"),
        };
        let pattern = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| RulesError::Pattern { pattern, source })?;
        Ok(Self { pattern })
    }

    pub fn words<S: AsRef<str>>(cues: &[S]) -> Result<Self, RulesError> {
        Self::new(cues, CueMode::Words)
    }

    pub fn substrings<S: AsRef<str>>(cues: &[S]) -> Result<Self, RulesError> {
        Self::new(cues, CueMode::Substrings)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Ordered `(label, detector)` pairs.
#[derive(Debug, Clone)]
pub struct CueTable<L> {
    rules: Vec<(L, Detector)>,
}

impl<L> Default for CueTable<L> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<L: Copy> CueTable<L> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, label: L, detector: Detector) -> Self {
        self.rules.push((label, detector));
        self
    }

    pub fn push(&mut self, label: L, detector: Detector) {
        self.rules.push((label, detector));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = L> + '_ {
        self.rules.iter().map(|(label, _)| *label)
    }

    /// First label whose cues occur anywhere in `text`, without the heading guard.
    pub fn first_match(&self, text: &str) -> Option<L> {
        self.rules
            .iter()
            .find(|(_, detector)| detector.is_match(text))
            .map(|(label, _)| *label)
    }

    /// Label of the context a heading line opens, or `None` to keep the
    /// current context. See [`classify`].
    pub fn classify(&self, line: &str) -> Option<L> {
        classify(line, self)
    }
}

/// Decides whether `line` starts a new labeled context.
///
/// Keyword presence alone is not enough: the line must also look like a
/// heading (see [`is_heading_like`]), otherwise prose that mentions "award"
/// mid-paragraph would switch sections.
pub fn classify<L: Copy>(line: &str, table: &CueTable<L>) -> Option<L> {
    let trimmed = line.trim();
    if !is_heading_like(trimmed) {
        return None;
    }
    table.first_match(trimmed)
}

/// Heading guard: under 100 chars, and upper-case, colon-terminated, or
/// under 50 chars.
pub fn is_heading_like(line: &str) -> bool {
    let trimmed = line.trim();
    let len = trimmed.chars().count();
    if len == 0 || len >= HEADING_MAX_LEN {
        return false;
    }
    trimmed == trimmed.to_uppercase() || trimmed.ends_with(':') || len < HEADING_SHORT_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Label {
        First,
        Second,
    }

    fn table() -> CueTable<Label> {
        CueTable::new()
            .with(Label::First, Detector::words(&["award", "work history"]).unwrap())
            .with(Label::Second, Detector::words(&["medal", "award"]).unwrap())
    }

    #[test]
    fn plural_and_case_tolerant() {
        let table = table();
        assert_eq!(table.classify("AWARDS"), Some(Label::First));
        assert_eq!(table.classify("Medals:"), Some(Label::Second));
        assert_eq!(table.classify("Work   History"), Some(Label::First));
    }

    #[test]
    fn word_boundaries_are_respected() {
        let table = table();
        assert_eq!(table.classify("Rewarding cases"), None);
        assert_eq!(table.classify("Medallion"), None);
    }

    #[test]
    fn first_rule_wins() {
        assert_eq!(table().classify("Award and medal"), Some(Label::First));
    }

    #[test]
    fn long_prose_is_not_a_heading() {
        let prose = "He received an award from the society for his outstanding contribution to spine surgery";
        assert!(prose.len() < 100);
        assert_eq!(table().classify(prose), None);
        assert!(table().first_match(prose).is_some());
    }

    #[test]
    fn upper_case_or_colon_allows_longer_headings() {
        let upper = "HONOURS, AWARDS AND OTHER RECOGNITION RECEIVED DURING RESIDENCY";
        assert!(upper.len() >= 50);
        assert_eq!(table().classify(upper), Some(Label::First));
        let colon = "Selected awards received during residency and fellowship years:";
        assert_eq!(table().classify(colon), Some(Label::First));
        let too_long = "A".repeat(95) + " AWARD";
        assert_eq!(table().classify(&too_long), None);
    }

    #[test]
    fn substring_mode_matches_inside_words() {
        let detector = Detector::substrings(&["inaugur"]).unwrap();
        assert!(detector.is_match("Inaugural Function"));
        assert!(Detector::substrings::<&str>(&[]).is_err());
    }
}
