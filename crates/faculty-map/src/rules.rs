//! Name normalization rule tables.
//!
//! Honorifics and speaker delimiters follow the conventions of the source
//! programs (English titles, comma/semicolon/ampersand lists). They are plain
//! data so a roster with other naming conventions can swap them via config.

use serde::{Deserialize, Serialize};

/// Rules for cleaning free-text names before resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRules {
    /// Leading titles to strip, lowercase and without a trailing period.
    pub honorifics: Vec<String>,
    /// Characters separating speakers in one free-text field.
    pub delimiters: Vec<char>,
    /// Minimum share of query tokens found in a roster name (0.0 to 1.0).
    pub min_ratio: f64,
    /// Speaker fragments shorter than this many chars are dropped.
    pub min_fragment_len: usize,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            honorifics: ["dr", "prof", "mr", "mrs", "ms", "shri", "smt"]
                .into_iter()
                .map(String::from)
                .collect(),
            delimiters: vec![',', ';', '&'],
            min_ratio: 0.5,
            min_fragment_len: 3,
        }
    }
}

impl NameRules {
    /// Returns true if `word` is a configured honorific ("Dr", "dr.", "PROF.").
    pub fn is_honorific(&self, word: &str) -> bool {
        let bare = word.trim_end_matches('.').to_lowercase();
        !bare.is_empty() && self.honorifics.iter().any(|h| h.to_lowercase() == bare)
    }

    /// Returns true if the text starts with an honorific.
    pub fn starts_with_honorific(&self, text: &str) -> bool {
        let trimmed = text.trim_start();
        if trimmed
            .split_whitespace()
            .next()
            .is_some_and(|word| self.is_honorific(word))
        {
            return true;
        }
        self.glued_honorific_len(trimmed).is_some()
    }

    /// Removes every leading honorific ("Prof. Dr. A Rao" -> "A Rao").
    pub fn strip_honorifics<'a>(&self, text: &'a str) -> &'a str {
        let mut rest = text.trim_start();
        loop {
            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let word = &rest[..word_end];
            if self.is_honorific(word) {
                rest = rest[word_end..].trim_start();
                continue;
            }
            // "Dr.Rao" has no space after the period
            if let Some(len) = self.glued_honorific_len(rest) {
                rest = rest[len..].trim_start();
                continue;
            }
            return rest;
        }
    }

    /// Cleans a single free-text name: strips honorifics, parentheticals and
    /// anything from the first comma on ("Dr. Rao (HOD), Hyderabad" -> "Rao").
    pub fn clean_name(&self, raw: &str) -> String {
        let without_parens = strip_parentheticals(raw);
        let head = without_parens
            .split(',')
            .next()
            .unwrap_or_default();
        self.strip_honorifics(head)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Splits a multi-speaker field into speaker fragments, in listed order.
    ///
    /// A comma-separated single word without an honorific that follows a
    /// titled speaker is taken as that speaker's city and kept attached
    /// ("Dr. A Rao, Hyderabad; Dr. B Kumar" -> two fragments).
    pub fn split_speakers(&self, field: &str) -> Vec<String> {
        let mut pieces: Vec<(String, Option<char>)> = Vec::new();
        let mut current = String::new();
        let mut preceding: Option<char> = None;
        for ch in field.chars() {
            if self.delimiters.contains(&ch) {
                pieces.push((std::mem::take(&mut current), preceding));
                preceding = Some(ch);
            } else {
                current.push(ch);
            }
        }
        pieces.push((current, preceding));

        let mut fragments: Vec<String> = Vec::new();
        for (piece, delimiter) in pieces {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            let is_location = delimiter == Some(',')
                && !piece.contains(char::is_whitespace)
                && !self.starts_with_honorific(piece);
            match fragments.last_mut() {
                Some(last) if is_location && self.starts_with_honorific(last) => {
                    last.push_str(", ");
                    last.push_str(piece);
                }
                _ => fragments.push(piece.to_string()),
            }
        }

        fragments.retain(|f| f.chars().count() >= self.min_fragment_len);
        fragments
    }

    fn glued_honorific_len(&self, text: &str) -> Option<usize> {
        self.honorifics.iter().find_map(|h| {
            let len = h.len() + 1;
            let head = text.get(..len)?;
            let next = text[len..].chars().next()?;
            (head.eq_ignore_ascii_case(&format!("{h}.")) && next.is_alphabetic()).then_some(len)
        })
    }
}

fn strip_parentheticals(raw: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_stacked_honorifics() {
        let rules = NameRules::default();
        assert_eq!(rules.strip_honorifics("Prof. Dr. A Rao"), "A Rao");
        assert_eq!(rules.strip_honorifics("DR Rao"), "Rao");
        assert_eq!(rules.strip_honorifics("Dr.Rao"), "Rao");
        assert_eq!(rules.strip_honorifics("Drona Rao"), "Drona Rao");
    }

    #[test]
    fn clean_name_drops_city_and_parentheticals() {
        let rules = NameRules::default();
        assert_eq!(rules.clean_name("Dr. Rao, Hyderabad"), "Rao");
        assert_eq!(rules.clean_name("Dr. K  Rao (HOD)"), "K Rao");
        assert_eq!(rules.clean_name("Dr."), "");
    }

    #[test]
    fn split_speakers_keeps_cities_attached() {
        let rules = NameRules::default();
        let fragments = rules.split_speakers("Dr. A Rao, Hyderabad; Dr. B Kumar & Dr. C Singh");
        assert_eq!(
            fragments,
            vec!["Dr. A Rao, Hyderabad", "Dr. B Kumar", "Dr. C Singh"]
        );
    }

    #[test]
    fn split_speakers_without_titles_splits_on_every_delimiter() {
        let rules = NameRules::default();
        let fragments = rules.split_speakers("Rao, Kumar & Singh");
        assert_eq!(fragments, vec!["Rao", "Kumar", "Singh"]);
    }

    #[test]
    fn split_speakers_drops_short_fragments() {
        let rules = NameRules::default();
        assert_eq!(rules.split_speakers("Dr. A Rao; ; X"), vec!["Dr. A Rao"]);
        assert!(rules.split_speakers("").is_empty());
    }

    #[test]
    fn rules_deserialize_with_defaults() {
        let rules: NameRules =
            serde_json::from_str(r#"{"honorifics": ["sri"]}"#).expect("parse rules");
        assert_eq!(rules.honorifics, vec!["sri".to_string()]);
        assert_eq!(rules.delimiters, vec![',', ';', '&']);
        assert!((rules.min_ratio - 0.5).abs() < f64::EPSILON);
    }
}
