//! Logical-line preprocessing and the lexical pieces of a program line.
//!
//! PDF text arrives either one line per slot or a whole page flattened onto
//! one line. Both shapes are reduced to the same logical lines here before
//! any classification happens.

use std::sync::LazyLock;

use regex::Regex;

/// Marker left behind by a run of two or more spaces.
pub const GAP: &str = "  ";

const TIME_PATTERN: &str = r"(\d{1,2})[:.](\d{2})\s*(?:([ap])\.?\s?m\b\.?)?(?:\s*(?:-|–|\bto\b)\s*(\d{1,2})[:.](\d{2})\s*(?:([ap])\.?\s?m\b\.?)?)?";

static TIME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?i){TIME_PATTERN}")).expect("Invalid time regex"));

static LEADING_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)^{TIME_PATTERN}")).expect("Invalid leading time regex")
});

static DECLARATION_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:moderators?|chai?r?persons?)\s*:").expect("Invalid declaration regex")
});

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(moderators?|chai?r?persons?)\s*:\s*(.*)$")
        .expect("Invalid declaration regex")
});

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("Invalid whitespace regex"));

/// Footer shapes flattened pages carry: `Hall A Symposium Day`, date stamps.
const FOOTER_PATTERN: &str = r"(?:(?:hall[\s-]*[a-z]\s+)?(?:symposium|specialty|practice)\s+(?:day|specialty)\b|\d{1,2}-\d{1,2}-\d{2,4}\b)";

/// Footers plus `Day-N` and `Page N` labels; cut only after a gap.
static FURNITURE_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{FOOTER_PATTERN}|day[\s-]*\d+\b|page\s+\d+\b)"))
        .expect("Invalid furniture cue regex")
});

static TRAILING_FOOTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)(?:^|\s+){FOOTER_PATTERN}.*$"))
        .expect("Invalid trailing footer regex")
});

/// Who a declaration line names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Moderator,
    Chairperson,
}

/// A `Moderator: X` or `Chairperson: X` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub role: Role,
    pub value: String,
}

/// Tabs and NBSPs become spaces, runs of spaces become one [`GAP`].
pub fn normalize_physical_line(line: &str) -> String {
    let spaced: String = line
        .chars()
        .map(|c| if c == '\t' || c == '\u{a0}' { ' ' } else { c })
        .collect();
    SPACE_RUN.replace_all(spaced.trim(), GAP).into_owned()
}

/// Splits one normalized line before every meridiem time token and every
/// declaration cue that follows whitespace, and before page furniture that
/// follows a [`GAP`].
pub fn segment_line(line: &str) -> Vec<&str> {
    let furniture = FURNITURE_CUE
        .find_iter(line)
        .map(|m| m.start())
        .filter(|&start| line[..start].ends_with(GAP));
    let mut cuts: Vec<usize> = TIME_TOKEN
        .captures_iter(line)
        .filter(|caps| caps.get(3).is_some() || caps.get(6).is_some())
        .filter_map(|caps| caps.get(0))
        .map(|m| m.start())
        .chain(DECLARATION_CUE.find_iter(line).map(|m| m.start()))
        .filter(|&start| follows_whitespace(line, start))
        .chain(furniture)
        .collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut pieces = Vec::with_capacity(cuts.len() + 1);
    let mut from = 0;
    for cut in cuts {
        pieces.push(&line[from..cut]);
        from = cut;
    }
    pieces.push(&line[from..]);
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

fn follows_whitespace(line: &str, start: usize) -> bool {
    start > 0
        && line[..start]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace)
}

/// Physical lines of a page reduced to logical lines.
pub fn logical_lines(page: &str) -> Vec<String> {
    page.lines()
        .map(normalize_physical_line)
        .flat_map(|line| {
            segment_line(&line)
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Leading clock time, normalized, and the text after it.
///
/// Only times with a meridiem or ranges count; a bare `10.30` could be
/// anything.
pub fn split_time_prefix(line: &str) -> Option<(String, &str)> {
    let caps = LEADING_TIME.captures(line)?;
    let start_meridiem = caps.get(3).map(|m| m.as_str());
    let end_meridiem = caps.get(6).map(|m| m.as_str());
    let end_clock = caps.get(4).zip(caps.get(5));
    if start_meridiem.is_none() && end_meridiem.is_none() && end_clock.is_none() {
        return None;
    }

    let mut slot = clock(&caps[1], &caps[2], start_meridiem);
    if let Some((hour, minute)) = end_clock {
        slot.push_str(" - ");
        slot.push_str(&clock(hour.as_str(), minute.as_str(), end_meridiem));
    }
    let rest = &line[caps.get(0).map_or(0, |m| m.end())..];
    Some((slot, rest.trim()))
}

fn clock(hour: &str, minute: &str, meridiem: Option<&str>) -> String {
    let hour = hour.trim_start_matches('0');
    let hour = if hour.is_empty() { "0" } else { hour };
    match meridiem {
        Some(m) => format!("{hour}:{minute} {}m", m.to_lowercase()),
        None => format!("{hour}:{minute}"),
    }
}

/// Parses a declaration line. An empty value yields `None`.
pub fn parse_declaration(line: &str) -> Option<Declaration> {
    let caps = DECLARATION.captures(line)?;
    let role = if caps[1].to_lowercase().starts_with("mod") {
        Role::Moderator
    } else {
        Role::Chairperson
    };
    let value = caps[2]
        .split(GAP)
        .next()
        .unwrap_or_default()
        .trim()
        .trim_end_matches([',', ';'])
        .trim();
    if value.is_empty() {
        return None;
    }
    Some(Declaration {
        role,
        value: value.to_string(),
    })
}

pub fn is_declaration(line: &str) -> bool {
    DECLARATION.is_match(line)
}

/// Collapses gap markers to single spaces.
pub fn collapse_gaps(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drops a page footer glued to the end of a title or speaker field
/// ("... Hall B Symposium Day 20-2-2026"). Inner `Day 1` or `Hall B`
/// mentions are kept.
pub fn strip_footer(text: &str) -> String {
    collapse_gaps(&TRAILING_FOOTER.replace(text, ""))
}

/// Splits the text after a time slot into `(title, speakers)`.
///
/// Tried in order: a gap followed by a speaker cue; the earliest honorific
/// that leaves at least `min_title_chars` of title; the whole text as title.
pub fn split_title_speaker<'a>(
    text: &'a str,
    speaker_cues: &[String],
    honorifics: &[String],
    min_title_chars: usize,
) -> (&'a str, &'a str) {
    let gap_split = text.match_indices(GAP).find_map(|(idx, _)| {
        let after = text[idx..].trim_start();
        speaker_cues
            .iter()
            .any(|cue| after.starts_with(cue.as_str()))
            .then_some((&text[..idx], after))
    });
    if let Some((title, speakers)) = gap_split {
        return (title.trim(), speakers.trim());
    }

    let honorific_at = honorifics
        .iter()
        .flat_map(|cue| text.match_indices(cue.as_str()).map(|(idx, _)| idx))
        .filter(|&idx| text[..idx].chars().count() > min_title_chars)
        .min();
    match honorific_at {
        Some(idx) => (text[..idx].trim(), text[idx..].trim()),
        None => (text.trim(), ""),
    }
}
