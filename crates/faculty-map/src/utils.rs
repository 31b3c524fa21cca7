//! Utility functions for name normalization.

use std::path::Path;

/// Length of the storage object id some upload tools append to file stems.
const OBJECT_ID_LEN: usize = 24;

/// Normalizes text for comparison by lowercasing and replacing separators with spaces.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a cleaned name into lowercase match tokens.
///
/// Punctuation at token edges is dropped ("A." -> "a") and tokens of a
/// single character are discarded, since initials match almost anything.
pub fn name_tokens(cleaned: &str) -> Vec<String> {
    cleaned
        .split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| token.chars().count() > 1)
        .collect()
}

/// Recovers a person's name from an uploaded file name.
///
/// `Dr__Anil_Kumar_64f0c2a9e4b0a1b2c3d4e5f6.pdf` -> `Dr Anil Kumar`. The
/// honorific is left for [`crate::NameRules`] to strip.
pub fn name_from_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    strip_object_id(stem)
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_object_id(stem: &str) -> &str {
    let Some(split) = stem.len().checked_sub(OBJECT_ID_LEN + 1) else {
        return stem;
    };
    let Some(suffix) = stem.get(split..) else {
        return stem;
    };
    let is_object_id = suffix.starts_with('_')
        && suffix[1..].chars().all(|c| c.is_ascii_hexdigit());
    if is_object_id { &stem[..split] } else { stem }
}
