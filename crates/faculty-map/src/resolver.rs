//! Roster resolution built on the fuzzy matcher.
//!
//! Two call shapes:
//! - [`RosterSearch`] ranks the whole roster against an interactive query.
//! - [`NameResolver`] links one free-text name (from a filename or a speaker
//!   list) to at most one person.

use std::cmp::Ordering;

use faculty_model::{Person, ResolvedMatch, SpeakerLink};
use rapidfuzz::distance::jaro_winkler;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::rules::NameRules;
use crate::score::score;
use crate::utils::{name_from_filename, name_tokens, normalize_text};

/// Minimum score a person needs to appear in search results.
const DEFAULT_MIN_SEARCH_SCORE: f64 = 20.0;

/// Per-field weights for ranked search. A weight of 0 skips the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchWeights {
    pub name: f64,
    pub institution: f64,
    pub qualification: f64,
    pub designation: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            name: 1.0,
            institution: 0.6,
            qualification: 0.4,
            designation: 0.0,
        }
    }
}

/// Ranked search over a roster snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSearch {
    pub weights: SearchWeights,
    /// Persons must score strictly above this to be returned.
    pub min_score: f64,
}

impl Default for RosterSearch {
    fn default() -> Self {
        Self {
            weights: SearchWeights::default(),
            min_score: DEFAULT_MIN_SEARCH_SCORE,
        }
    }
}

impl RosterSearch {
    pub fn new(weights: SearchWeights, min_score: f64) -> Self {
        Self { weights, min_score }
    }

    /// Weighted score of one person: the best of its weighted field scores.
    pub fn score_person(&self, person: &Person, query: &str) -> f64 {
        let fields = [
            (Some(person.name.as_str()), self.weights.name),
            (person.institution.as_deref(), self.weights.institution),
            (person.qualification.as_deref(), self.weights.qualification),
            (person.designation.as_deref(), self.weights.designation),
        ];
        fields
            .into_iter()
            .filter(|(_, weight)| *weight > 0.0)
            .filter_map(|(value, weight)| value.map(|v| score(v, query) * weight))
            .fold(0.0, f64::max)
    }

    /// Returns persons scoring above `min_score`, best first.
    ///
    /// Equal scores keep roster order.
    pub fn search(&self, roster: &[Person], query: &str) -> Vec<ResolvedMatch> {
        let mut results: Vec<ResolvedMatch> = roster
            .iter()
            .filter_map(|person| {
                let confidence = self.score_person(person, query);
                (confidence > self.min_score).then(|| ResolvedMatch {
                    query: query.to_string(),
                    person: Some(person.clone()),
                    confidence,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
        });
        debug!(
            roster_size = roster.len(),
            result_count = results.len(),
            "roster search complete"
        );
        results
    }
}

/// A roster name close to an unresolved query, for manual linking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameSuggestion {
    pub person: Person,
    /// Jaro-Winkler similarity scaled to `[0, 100]`.
    pub similarity: f64,
}

/// Resolves single free-text names against a roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameResolver {
    pub rules: NameRules,
}

impl NameResolver {
    pub fn new(rules: NameRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &NameRules {
        &self.rules
    }

    /// Resolves one name to the best-matching person, if any.
    ///
    /// The match ratio is the share of cleaned query tokens contained in the
    /// person's lowercased display name. The best ratio wins (earliest
    /// roster entry on ties) and must reach `rules.min_ratio`.
    pub fn resolve(&self, name: &str, roster: &[Person]) -> ResolvedMatch {
        let cleaned = self.rules.clean_name(name);
        let tokens = name_tokens(&cleaned);
        if tokens.is_empty() {
            debug!("name has no usable tokens");
            return ResolvedMatch::unresolved(name);
        }

        let mut best: Option<(&Person, f64)> = None;
        for person in roster {
            let ratio = token_ratio(&tokens, &person.name);
            trace!(person_id = %person.id, ratio, "candidate ratio");
            if ratio >= self.rules.min_ratio && best.is_none_or(|(_, top)| ratio > top) {
                best = Some((person, ratio));
            }
        }

        match best {
            Some((person, ratio)) => ResolvedMatch {
                query: name.to_string(),
                person: Some(person.clone()),
                confidence: ratio * 100.0,
            },
            None => {
                debug!(token_count = tokens.len(), "name unresolved");
                ResolvedMatch::unresolved(name)
            }
        }
    }

    /// Resolves the person a file belongs to from its file name.
    pub fn resolve_filename(&self, filename: &str, roster: &[Person]) -> ResolvedMatch {
        let name = name_from_filename(filename);
        let mut resolved = self.resolve(&name, roster);
        resolved.query = filename.to_string();
        resolved
    }

    /// Splits a multi-speaker field and resolves every speaker in listed
    /// order. Unresolved speakers are kept so callers can show placeholders.
    pub fn resolve_speakers(&self, field: &str, roster: &[Person]) -> Vec<SpeakerLink> {
        self.rules
            .split_speakers(field)
            .into_iter()
            .map(|label| {
                let resolution = self.resolve(&label, roster);
                SpeakerLink { label, resolution }
            })
            .collect()
    }

    /// Roster names most similar to `name`, for operators linking by hand.
    pub fn suggest(&self, name: &str, roster: &[Person], limit: usize) -> Vec<NameSuggestion> {
        let query = normalize_text(&self.rules.clean_name(name));
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }
        let mut suggestions: Vec<NameSuggestion> = roster
            .iter()
            .map(|person| {
                let candidate = normalize_text(self.rules.strip_honorifics(&person.name));
                let similarity = jaro_winkler::similarity(query.chars(), candidate.chars());
                NameSuggestion {
                    person: person.clone(),
                    similarity: similarity * 100.0,
                }
            })
            .collect();
        suggestions.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        suggestions.truncate(limit);
        suggestions
    }
}

fn token_ratio(tokens: &[String], display_name: &str) -> f64 {
    let lower = display_name.to_lowercase();
    let hits = tokens
        .iter()
        .filter(|token| lower.contains(token.as_str()))
        .count();
    hits as f64 / tokens.len() as f64
}
