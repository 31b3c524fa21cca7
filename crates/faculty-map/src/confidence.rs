//! Confidence levels for resolution quality.

use std::collections::BTreeMap;

use faculty_model::ResolvedMatch;
use serde::{Deserialize, Serialize};

/// Confidence level categories for link quality assessment.
///
/// These levels help callers decide what to do with a resolution:
/// - `High`: link without review
/// - `Medium`: link, but surface for a quick check
/// - `Low`: needs manual confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Low confidence (≥ low threshold, < medium threshold).
    Low,
    /// Medium confidence (≥ medium threshold, < high threshold).
    Medium,
    /// High confidence (≥ high threshold).
    High,
}

impl ConfidenceLevel {
    /// Returns a human-readable description of the confidence level.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "high confidence - likely correct",
            Self::Medium => "medium confidence - should review",
            Self::Low => "low confidence - needs verification",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Configurable thresholds on the 0 to 100 confidence scale.
///
/// - Below `low`: not a usable link
/// - `low` to `medium`: [`ConfidenceLevel::Low`]
/// - `medium` to `high`: [`ConfidenceLevel::Medium`]
/// - At or above `high`: [`ConfidenceLevel::High`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    /// Minimum confidence for high-quality links (default: 90).
    pub high: f64,
    /// Minimum confidence for medium-quality links (default: 60).
    pub medium: f64,
    /// Minimum confidence to count as a link at all (default: 20).
    pub low: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 90.0,
            medium: 60.0,
            low: 20.0,
        }
    }
}

impl ConfidenceThresholds {
    /// Thresholds for unattended linking.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            high: 100.0,
            medium: 75.0,
            low: 50.0,
        }
    }

    /// Categorizes a confidence score into a confidence level.
    ///
    /// Returns `None` if the score is below the low threshold.
    #[must_use]
    pub fn categorize(&self, confidence: f64) -> Option<ConfidenceLevel> {
        if confidence >= self.high {
            Some(ConfidenceLevel::High)
        } else if confidence >= self.medium {
            Some(ConfidenceLevel::Medium)
        } else if confidence >= self.low {
            Some(ConfidenceLevel::Low)
        } else {
            None
        }
    }

    /// Level of a resolution; unresolved matches never have one.
    #[must_use]
    pub fn level_of(&self, resolved: &ResolvedMatch) -> Option<ConfidenceLevel> {
        if resolved.is_resolved() {
            self.categorize(resolved.confidence)
        } else {
            None
        }
    }

    /// Counts resolutions per level; unresolved ones are not counted.
    #[must_use]
    pub fn count_by_level(&self, matches: &[ResolvedMatch]) -> BTreeMap<ConfidenceLevel, usize> {
        let mut counts = BTreeMap::new();
        for resolved in matches {
            if let Some(level) = self.level_of(resolved) {
                *counts.entry(level).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Resolutions a human should look at: resolved below `high`.
    #[must_use]
    pub fn needs_review<'a>(&self, matches: &'a [ResolvedMatch]) -> Vec<&'a ResolvedMatch> {
        matches
            .iter()
            .filter(|m| m.is_resolved() && self.level_of(m) != Some(ConfidenceLevel::High))
            .collect()
    }
}
