//! Rules file loading.
//!
//! A rules file is JSON with optional `names`, `schedule`, `search` and
//! `confidence` objects. Missing keys keep the built-in heuristics.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use faculty_ingest::{ScheduleExtractor, ScheduleRules};
use faculty_map::{ConfidenceThresholds, NameResolver, NameRules, RosterSearch};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesFile {
    pub names: NameRules,
    pub schedule: ScheduleRules,
    pub search: RosterSearch,
    pub confidence: ConfidenceThresholds,
}

impl RulesFile {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parse rules file")
    }

    /// Reads rules from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = fs::read_to_string(path)
            .with_context(|| format!("read rules file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("load rules from {}", path.display()))
    }

    pub fn resolver(&self) -> NameResolver {
        NameResolver::new(self.names.clone())
    }

    pub fn schedule_extractor(&self) -> Result<ScheduleExtractor> {
        ScheduleExtractor::new(self.schedule.clone()).context("compile schedule rules")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(RulesFile::from_json("{}").unwrap(), RulesFile::default());
        assert_eq!(RulesFile::load(None).unwrap(), RulesFile::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let rules = RulesFile::from_json(
            r#"{
                "names": { "honorifics": ["dr", "col"] },
                "search": { "min_score": 50 },
                "schedule": { "default_venue": "Main Hall" }
            }"#,
        )
        .unwrap();
        assert_eq!(rules.names.honorifics, vec!["dr", "col"]);
        assert_eq!(rules.names.delimiters, vec![',', ';', '&']);
        assert_eq!(rules.search.min_score, 50.0);
        assert_eq!(rules.search.weights.name, 1.0);
        assert_eq!(rules.schedule.default_venue, "Main Hall");
        assert_eq!(rules.schedule.day_cues, ScheduleRules::default().day_cues);
    }

    #[test]
    fn invalid_schedule_pattern_fails_compilation() {
        let rules = RulesFile::from_json(
            r#"{ "schedule": { "venue_cues": [{ "venue": "Hall D", "pattern": "hall (d" }] } }"#,
        )
        .unwrap();
        let err = rules.schedule_extractor().unwrap_err();
        assert!(format!("{err:#}").contains("compile schedule rules"));
    }
}
