//! Roster persons and resolution outcomes.

use serde::{Deserialize, Serialize};

/// A canonical roster entry. Read-only to the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            institution: None,
            qualification: None,
            designation: None,
        }
    }

    #[must_use]
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(institution.into());
        self
    }

    #[must_use]
    pub fn with_qualification(mut self, qualification: impl Into<String>) -> Self {
        self.qualification = Some(qualification.into());
        self
    }

    #[must_use]
    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }
}

/// Outcome of resolving one piece of free text against the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMatch {
    /// The text that was resolved, as supplied by the caller.
    pub query: String,
    pub person: Option<Person>,
    /// Confidence score in `[0, 100]`.
    pub confidence: f64,
}

impl ResolvedMatch {
    pub fn unresolved(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            person: None,
            confidence: 0.0,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.person.is_some()
    }

    pub fn person_id(&self) -> Option<&str> {
        self.person.as_ref().map(|p| p.id.as_str())
    }
}

/// One speaker from a multi-speaker field, in listed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerLink {
    /// Speaker fragment exactly as it appeared in the field (trimmed).
    pub label: String,
    pub resolution: ResolvedMatch,
}

impl SpeakerLink {
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_resolved()
    }
}
