//! Biography (CV) section types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// A labeled category of biographical content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Education,
    Experience,
    Publications,
    Awards,
    /// Lines seen before any recognizable heading.
    Other,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 5] = [
        Category::Education,
        Category::Experience,
        Category::Publications,
        Category::Awards,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Experience => "experience",
            Category::Publications => "publications",
            Category::Awards => "awards",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "education" => Ok(Category::Education),
            "experience" => Ok(Category::Experience),
            "publications" => Ok(Category::Publications),
            "awards" => Ok(Category::Awards),
            "other" | "other_content" => Ok(Category::Other),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}

/// Sections extracted from a CV, ready to upsert into a person's profile.
///
/// Each block is the newline-joined run of lines assigned to that category,
/// or `None` when no line was assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiographySections {
    pub education: Option<String>,
    pub experience: Option<String>,
    pub publications: Option<String>,
    pub awards: Option<String>,
    pub other: Option<String>,
}

impl BiographySections {
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Education => self.education.as_deref(),
            Category::Experience => self.experience.as_deref(),
            Category::Publications => self.publications.as_deref(),
            Category::Awards => self.awards.as_deref(),
            Category::Other => self.other.as_deref(),
        }
    }

    pub fn set(&mut self, category: Category, block: Option<String>) {
        let slot = match category {
            Category::Education => &mut self.education,
            Category::Experience => &mut self.experience,
            Category::Publications => &mut self.publications,
            Category::Awards => &mut self.awards,
            Category::Other => &mut self.other,
        };
        *slot = block;
    }

    /// Iterates every stored line, grouped by category in [`Category::ALL`] order.
    pub fn lines(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            self.get(category)
                .into_iter()
                .flat_map(str::lines)
                .map(move |line| (category, line))
        })
    }

    /// Number of categories that hold at least one line.
    pub fn populated_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|category| self.get(**category).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.populated_count() == 0
    }
}
