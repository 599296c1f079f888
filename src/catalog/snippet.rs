//! The snippet record.

use serde::{Deserialize, Serialize};

/// A minimal example code fragment paired with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Unique identifier within a registry.
    pub id: String,

    /// Title the documentation header's summary line is derived from.
    pub title: String,

    /// Longer description rendered under the summary (may be empty).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,

    /// Code lines, rendered verbatim.
    #[serde(default)]
    pub body: Vec<String>,

    /// Ids of the style rules this snippet demonstrates.
    #[serde(default)]
    pub tags: Vec<String>,

    /// A deliberately bad example that must violate its rules.
    #[serde(default, skip_serializing_if = "is_false")]
    pub negative: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Snippet {
    /// Create a snippet with an empty body and no tags.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: Vec::new(),
            body: Vec::new(),
            tags: Vec::new(),
            negative: false,
        }
    }

    /// Set the longer description lines.
    pub fn with_description(mut self, lines: &[&str]) -> Self {
        self.description = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    /// Set the body lines.
    pub fn with_body(mut self, lines: &[&str]) -> Self {
        self.body = lines.iter().map(|l| l.to_string()).collect();
        self
    }

    /// Set the rule tags.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Mark this snippet as a negative example.
    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    /// Drop repeated tags, keeping the first occurrence.
    pub(crate) fn dedup_tags(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.tags.retain(|tag| seen.insert(tag.clone()));
    }
}
