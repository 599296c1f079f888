//! Configuration types for stylebook.

use serde::{Deserialize, Serialize};

/// Report output format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One line per check plus a summary (default).
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// A regex rule declared in the config file.
///
/// Exactly one of `forbid` or `require` must be set.
///
/// ```yaml
/// rules:
///   - id: no-var-dump
///     description: Debug output is not committed.
///     forbid: "\\bvar_dump\\("
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRuleConfig {
    pub id: String,

    #[serde(default)]
    pub description: String,

    /// No checked line may match this pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forbid: Option<String>,

    /// At least one checked line must match this pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require: Option<String>,
}

pub(crate) fn default_true() -> bool {
    true
}
