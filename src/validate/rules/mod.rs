//! Style rules and the rule set that owns them.
//!
//! A rule pairs a stable id with a predicate over a whole snippet. Built-in
//! rules carry a Rust function; rules from the config file carry a regex
//! applied to the snippet's checked lines.

pub mod builtin;
pub mod markers;
mod patterns;


use std::collections::HashMap;

use regex::Regex;

use crate::catalog::{Registry, Snippet};
use crate::config::PatternRuleConfig;
use crate::error::{Result, StylebookError};

pub use builtin::builtin_rules;
pub use markers::{CheckedLine, checked_lines};
pub use patterns::compile_pattern_rule;

/// Predicate signature for built-in rules.
pub type RuleFn = fn(&Snippet) -> bool;

/// How a rule decides.
pub enum Predicate {
    Builtin(RuleFn),
    /// No checked line may match.
    Forbid(Regex),
    /// At least one checked line must match.
    Require(Regex),
}

/// A checkable predicate capturing one coding-convention requirement.
pub struct StyleRule {
    id: String,
    description: String,
    predicate: Predicate,
}

impl std::fmt::Debug for StyleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleRule")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("kind", &self.kind())
            .finish()
    }
}

impl StyleRule {
    pub fn builtin(id: impl Into<String>, description: impl Into<String>, f: RuleFn) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            predicate: Predicate::Builtin(f),
        }
    }

    pub fn forbid(id: impl Into<String>, description: impl Into<String>, regex: Regex) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            predicate: Predicate::Forbid(regex),
        }
    }

    pub fn require(id: impl Into<String>, description: impl Into<String>, regex: Regex) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            predicate: Predicate::Require(regex),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Short label for listings: `builtin`, `forbid` or `require`.
    pub fn kind(&self) -> &'static str {
        match self.predicate {
            Predicate::Builtin(_) => "builtin",
            Predicate::Forbid(_) => "forbid",
            Predicate::Require(_) => "require",
        }
    }

    /// Apply the predicate. `true` means the snippet follows the rule.
    pub fn matches(&self, snippet: &Snippet) -> bool {
        match &self.predicate {
            Predicate::Builtin(f) => f(snippet),
            Predicate::Forbid(regex) => checked_lines(&snippet.body)
                .iter()
                .all(|line| !regex.is_match(line.text)),
            Predicate::Require(regex) => checked_lines(&snippet.body)
                .iter()
                .any(|line| regex.is_match(line.text)),
        }
    }
}

/// Rules indexed by id, read-only once built.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<StyleRule>,
    index: HashMap<String, usize>,
}

impl RuleSet {
    /// Build a rule set; repeated ids are a user error.
    pub fn new(rules: Vec<StyleRule>) -> Result<Self> {
        let mut set = Self {
            rules: Vec::with_capacity(rules.len()),
            index: HashMap::with_capacity(rules.len()),
        };
        for rule in rules {
            set.insert(rule)?;
        }
        Ok(set)
    }

    /// The built-in rules only.
    pub fn builtin() -> Self {
        let rules = builtin_rules();
        let index = rules
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        Self { rules, index }
    }

    /// Add the pattern rules declared in config.
    pub fn with_config_rules(mut self, configs: &[PatternRuleConfig]) -> Result<Self> {
        for config in configs {
            self.insert(compile_pattern_rule(config)?)?;
        }
        Ok(self)
    }

    fn insert(&mut self, rule: StyleRule) -> Result<()> {
        if self.index.contains_key(&rule.id) {
            return Err(StylebookError::UserError(format!(
                "duplicate rule id '{}'",
                rule.id
            )));
        }
        self.index.insert(rule.id.clone(), self.rules.len());
        self.rules.push(rule);
        Ok(())
    }

    /// Look up a rule by id.
    pub fn get(&self, id: &str) -> Option<&StyleRule> {
        self.index.get(id).map(|&i| &self.rules[i])
    }

    /// Resolve a snippet's tag, failing with `RuleNotFound`.
    pub fn resolve(&self, snippet_id: &str, rule_id: &str) -> Result<&StyleRule> {
        self.get(rule_id)
            .ok_or_else(|| StylebookError::RuleNotFound {
                snippet: snippet_id.to_string(),
                rule: rule_id.to_string(),
            })
    }

    /// Rules in load order: built-ins first, then config rules.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    /// Number of loaded rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are loaded.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check that every tag in the registry names a loaded rule.
    ///
    /// Run when a catalog is assembled so a bad tag stops the program before
    /// any snippet is processed.
    pub fn verify_tags(&self, registry: &Registry) -> Result<()> {
        for snippet in registry.list() {
            for tag in &snippet.tags {
                self.resolve(&snippet.id, tag)?;
            }
        }
        Ok(())
    }

    /// Each rule with the number of snippets tagged with it, in rule order.
    pub fn usage_counts(&self, registry: &Registry) -> Vec<(&StyleRule, usize)> {
        self.rules
            .iter()
            .map(|rule| {
                let count = registry
                    .list()
                    .iter()
                    .filter(|s| s.tags.iter().any(|t| t == &rule.id))
                    .count();
                (rule, count)
            })
            .collect()
    }

    /// Rules no snippet is tagged with.
    pub fn dead_rules(&self, registry: &Registry) -> Vec<&StyleRule> {
        self.usage_counts(registry)
            .into_iter()
            .filter(|(_, count)| *count == 0)
            .map(|(rule, _)| rule)
            .collect()
    }
}
