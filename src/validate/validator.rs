//! Applying rules to snippets.

use crate::catalog::{Registry, Snippet};
use crate::error::Result;

use super::rules::{RuleSet, StyleRule};
use super::types::{RuleCheck, SnippetReport, ValidationReport};

/// Apply one rule to one snippet.
///
/// Returns the raw predicate result: `true` when the snippet follows the rule.
pub fn check(snippet: &Snippet, rule: &StyleRule) -> bool {
    rule.matches(snippet)
}

/// Check one snippet against every rule it is tagged with.
///
/// # Returns
///
/// * `Ok(SnippetReport)` - One check per tag, in tag order
/// * `Err(StylebookError::RuleNotFound)` - A tag names no loaded rule
pub fn validate_snippet(snippet: &Snippet, rules: &RuleSet) -> Result<SnippetReport> {
    let mut checks = Vec::with_capacity(snippet.tags.len());

    for tag in &snippet.tags {
        let rule = rules.resolve(&snippet.id, tag)?;
        checks.push(RuleCheck::new(
            rule.id(),
            check(snippet, rule),
            snippet.negative,
        ));
    }

    Ok(SnippetReport::new(&snippet.id, snippet.negative, checks))
}

/// Validate the given snippets in order.
///
/// Failed checks are collected into the report; only an unknown rule stops
/// the run.
pub fn validate_snippets<'a, I>(snippets: I, rules: &RuleSet) -> Result<ValidationReport>
where
    I: IntoIterator<Item = &'a Snippet>,
{
    let reports = snippets
        .into_iter()
        .map(|snippet| validate_snippet(snippet, rules))
        .collect::<Result<Vec<_>>>()?;

    Ok(ValidationReport::new(reports))
}

/// Validate every snippet in the registry.
pub fn validate_all(registry: &Registry, rules: &RuleSet) -> Result<ValidationReport> {
    validate_snippets(registry.list(), rules)
}
