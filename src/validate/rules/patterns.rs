//! Regex rules declared in the config file.

use regex::Regex;

use crate::config::PatternRuleConfig;
use crate::error::{Result, StylebookError};

use super::StyleRule;

/// Compile one configured pattern rule.
///
/// # Returns
///
/// * `Ok(StyleRule)` - A `forbid` or `require` rule
/// * `Err(StylebookError::UserError)` - Bad regex, or not exactly one of
///   `forbid` / `require` set (config error)
pub fn compile_pattern_rule(config: &PatternRuleConfig) -> Result<StyleRule> {
    let description = if config.description.is_empty() {
        format!("Configured pattern rule '{}'", config.id)
    } else {
        config.description.clone()
    };

    match (&config.forbid, &config.require) {
        (Some(pattern), None) => Ok(StyleRule::forbid(
            &config.id,
            description,
            compile(&config.id, pattern)?,
        )),
        (None, Some(pattern)) => Ok(StyleRule::require(
            &config.id,
            description,
            compile(&config.id, pattern)?,
        )),
        _ => Err(StylebookError::UserError(format!(
            "rule '{}' must set exactly one of 'forbid' or 'require'",
            config.id
        ))),
    }
}

fn compile(rule_id: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        StylebookError::UserError(format!(
            "invalid regex pattern in rule '{}': '{}' - {}\n\
             Fix: edit the config file and correct or remove this rule.",
            rule_id, pattern, e
        ))
    })
}
