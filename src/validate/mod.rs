//! Validation of snippets against style rules.
//!
//! The validator owns the rule set. For each snippet it looks up every tagged
//! rule and applies its predicate, collecting failures into a report instead
//! of stopping at the first one.

pub mod rules;
mod types;
mod validator;


pub use rules::{RuleSet, StyleRule};
pub use types::{RuleCheck, SnippetReport, ValidationReport};
pub use validator::{check, validate_all, validate_snippet, validate_snippets};
