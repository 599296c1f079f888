//! Implementation of the `stylebook validate` command.
//!
//! Runs every selected snippet against its tagged rules and prints the
//! report. Failed checks do not stop the run; they are counted and turned
//! into a `ValidationFailure` (exit 1) once the report is out.
//!
//! # Steps
//!
//! 1. Select snippets by glob (all when no patterns are given)
//! 2. Drop negative snippets if the config excludes them
//! 3. Validate and print the report in the requested format
//! 4. Append a `validate` event when `events_log` is configured
//! 5. Return `ValidationFailure` if any check failed

mod report;


use crate::cli::ValidateArgs;
use crate::context::CatalogContext;
use crate::error::{Result, StylebookError};
use crate::validate::{ValidationReport, validate_snippets};

use super::rules::warn_dead_rules;

pub use report::{format_report, log_validate_event};

/// Execute the `stylebook validate` command.
pub fn cmd_validate(ctx: &CatalogContext, args: ValidateArgs) -> Result<()> {
    let format = args.format.unwrap_or(ctx.config.format);

    let report = run_validation(ctx, &args.patterns)?;

    if args.patterns.is_empty() {
        warn_dead_rules(&ctx.rules, &ctx.registry);
    }

    print!("{}", format_report(&report, format)?);

    if let Some(path) = ctx.config.events_log_path()
        && let Err(e) = log_validate_event(&path, &report, ctx)
    {
        eprintln!("Warning: failed to log validate event: {}", e);
    }

    if report.passed {
        Ok(())
    } else {
        Err(StylebookError::ValidationFailure(format!(
            "{} of {} check(s) failed",
            report.failure_count(),
            report.check_count()
        )))
    }
}

/// Validate the snippets selected by `patterns`.
///
/// Patterns that select nothing are a user error.
pub fn run_validation(ctx: &CatalogContext, patterns: &[String]) -> Result<ValidationReport> {
    let selected = ctx.registry.select(patterns)?;

    if selected.is_empty() && !patterns.is_empty() {
        return Err(StylebookError::UserError(format!(
            "no snippets match: {}",
            patterns.join(", ")
        )));
    }

    let include_negative = ctx.config.include_negative;
    validate_snippets(
        selected
            .into_iter()
            .filter(|s| include_negative || !s.negative),
        &ctx.rules,
    )
}
