//! Report output and event logging for `validate`.

use std::path::Path;

use serde_json::json;

use crate::config::OutputFormat;
use crate::context::CatalogContext;
use crate::error::{Result, StylebookError};
use crate::events::{Event, EventAction, append_event};
use crate::validate::ValidationReport;

/// Render the report in the requested format.
pub fn format_report(report: &ValidationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.format_text()),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| {
                StylebookError::UserError(format!("failed to serialize report to JSON: {}", e))
            }),
    }
}

/// Append a `validate` event summarizing `report` to the log at `path`.
pub fn log_validate_event(
    path: &Path,
    report: &ValidationReport,
    ctx: &CatalogContext,
) -> Result<()> {
    let failed: Vec<String> = report
        .rows()
        .into_iter()
        .filter(|(_, _, passed)| !passed)
        .map(|(snippet, rule, _)| format!("{}:{}", snippet, rule))
        .collect();

    let event = Event::new(EventAction::Validate).with_details(json!({
        "catalog": ctx.catalog_label(),
        "snippets": report.snippets.len(),
        "checks": report.check_count(),
        "passed": report.passed,
        "failed": failed
    }));

    append_event(path, &event)
}
