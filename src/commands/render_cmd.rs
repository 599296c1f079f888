//! Implementation of the `stylebook render` command.

use crate::cli::RenderArgs;
use crate::context::CatalogContext;
use crate::error::{Result, StylebookError};
use crate::render::render_all;

/// Execute the `stylebook render` command.
///
/// Patterns that select nothing are a user error, so a typo does not pass
/// silently.
pub fn cmd_render(ctx: &CatalogContext, args: RenderArgs) -> Result<()> {
    let selected = ctx.registry.select(&args.patterns)?;

    if selected.is_empty() && !args.patterns.is_empty() {
        return Err(StylebookError::UserError(format!(
            "no snippets match: {}",
            args.patterns.join(", ")
        )));
    }

    print!("{}", render_all(selected));
    Ok(())
}
