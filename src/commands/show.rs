//! Implementation of the `stylebook show` command.
//!
//! Renders a single snippet by id.

use crate::cli::ShowArgs;
use crate::context::CatalogContext;
use crate::error::Result;
use crate::render::render;

/// Execute the `stylebook show` command.
///
/// Fails with `NotFound` for an unknown id.
pub fn cmd_show(ctx: &CatalogContext, args: ShowArgs) -> Result<()> {
    let snippet = ctx.registry.get(&args.snippet_id)?;
    print!("{}", render(snippet));
    Ok(())
}
