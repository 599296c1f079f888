//! Command implementations for stylebook.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command runs against the same resolved
//! [`CatalogContext`].

mod list;
mod render_cmd;
mod rules;
mod show;
mod validate_cmd;

use crate::cli::{Cli, Command};
use crate::context::CatalogContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// Resolves the context first, so a broken catalog or config stops the run
/// before any command output.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = CatalogContext::resolve(cli.config.as_deref(), cli.catalog.as_deref())?;
    run(&ctx, cli.command)
}

/// Run a command against an already resolved context.
pub fn run(ctx: &CatalogContext, command: Command) -> Result<()> {
    match command {
        Command::List => list::cmd_list(ctx),
        Command::Show(args) => show::cmd_show(ctx, args),
        Command::Render(args) => render_cmd::cmd_render(ctx, args),
        Command::Rules => rules::cmd_rules(ctx),
        Command::Validate(args) => validate_cmd::cmd_validate(ctx, args),
    }
}
