//! Implementation of the `stylebook list` command.

use crate::catalog::Snippet;
use crate::context::CatalogContext;
use crate::error::Result;

/// Execute the `stylebook list` command.
pub fn cmd_list(ctx: &CatalogContext) -> Result<()> {
    println!(
        "Snippets ({}, catalog: {}):",
        ctx.registry.len(),
        ctx.catalog_label()
    );
    println!();
    print!("{}", format_list(ctx.registry.list()));
    Ok(())
}

/// One entry per snippet: padded id and title, then its tags.
pub fn format_list(snippets: &[Snippet]) -> String {
    let width = snippets.iter().map(|s| s.id.len()).max().unwrap_or(0);
    let mut out = String::new();

    for snippet in snippets {
        let marker = if snippet.negative { "  [negative]" } else { "" };
        out.push_str(&format!(
            "  {:<width$}  {}{}\n",
            snippet.id,
            snippet.title,
            marker,
            width = width
        ));

        let tags = if snippet.tags.is_empty() {
            "(none)".to_string()
        } else {
            snippet.tags.join(", ")
        };
        out.push_str(&format!("  {:<width$}  tags: {}\n", "", tags, width = width));
    }

    out
}
