//! Implementation of the `stylebook rules` command.
//!
//! Lists the loaded rules with the number of snippets tagged with each, and
//! warns about rules no snippet uses.

use crate::catalog::Registry;
use crate::context::CatalogContext;
use crate::error::Result;
use crate::validate::RuleSet;

/// Execute the `stylebook rules` command.
pub fn cmd_rules(ctx: &CatalogContext) -> Result<()> {
    println!("Rules ({}):", ctx.rules.len());
    println!();
    print!("{}", format_rules(&ctx.rules, &ctx.registry));

    warn_dead_rules(&ctx.rules, &ctx.registry);
    Ok(())
}

/// One line per rule: id, kind, usage count, description.
pub fn format_rules(rules: &RuleSet, registry: &Registry) -> String {
    let usage = rules.usage_counts(registry);
    let width = usage.iter().map(|(r, _)| r.id().len()).max().unwrap_or(0);

    let mut out = String::new();
    for (rule, count) in usage {
        out.push_str(&format!(
            "  {:<width$}  {:<7}  {:>3} snippet(s)  {}\n",
            rule.id(),
            rule.kind(),
            count,
            rule.description(),
            width = width
        ));
    }
    out
}

/// Print a warning for each rule no snippet is tagged with.
pub fn warn_dead_rules(rules: &RuleSet, registry: &Registry) {
    for rule in rules.dead_rules(registry) {
        eprintln!(
            "Warning: rule '{}' is not demonstrated by any snippet",
            rule.id()
        );
    }
}
