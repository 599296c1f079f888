//! CLI argument parsing for stylebook.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Stylebook: a catalog of coding-style example snippets.
///
/// Each snippet demonstrates one or more style rules. `validate` checks that
/// every snippet really follows (or, for negative examples, really breaks)
/// the rules it is tagged with.
#[derive(Parser, Debug)]
#[command(name = "stylebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: stylebook.yaml in the current directory, if present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog file to use instead of the configured or built-in catalog.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for stylebook.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every snippet in catalog order.
    List,

    /// Render one snippet with its documentation header.
    Show(ShowArgs),

    /// Render several snippets.
    ///
    /// With no patterns, renders the whole catalog.
    Render(RenderArgs),

    /// List the loaded style rules and how many snippets use each.
    Rules,

    /// Check every snippet against the rules it is tagged with.
    ///
    /// Exits 0 when every check passes and 1 otherwise.
    Validate(ValidateArgs),
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Snippet id (e.g., comment-stops).
    pub snippet_id: String,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Glob patterns matched against snippet ids (e.g., 'bad-*').
    pub patterns: Vec<String>,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Glob patterns matched against snippet ids. Validates all snippets when omitted.
    pub patterns: Vec<String>,

    /// Report format (overrides the config file).
    #[arg(long, value_enum, env = "STYLEBOOK_FORMAT")]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serial_test::serial;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["stylebook", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
        assert!(cli.config.is_none());
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["stylebook", "show", "comment-stops"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.snippet_id, "comment-stops");
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn parse_show_requires_id() {
        assert!(Cli::try_parse_from(["stylebook", "show"]).is_err());
    }

    #[test]
    fn parse_render_patterns() {
        let cli = Cli::try_parse_from(["stylebook", "render", "bad-*", "constructor"]).unwrap();
        if let Command::Render(args) = cli.command {
            assert_eq!(args.patterns, vec!["bad-*", "constructor"]);
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn parse_rules() {
        let cli = Cli::try_parse_from(["stylebook", "rules"]).unwrap();
        assert!(matches!(cli.command, Command::Rules));
    }

    #[test]
    #[serial]
    fn parse_validate_defaults() {
        // SAFETY: serialized with the other tests touching the environment.
        unsafe { std::env::remove_var("STYLEBOOK_FORMAT") };
        let cli = Cli::try_parse_from(["stylebook", "validate"]).unwrap();
        if let Command::Validate(args) = cli.command {
            assert!(args.patterns.is_empty());
            assert!(args.format.is_none());
        } else {
            panic!("Expected Validate command");
        }
    }

    #[test]
    #[serial]
    fn parse_validate_format_flag() {
        let cli = Cli::try_parse_from(["stylebook", "validate", "--format", "json", "ex*"]).unwrap();
        if let Command::Validate(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert_eq!(args.patterns, vec!["ex*"]);
        } else {
            panic!("Expected Validate command");
        }
    }

    #[test]
    #[serial]
    fn parse_validate_format_from_env() {
        // SAFETY: serialized with the other tests touching the environment.
        unsafe { std::env::set_var("STYLEBOOK_FORMAT", "json") };
        let cli = Cli::try_parse_from(["stylebook", "validate"]).unwrap();
        unsafe { std::env::remove_var("STYLEBOOK_FORMAT") };

        if let Command::Validate(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Validate command");
        }
    }

    #[test]
    fn parse_validate_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["stylebook", "validate", "--format", "xml"]).is_err());
    }

    #[test]
    fn parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "stylebook",
            "list",
            "--config",
            "my.yaml",
            "--catalog",
            "cat.yaml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("my.yaml")));
        assert_eq!(cli.catalog, Some(PathBuf::from("cat.yaml")));
    }
}
