//! Run context resolution for stylebook.
//!
//! Every command starts from the same assembled state: the config, the
//! snippet registry, and the rule set. Assembly checks that every snippet tag
//! names a loaded rule, so commands never meet an unknown rule mid-run.

use std::env;
use std::path::{Path, PathBuf};

use crate::catalog::{Registry, load_catalog_file};
use crate::config::Config;
use crate::error::{Result, StylebookError};
use crate::validate::RuleSet;

/// Loaded, read-only state shared by all commands.
#[derive(Debug)]
pub struct CatalogContext {
    pub config: Config,
    pub registry: Registry,
    pub rules: RuleSet,
    /// Catalog file the registry came from (`None` for the built-in catalog).
    pub catalog_source: Option<PathBuf>,
}

impl CatalogContext {
    /// Resolve the context from the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(CatalogContext)` - Config, registry and rules loaded and cross-checked
    /// * `Err(StylebookError::RuleNotFound)` - A snippet tag names no rule
    /// * `Err(StylebookError::CatalogError)` - The catalog file is unreadable or invalid
    /// * `Err(StylebookError::UserError)` - The config is invalid
    pub fn resolve(config_path: Option<&Path>, catalog_override: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            StylebookError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd, config_path, catalog_override)
    }

    /// Resolve the context relative to a specific directory.
    pub fn resolve_from(
        cwd: &Path,
        config_path: Option<&Path>,
        catalog_override: Option<&Path>,
    ) -> Result<Self> {
        let config = Config::discover(config_path, cwd)?;

        let catalog_source = match catalog_override {
            Some(path) => Some(path.to_path_buf()),
            None => config.catalog_path(),
        };

        let registry = match &catalog_source {
            Some(path) => load_catalog_file(path)?,
            None => Registry::builtin()?,
        };

        Self::assemble(config, registry, catalog_source)
    }

    /// Build the rule set for `config` and cross-check it with `registry`.
    pub fn assemble(
        config: Config,
        registry: Registry,
        catalog_source: Option<PathBuf>,
    ) -> Result<Self> {
        let rules = RuleSet::builtin().with_config_rules(&config.rules)?;
        rules.verify_tags(&registry)?;

        Ok(Self {
            config,
            registry,
            rules,
            catalog_source,
        })
    }

    /// Human-readable name of the catalog in use.
    pub fn catalog_label(&self) -> String {
        match &self.catalog_source {
            Some(path) => path.display().to_string(),
            None => "built-in".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Snippet;
    use tempfile::TempDir;

    #[test]
    fn resolve_from_empty_dir_uses_builtin_catalog() {
        let dir = TempDir::new().unwrap();
        let ctx = CatalogContext::resolve_from(dir.path(), None, None).unwrap();

        assert!(ctx.catalog_source.is_none());
        assert_eq!(ctx.catalog_label(), "built-in");
        assert!(!ctx.registry.is_empty());
        assert!(!ctx.rules.is_empty());
    }

    #[test]
    fn resolve_from_reads_catalog_named_in_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("catalog.yaml"),
            "snippets:\n  - id: ex1\n    title: Demo\n    body: [a]\n    tags: [full-stop-comment]\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("stylebook.yaml"), "catalog: catalog.yaml\n").unwrap();

        let ctx = CatalogContext::resolve_from(dir.path(), None, None).unwrap();

        assert_eq!(ctx.registry.len(), 1);
        assert_eq!(ctx.registry.get("ex1").unwrap().title, "Demo");
        assert_eq!(ctx.catalog_source, Some(dir.path().join("catalog.yaml")));
    }

    #[test]
    fn catalog_override_beats_config() {
        let dir = TempDir::new().unwrap();
        let other = dir.path().join("other.yaml");
        std::fs::write(&other, "snippets:\n  - id: other\n    title: Other\n").unwrap();
        std::fs::write(dir.path().join("stylebook.yaml"), "catalog: missing.yaml\n").unwrap();

        let ctx = CatalogContext::resolve_from(dir.path(), None, Some(&other)).unwrap();

        assert!(ctx.registry.get("other").is_ok());
    }

    #[test]
    fn unknown_tag_is_rule_not_found_at_startup() {
        let registry =
            Registry::new(vec![Snippet::new("ex1", "Demo").with_tags(&["no-such-rule"])]).unwrap();

        let err = CatalogContext::assemble(Config::default(), registry, None).unwrap_err();

        match err {
            StylebookError::RuleNotFound { snippet, rule } => {
                assert_eq!(snippet, "ex1");
                assert_eq!(rule, "no-such-rule");
            }
            other => panic!("Expected RuleNotFound, got {:?}", other),
        }
    }

    #[test]
    fn config_rules_satisfy_tags() {
        let config = Config::from_yaml(
            "rules:\n  - id: no-var-dump\n    forbid: \"var_dump\\\\(\"\n",
        )
        .unwrap();
        let registry =
            Registry::new(vec![Snippet::new("ex1", "Demo").with_tags(&["no-var-dump"])]).unwrap();

        let ctx = CatalogContext::assemble(config, registry, None).unwrap();
        assert!(ctx.rules.get("no-var-dump").is_some());
    }

    #[test]
    fn missing_catalog_file_is_catalog_error() {
        let dir = TempDir::new().unwrap();
        let err = CatalogContext::resolve_from(
            dir.path(),
            None,
            Some(&dir.path().join("missing.yaml")),
        )
        .unwrap_err();
        assert!(matches!(err, StylebookError::CatalogError(_)));
    }
}
