//! Config struct definition and its operations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StylebookError};

use super::types::{OutputFormat, PatternRuleConfig, default_true};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "stylebook.yaml";

/// Configuration for a stylebook run.
///
/// This struct represents the contents of `stylebook.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// YAML catalog to load instead of the built-in one.
    /// Relative paths resolve against the config file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Default report format for `validate`.
    pub format: OutputFormat,

    /// Whether negative snippets take part in `validate`.
    #[serde(default = "default_true")]
    pub include_negative: bool,

    /// NDJSON file each validation run is appended to (disabled when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_log: Option<PathBuf>,

    /// Extra regex rules.
    pub rules: Vec<PatternRuleConfig>,

    /// Directory of the file this config was loaded from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            format: OutputFormat::default(),
            include_negative: default_true(),
            events_log: None,
            rules: Vec::new(),
            base_dir: None,
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(StylebookError::UserError)` - Read or parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            StylebookError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Load the config for this run.
    ///
    /// An explicit path must exist. Otherwise `stylebook.yaml` in `dir` is
    /// used when present, and the defaults when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            StylebookError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            StylebookError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - every entry in `rules` has a non-empty `id`
    /// - every entry sets exactly one of `forbid` or `require`
    pub fn validate(&self) -> Result<()> {
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.id.trim().is_empty() {
                return Err(StylebookError::UserError(format!(
                    "config validation failed: rules[{}] has an empty id",
                    i
                )));
            }
            if rule.forbid.is_some() == rule.require.is_some() {
                return Err(StylebookError::UserError(format!(
                    "config validation failed: rule '{}' must set exactly one of 'forbid' or 'require'",
                    rule.id
                )));
            }
        }

        Ok(())
    }

    /// `path` resolved against the config file's directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Catalog file to load, if any.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_deref().map(|p| self.resolve_path(p))
    }

    /// Events log to append to, if any.
    pub fn events_log_path(&self) -> Option<PathBuf> {
        self.events_log.as_deref().map(|p| self.resolve_path(p))
    }
}
