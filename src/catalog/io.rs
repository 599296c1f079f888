//! Loading catalogs from YAML files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StylebookError};

use super::registry::Registry;
use super::snippet::Snippet;

/// On-disk catalog layout.
///
/// ```yaml
/// snippets:
///   - id: ex1
///     title: Demo
///     body: ["a"]
///     tags: [full-stop-comment]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub snippets: Vec<Snippet>,
}

impl CatalogFile {
    /// Parse a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| StylebookError::CatalogError(format!("failed to parse catalog YAML: {}", e)))
    }

    /// Serialize the catalog to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            StylebookError::CatalogError(format!("failed to serialize catalog to YAML: {}", e))
        })
    }

    /// Build a registry, consuming the file contents.
    pub fn into_registry(self) -> Result<Registry> {
        Registry::new(self.snippets)
    }
}

/// Read a YAML catalog file into a registry.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Registry> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        StylebookError::CatalogError(format!(
            "failed to read catalog file '{}': {}",
            path.display(),
            e
        ))
    })?;

    CatalogFile::from_yaml(&content)?.into_registry()
}
