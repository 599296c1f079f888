//! Ordered, read-only snippet registry.

use std::collections::HashMap;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, StylebookError};

use super::builtin::builtin_snippets;
use super::snippet::Snippet;

/// The example registry.
///
/// Populated once; there are no mutation operations. `list` returns snippets
/// in catalog order and `get` resolves an id through a prebuilt index.
#[derive(Debug, Clone)]
pub struct Registry {
    snippets: Vec<Snippet>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from snippets in catalog order.
    ///
    /// Tags are de-duplicated. Empty or repeated snippet ids are a catalog
    /// error.
    pub fn new(snippets: Vec<Snippet>) -> Result<Self> {
        let mut index = HashMap::with_capacity(snippets.len());
        let mut normalized = Vec::with_capacity(snippets.len());

        for mut snippet in snippets {
            if snippet.id.trim().is_empty() {
                return Err(StylebookError::CatalogError(format!(
                    "snippet #{} has an empty id",
                    normalized.len() + 1
                )));
            }
            if index.contains_key(&snippet.id) {
                return Err(StylebookError::CatalogError(format!(
                    "duplicate snippet id '{}'",
                    snippet.id
                )));
            }
            snippet.dedup_tags();
            index.insert(snippet.id.clone(), normalized.len());
            normalized.push(snippet);
        }

        Ok(Self {
            snippets: normalized,
            index,
        })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_snippets())
    }

    /// All snippets in catalog order.
    pub fn list(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Look up a snippet by id.
    pub fn get(&self, id: &str) -> Result<&Snippet> {
        self.index
            .get(id)
            .map(|&i| &self.snippets[i])
            .ok_or_else(|| StylebookError::NotFound(id.to_string()))
    }

    /// Number of snippets.
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Whether the registry holds no snippets.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Snippets whose id matches any of `patterns`, in catalog order.
    ///
    /// An empty pattern list selects every snippet. Invalid globs are a user
    /// error.
    pub fn select(&self, patterns: &[String]) -> Result<Vec<&Snippet>> {
        if patterns.is_empty() {
            return Ok(self.snippets.iter().collect());
        }

        let globs = build_globset(patterns).map_err(|e| {
            StylebookError::UserError(format!("invalid snippet pattern: {}", e))
        })?;

        Ok(self
            .snippets
            .iter()
            .filter(|s| globs.is_match(&s.id))
            .collect())
    }
}

fn build_globset(patterns: &[String]) -> std::result::Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            continue;
        }
        builder.add(Glob::new(trimmed)?);
    }

    builder.build()
}
