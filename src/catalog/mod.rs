//! The example registry.
//!
//! Holds the fixed, ordered catalog of style snippets. A registry is built
//! once, either from the catalog compiled into the binary or from a YAML
//! catalog file, and is read-only afterwards.

mod builtin;
mod io;
mod registry;
mod snippet;

#[cfg(test)]
mod tests;

pub use builtin::builtin_snippets;
pub use io::{CatalogFile, load_catalog_file};
pub use registry::Registry;
pub use snippet::Snippet;
