//! Configuration model for stylebook.
//!
//! This module defines the Config struct that represents `stylebook.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
pub mod types;


// Re-export public API
pub use model::{Config, DEFAULT_CONFIG_FILE};
pub use types::{OutputFormat, PatternRuleConfig};
