//! Error types for the stylebook CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for stylebook operations.
///
/// `NotFound` and `RuleNotFound` point at a broken catalog or a typo on the
/// command line and stop the run. `ValidationFailure` is only raised after the
/// full report has been produced.
#[derive(Error, Debug)]
pub enum StylebookError {
    /// No snippet with this id exists in the registry.
    #[error("snippet '{0}' not found\nRun `stylebook list` to see available snippets.")]
    NotFound(String),

    /// A snippet is tagged with a rule id that is not loaded.
    #[error("snippet '{snippet}' references unknown rule '{rule}'")]
    RuleNotFound { snippet: String, rule: String },

    /// The catalog could not be read or is malformed.
    #[error("invalid catalog: {0}")]
    CatalogError(String),

    /// Bad arguments, config, or an I/O problem.
    #[error("{0}")]
    UserError(String),

    /// One or more checks failed.
    #[error("Validation failed: {0}")]
    ValidationFailure(String),
}

impl StylebookError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StylebookError::NotFound(_) => exit_codes::USER_ERROR,
            StylebookError::RuleNotFound { .. } => exit_codes::USER_ERROR,
            StylebookError::CatalogError(_) => exit_codes::USER_ERROR,
            StylebookError::UserError(_) => exit_codes::USER_ERROR,
            StylebookError::ValidationFailure(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for stylebook operations.
pub type Result<T> = std::result::Result<T, StylebookError>;
