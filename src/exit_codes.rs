//! Exit code constants for the stylebook CLI.
//!
//! - 0: Success (every check passed)
//! - 1: Validation failure (one or more checks failed)
//! - 2: Usage or catalog error (unknown snippet, unknown rule, bad config)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Validation failure: at least one snippet did not satisfy a tagged rule.
pub const VALIDATION_FAILURE: i32 = 1;

/// User error: unknown ids, invalid catalog or config, unreadable files.
///
/// Matches the code clap uses for argument errors.
pub const USER_ERROR: i32 = 2;
