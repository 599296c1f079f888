//! Coding-standards ignore markers.
//!
//! Line-based rules only look at lines these markers leave in scope:
//! - everything from `@codingStandardsIgnoreStart` through
//!   `@codingStandardsIgnoreEnd` is skipped
//! - a code line carrying a trailing `@codingStandardsIgnoreLine` is skipped
//! - a standalone `// @codingStandardsIgnoreLine` skips itself and the next line

pub const IGNORE_START: &str = "@codingStandardsIgnoreStart";
pub const IGNORE_END: &str = "@codingStandardsIgnoreEnd";
pub const IGNORE_LINE: &str = "@codingStandardsIgnoreLine";

/// A body line that rules should inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedLine<'a> {
    /// Line number in the body (1-based).
    pub number: usize,
    pub text: &'a str,
}

/// Body lines left in scope after applying ignore markers, in order.
pub fn checked_lines(body: &[String]) -> Vec<CheckedLine<'_>> {
    let mut lines = Vec::with_capacity(body.len());
    let mut in_block = false;
    let mut skip_next = false;

    for (i, line) in body.iter().enumerate() {
        if line.contains(IGNORE_START) {
            in_block = true;
            skip_next = false;
            continue;
        }
        if line.contains(IGNORE_END) {
            in_block = false;
            skip_next = false;
            continue;
        }
        if in_block {
            continue;
        }
        if skip_next {
            skip_next = false;
            continue;
        }
        if line.contains(IGNORE_LINE) {
            skip_next = is_line_comment(line.trim());
            continue;
        }

        lines.push(CheckedLine {
            number: i + 1,
            text: line,
        });
    }

    lines
}

/// Whether start/end markers pair up without nesting.
pub fn markers_balanced(body: &[String]) -> bool {
    let mut open = false;

    for line in body {
        if line.contains(IGNORE_START) {
            if open {
                return false;
            }
            open = true;
        } else if line.contains(IGNORE_END) {
            if !open {
                return false;
            }
            open = false;
        }
    }

    !open
}

/// Whether a trimmed line is a `//` or `#` comment. `#[` opens an attribute.
pub fn is_line_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//") || (trimmed.starts_with('#') && !trimmed.starts_with("#["))
}
