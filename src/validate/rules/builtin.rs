//! Built-in style rules.
//!
//! Each predicate takes a whole snippet and answers whether it follows the
//! convention. Line-based predicates respect the ignore markers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::Snippet;
use crate::render::{COMMENT_STOPS, summary};

use super::StyleRule;
use super::markers::{checked_lines, is_line_comment, markers_balanced};

pub const FULL_STOP_COMMENT: &str = "full-stop-comment";
pub const TWO_SPACE_INDENT: &str = "two-space-indent";
pub const NO_MIXED_CASE_VARIABLES: &str = "no-mixed-case-variables";
pub const CAMEL_CASE_METHODS: &str = "camel-case-methods";
pub const UPPERCASE_CONSTANTS: &str = "uppercase-constants";
pub const ELSE_ON_NEW_LINE: &str = "else-on-new-line";
pub const BALANCED_IGNORE_MARKERS: &str = "balanced-ignore-markers";

/// Summary that stands in for a full doc comment.
const INHERITDOC: &str = "{@inheritdoc}";

/// Inline comments may also end in a colon.
const INLINE_STOPS: [char; 5] = ['.', '?', '!', ')', ':'];

static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").expect("valid regex"));

static FUNCTION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bfunction\s+&?\s*([A-Za-z_][A-Za-z0-9_]*)\s*\(").expect("valid regex")
});

static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*""#).expect("valid regex")
});

/// Group 1 is the preceding character, so `$null`, `->true` and `::FALSE`
/// style names can be told apart from the literals.
static CONSTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|[^\w$>:])(true|false|null)\b").expect("valid regex")
});

static ELSE_AFTER_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}\s*else(?:if)?\b").expect("valid regex"));

/// The rules every rule set starts with.
pub fn builtin_rules() -> Vec<StyleRule> {
    vec![
        StyleRule::builtin(
            FULL_STOP_COMMENT,
            "Doc summaries end in . ? ! or ); inline comments may also end in :",
            full_stop_comment,
        ),
        StyleRule::builtin(
            TWO_SPACE_INDENT,
            "Indent with two spaces, one level per opening brace",
            two_space_indent,
        ),
        StyleRule::builtin(
            NO_MIXED_CASE_VARIABLES,
            "Variable names never mix underscores and capitals",
            no_mixed_case_variables,
        ),
        StyleRule::builtin(
            CAMEL_CASE_METHODS,
            "Method names are lowerCamelCase (magic methods excepted)",
            camel_case_methods,
        ),
        StyleRule::builtin(
            UPPERCASE_CONSTANTS,
            "TRUE, FALSE and NULL are written in uppercase",
            uppercase_constants,
        ),
        StyleRule::builtin(
            ELSE_ON_NEW_LINE,
            "else and elseif start on their own line",
            else_on_new_line,
        ),
        StyleRule::builtin(
            BALANCED_IGNORE_MARKERS,
            "Every @codingStandardsIgnoreStart has a matching @codingStandardsIgnoreEnd",
            balanced_ignore_markers,
        ),
    ]
}

fn ends_with_any(text: &str, stops: &[char]) -> bool {
    text.chars().last().is_some_and(|c| stops.contains(&c))
}

fn is_docblock_line(trimmed: &str) -> bool {
    trimmed.starts_with('*') || trimmed.starts_with("/*")
}

/// Byte offset of the first `//` or `#` comment marker outside string
/// literals.
fn comment_start(line: &str) -> Option<usize> {
    let strings: Vec<_> = STRING_LITERAL.find_iter(line).map(|m| m.range()).collect();

    line.char_indices()
        .filter(|(i, _)| !strings.iter().any(|r| r.contains(i)))
        .find(|&(i, c)| {
            let rest = &line[i..];
            rest.starts_with("//") || (c == '#' && !rest.starts_with("#["))
        })
        .map(|(i, _)| i)
}

/// Code portion of a line with string literals blanked and trailing `//` or
/// `#` comments removed. `None` for comment and docblock lines.
fn code_portion(line: &str) -> Option<Cow<'_, str>> {
    let trimmed = line.trim();
    if is_line_comment(trimmed) || is_docblock_line(trimmed) {
        return None;
    }

    let code = match comment_start(line) {
        Some(pos) => &line[..pos],
        None => line,
    };
    Some(STRING_LITERAL.replace_all(code, "''"))
}

/// Text of the `//` or `#` comment on a line, whole-line or trailing.
fn comment_text(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if is_docblock_line(trimmed) {
        return None;
    }
    let start = if is_line_comment(trimmed) {
        line.len() - line.trim_start().len()
    } else {
        comment_start(line)?
    };
    Some(line[start..].trim_start_matches(['/', '#']).trim())
}

fn full_stop_comment(snippet: &Snippet) -> bool {
    let header = summary(&snippet.title);
    if header != INHERITDOC && !ends_with_any(&header, &COMMENT_STOPS) {
        return false;
    }

    let lines = checked_lines(&snippet.body);
    for (i, line) in lines.iter().enumerate() {
        let Some(text) = comment_text(line.text) else {
            continue;
        };

        // Only the last line of a whole-line comment run closes the sentence.
        let continues = is_line_comment(line.text.trim())
            && lines.get(i + 1).is_some_and(|next| {
                next.number == line.number + 1 && is_line_comment(next.text.trim())
            });
        if continues {
            continue;
        }

        if !text.is_empty() && !ends_with_any(text, &INLINE_STOPS) {
            return false;
        }
    }

    true
}

fn two_space_indent(snippet: &Snippet) -> bool {
    // (indent of the statement, last character of the previous code line)
    let mut prev: Option<(usize, char)> = None;

    for line in checked_lines(&snippet.body) {
        let trimmed = line.text.trim();
        let Some(last) = trimmed.chars().last() else {
            continue;
        };
        if trimmed.starts_with('*') {
            continue;
        }

        let leading = &line.text[..line.text.len() - line.text.trim_start().len()];
        if leading.chars().any(|c| c != ' ') {
            return false;
        }
        let indent = leading.len();

        let continuation = matches!(prev, Some((_, ',')));
        if indent % 2 != 0 && !continuation {
            return false;
        }

        let mut statement_indent = indent;
        if let Some((prev_indent, prev_last)) = prev {
            if continuation {
                statement_indent = prev_indent;
            } else if indent > prev_indent {
                let opens_level = matches!(prev_last, '{' | '(' | '[');
                if !opens_level || indent != prev_indent + 2 {
                    return false;
                }
            }
        }

        prev = Some((statement_indent, last));
    }

    true
}

fn is_mixed_case(name: &str) -> bool {
    name.contains('_')
        && name.chars().any(char::is_uppercase)
        && name.chars().any(char::is_lowercase)
}

fn no_mixed_case_variables(snippet: &Snippet) -> bool {
    checked_lines(&snippet.body).iter().all(|line| {
        VARIABLE
            .captures_iter(line.text)
            .all(|caps| !is_mixed_case(&caps[1]))
    })
}

fn is_camel_case_method(name: &str) -> bool {
    if name.starts_with("__") {
        return true;
    }
    name.chars().next().is_some_and(|c| c.is_ascii_lowercase()) && !name.contains('_')
}

fn camel_case_methods(snippet: &Snippet) -> bool {
    checked_lines(&snippet.body).iter().all(|line| {
        FUNCTION_NAME
            .captures_iter(line.text)
            .all(|caps| is_camel_case_method(&caps[1]))
    })
}

fn uppercase_constants(snippet: &Snippet) -> bool {
    checked_lines(&snippet.body).iter().all(|line| {
        let Some(code) = code_portion(line.text) else {
            return true;
        };
        CONSTANT.captures_iter(&code).all(|caps| {
            let literal = &caps[2];
            literal == literal.to_uppercase()
        })
    })
}

fn else_on_new_line(snippet: &Snippet) -> bool {
    checked_lines(&snippet.body).iter().all(|line| {
        code_portion(line.text).is_none_or(|code| !ELSE_AFTER_BRACE.is_match(&code))
    })
}

fn balanced_ignore_markers(snippet: &Snippet) -> bool {
    markers_balanced(&snippet.body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_case_detection() {
        assert!(is_mixed_case("lorem_ipsumDolores"));
        assert!(!is_mixed_case("lorem_ipsum_dolores"));
        assert!(!is_mixed_case("loremIpsumDolores"));
        assert!(!is_mixed_case("_SERVER"));
        assert!(!is_mixed_case("this"));
    }

    #[test]
    fn camel_case_method_detection() {
        assert!(is_camel_case_method("exampleFunctionA"));
        assert!(is_camel_case_method("__construct"));
        assert!(!is_camel_case_method("do_something"));
        assert!(!is_camel_case_method("DoSomething"));
    }

    #[test]
    fn code_portion_skips_comments() {
        assert!(code_portion("  // comment").is_none());
        assert!(code_portion("  # comment").is_none());
        assert!(code_portion("   * docblock").is_none());
        assert!(code_portion("  /** open").is_none());
    }

    #[test]
    fn code_portion_blanks_strings_and_trailing_comments() {
        let code = code_portion("$x = 'true // null'; // false").unwrap();
        assert_eq!(code.trim_end(), "$x = '';");
    }

    #[test]
    fn code_portion_cuts_hash_comments() {
        let code = code_portion("$x = '#1'; # set true").unwrap();
        assert_eq!(code.trim_end(), "$x = '';");
    }

    #[test]
    fn comment_text_finds_whole_line_and_trailing_comments() {
        assert_eq!(comment_text("  // Whole line."), Some("Whole line."));
        assert_eq!(comment_text("# Hash comment"), Some("Hash comment"));
        assert_eq!(comment_text("$x = 1; // trailing"), Some("trailing"));
        assert_eq!(comment_text("$url = 'http://example.com';"), None);
        assert_eq!(comment_text("#[Attribute]"), None);
        assert_eq!(comment_text("   * docblock"), None);
    }
}
