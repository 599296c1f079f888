//! Snippet rendering.
//!
//! Turns a snippet into a documentation header followed by its body:
//!
//! ```text
//! /**
//!  * Summary derived from the title.
//!  *
//!  * Optional description lines.
//!  */
//! body line 1
//! body line 2
//! ```

use crate::catalog::Snippet;

/// Characters that may close a comment sentence.
pub const COMMENT_STOPS: [char; 4] = ['.', '?', '!', ')'];

/// The summary line derived from a title.
///
/// A title ending in a letter or digit gets a `.` appended. Anything else is
/// kept as written, so a title ending in `:` still reads as unterminated.
pub fn summary(title: &str) -> String {
    let trimmed = title.trim();
    match trimmed.chars().last() {
        Some(c) if c.is_alphanumeric() => format!("{}.", trimmed),
        _ => trimmed.to_string(),
    }
}

/// Render a snippet's documentation header and body.
pub fn render(snippet: &Snippet) -> String {
    let mut out = String::from("/**\n");
    push_doc_line(&mut out, &summary(&snippet.title));

    if !snippet.description.is_empty() {
        out.push_str(" *\n");
        for line in &snippet.description {
            push_doc_line(&mut out, line);
        }
    }

    out.push_str(" */\n");
    for line in &snippet.body {
        out.push_str(line);
        out.push('\n');
    }

    out
}

/// Render several snippets separated by a blank line.
pub fn render_all<'a, I>(snippets: I) -> String
where
    I: IntoIterator<Item = &'a Snippet>,
{
    snippets
        .into_iter()
        .map(render)
        .collect::<Vec<_>>()
        .join("\n")
}

fn push_doc_line(out: &mut String, text: &str) {
    if text.is_empty() {
        out.push_str(" *\n");
    } else {
        out.push_str(" * ");
        out.push_str(text);
        out.push('\n');
    }
}
