//! Filesystem-safe note titles.
//!
//! Keep note titles are free text and frequently contain timestamps
//! (`2021-05-03 14:22:51.123+02:00` for untitled notes), so `:` and `+` are
//! substituted rather than dropped to keep those names readable.

/// Fallback used whenever a title sanitizes down to nothing.
pub const UNTITLED: &str = "Untitled Note";

/// Maximum length of a sanitized name, in characters.
const MAX_LEN: usize = 200;

/// Turn arbitrary title text into a filesystem-safe file name (no extension).
///
/// Total and idempotent: never fails, and `sanitize(sanitize(x)) == sanitize(x)`.
/// The result has no `\ / * ? : " < > |`, no leading/trailing whitespace or
/// dots, is at most 200 characters, and is never empty.
pub fn sanitize(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter_map(|c| match c {
            ':' | '+' => Some('_'),
            '\\' | '/' | '*' | '?' | '"' | '<' | '>' | '|' => None,
            other => Some(other),
        })
        .collect();

    let trimmed = trim_edges(&cleaned);
    // Truncation can expose a new trailing dot or space, so trim again.
    let truncated: String = trimmed.chars().take(MAX_LEN).collect();
    let name = trim_edges(&truncated);

    if name.is_empty() {
        UNTITLED.to_string()
    } else {
        name.to_string()
    }
}

fn trim_edges(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '.')
}
