//! Short previews for index items.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum characters kept from a markdown line.
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Maximum characters kept from a code excerpt.
pub const CODE_EXCERPT_MAX_CHARS: usize = 150;

/// Number of non-blank code lines in a code excerpt.
pub const CODE_EXCERPT_LINES: usize = 3;

/// Marker appended to every excerpt.
const ELLIPSIS: &str = "...";

/// Inline markdown link: `[text](url)`.
static LINK: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").ok());

/// Builds a preview from the first prose line of a markdown body.
///
/// Blank lines, headings, code fences and blockquotes are skipped. Links in the chosen line
/// are reduced to their text before the line is cut to [`EXCERPT_MAX_CHARS`].
pub fn create_excerpt(markdown: &str) -> String {
    let line = markdown
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !is_markup_line(line))
        .unwrap_or_default();

    let text = strip_links(line);
    format!("{}{ELLIPSIS}", truncate_chars(&text, EXCERPT_MAX_CHARS))
}

/// Builds a preview from the first [`CODE_EXCERPT_LINES`] non-blank lines of code.
pub fn create_code_excerpt(code: &str) -> String {
    let head = code
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(CODE_EXCERPT_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}{ELLIPSIS}",
        truncate_chars(&head, CODE_EXCERPT_MAX_CHARS)
    )
}

/// Lines that carry markup rather than prose.
fn is_markup_line(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("```") || line.starts_with('>')
}

/// Replaces `[text](url)` with `text`.
fn strip_links(line: &str) -> String {
    match LINK.as_ref() {
        Some(link) => link.replace_all(line, "$1").into_owned(),
        None => line.to_string(),
    }
}

/// Keeps at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_markup_lines() {
        let markdown = "# Title\n\n> note\n```ts\nconst x = 1;\n```\nFirst real line.\n";
        assert_eq!(create_excerpt(markdown), "const x = 1;...");
    }

    #[test]
    fn test_first_prose_line() {
        let markdown = "# API Reference\n\n  Helpers for mocking.  \nSecond line.";
        assert_eq!(create_excerpt(markdown), "Helpers for mocking....");
    }

    #[test]
    fn test_links_rewritten() {
        let markdown = "See [the guide](/docs/guide) and [API](https://x.dev/api).";
        assert_eq!(create_excerpt(markdown), "See the guide and API....");
    }

    #[test]
    fn test_truncated_after_link_rewrite() {
        let long_url = "u".repeat(300);
        let markdown = format!("[short]({long_url}) {}", "a".repeat(250));
        let excerpt = create_excerpt(&markdown);
        assert!(excerpt.starts_with("short aaa"));
        assert_eq!(excerpt.chars().count(), EXCERPT_MAX_CHARS + ELLIPSIS.len());
        assert!(!excerpt.contains("]("));
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        let markdown = "é".repeat(250);
        let excerpt = create_excerpt(&markdown);
        assert_eq!(excerpt.chars().count(), EXCERPT_MAX_CHARS + 3);
    }

    #[test]
    fn test_only_markup() {
        assert_eq!(create_excerpt("# Heading\n\n> quote\n"), "...");
        assert_eq!(create_excerpt(""), "...");
    }

    #[test]
    fn test_code_excerpt_first_three_lines() {
        let code = "\nimport { test } from 'vitest';\n\n  test('a', () => {\n    expect(1).toBe(1);\n  });\n";
        assert_eq!(
            create_code_excerpt(code),
            "import { test } from 'vitest';\n  test('a', () => {\n    expect(1).toBe(1);..."
        );
    }

    #[test]
    fn test_code_excerpt_truncated() {
        let code = "x".repeat(400);
        let excerpt = create_code_excerpt(&code);
        assert_eq!(excerpt.len(), CODE_EXCERPT_MAX_CHARS + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_code_excerpt_empty() {
        assert_eq!(create_code_excerpt(""), "...");
    }
}
