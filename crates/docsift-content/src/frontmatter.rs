//! YAML frontmatter for topic markdown files.
//!
//! Frontmatter is an optional block at the very start of a file, fenced by `---` lines:
//!
//! ```markdown
//! ---
//! title: API Reference
//! description: Every helper exported by the test kit
//! ---
//!
//! # API Reference
//! ```

use serde::Deserialize;

/// Fence line that opens and closes a frontmatter block.
const FENCE: &str = "---";

/// Metadata read from a topic's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    /// Display title.
    pub title: Option<String>,
    /// One-line summary.
    pub description: Option<String>,
}

/// Splits a markdown file into its frontmatter and body.
///
/// The body starts after the closing fence, minus one blank separator line. When the file has
/// no frontmatter, the block never closes, or the YAML is malformed, the frontmatter is `None`
/// and the whole input (without a leading BOM) is returned as the body.
pub fn split_frontmatter(content: &str) -> (Option<Frontmatter>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = content.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, content);
    };
    if first.trim_end() != FENCE {
        return (None, content);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        let line_start = offset;
        offset += line.len();
        if line.trim_end() != FENCE {
            continue;
        }

        let yaml = &content[yaml_start..line_start];
        let body = skip_blank_line(&content[offset..]);
        return match parse_yaml(yaml) {
            Some(frontmatter) => (Some(frontmatter), body),
            None => (None, content),
        };
    }

    (None, content)
}

/// Returns the text of the first `# ` heading in a markdown body.
pub fn first_heading(body: &str) -> Option<&str> {
    body.lines()
        .filter_map(|line| line.trim_start().strip_prefix("# "))
        .map(str::trim)
        .find(|heading| !heading.is_empty())
}

/// Parses a YAML block, treating an empty block as empty metadata.
fn parse_yaml(yaml: &str) -> Option<Frontmatter> {
    if yaml.trim().is_empty() {
        return Some(Frontmatter::default());
    }
    serde_yaml::from_str(yaml).ok()
}

/// Drops a single leading blank line.
fn skip_blank_line(text: &str) -> &str {
    text.strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\n'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_description() {
        let content = "---\ntitle: API Reference\ndescription: Helpers\n---\n\n# API\n";
        let (fm, body) = split_frontmatter(content);
        let fm = fm.unwrap();
        assert_eq!(fm.title.as_deref(), Some("API Reference"));
        assert_eq!(fm.description.as_deref(), Some("Helpers"));
        assert_eq!(body, "# API\n");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Heading\n\nText";
        let (fm, body) = split_frontmatter(content);
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = split_frontmatter("---\n---\nBody");
        assert_eq!(fm, Some(Frontmatter::default()));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_unclosed_block_is_body() {
        let content = "---\ntitle: Open\n\n# Still body";
        let (fm, body) = split_frontmatter(content);
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_malformed_yaml_is_body() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        let (fm, body) = split_frontmatter(content);
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let content = "---\ntitle: Doc\ntags: [a, b]\nauthor: someone\n---\nBody";
        let (fm, body) = split_frontmatter(content);
        assert_eq!(fm.unwrap().title.as_deref(), Some("Doc"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_crlf_and_bom() {
        let content = "\u{feff}---\r\ntitle: Windows\r\n---\r\n\r\nBody";
        let (fm, body) = split_frontmatter(content);
        assert_eq!(fm.unwrap().title.as_deref(), Some("Windows"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_fence_must_open_the_file() {
        let content = "Intro\n---\ntitle: Nope\n---\n";
        let (fm, _) = split_frontmatter(content);
        assert!(fm.is_none());
    }

    #[test]
    fn test_first_heading() {
        assert_eq!(
            first_heading("intro\n## Sub\n# Main Title \n"),
            Some("Main Title")
        );
        assert_eq!(first_heading("#NoSpace\n## Only h2\n"), None);
        assert_eq!(first_heading(""), None);
    }
}
