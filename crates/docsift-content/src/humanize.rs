//! Title and identifier derivation.
//!
//! Example keys are snake_case (`basic_test`), categories are display labels
//! (`Unit Testing`). These helpers turn them into titles and id fragments, and keep ids unique
//! within one index with the `x`, `x-1`, `x-2` suffix scheme.

use std::collections::HashSet;

/// Turns a snake_case key into a title: `basic_test` becomes `Basic Test`.
///
/// Underscores become spaces and the first letter of each word is uppercased. The rest of
/// each word is left as written.
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns a slug into a title: `getting-started` becomes `Getting Started`.
pub fn humanize_slug(slug: &str) -> String {
    humanize_key(&slug.replace('-', "_"))
}

/// Lowercases a label and replaces each whitespace run with `-`.
///
/// `Unit Testing` becomes `unit-testing`.
pub fn slugify_label(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Uppercases the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Tracks ids already handed out and renames collisions.
#[derive(Debug, Default)]
pub struct IdDeduplicator {
    /// Every id claimed so far, including suffixed ones.
    taken: HashSet<String>,
}

impl IdDeduplicator {
    /// Creates an empty deduplicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `id`.
    ///
    /// Returns `None` if the id was free. Otherwise returns the first free `{id}-N`
    /// (N starting at 1), which is claimed in its place.
    pub fn claim(&mut self, id: &str) -> Option<String> {
        if self.taken.insert(id.to_string()) {
            return None;
        }

        let mut n = 1;
        loop {
            let candidate = format!("{id}-{n}");
            if self.taken.insert(candidate.clone()) {
                return Some(candidate);
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("basic_test"), "Basic Test");
        assert_eq!(humanize_key("mock_vi_fn"), "Mock Vi Fn");
        assert_eq!(humanize_key("already"), "Already");
        assert_eq!(humanize_key("keepCamel_case"), "KeepCamel Case");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_humanize_key_double_underscore() {
        assert_eq!(humanize_key("a__b"), "A  B");
    }

    #[test]
    fn test_humanize_slug() {
        assert_eq!(humanize_slug("getting-started"), "Getting Started");
        assert_eq!(humanize_slug("guides-setup_notes"), "Guides Setup Notes");
    }

    #[test]
    fn test_slugify_label() {
        assert_eq!(slugify_label("Unit Testing"), "unit-testing");
        assert_eq!(slugify_label("Quick  Start"), "quick-start");
        assert_eq!(slugify_label(" Components\t"), "components");
        assert_eq!(slugify_label("E2E"), "e2e");
    }

    #[test]
    fn test_claim_unique() {
        let mut ids = IdDeduplicator::new();
        assert_eq!(ids.claim("topic-intro"), None);
        assert_eq!(ids.claim("topic-setup"), None);
    }

    #[test]
    fn test_claim_duplicates() {
        let mut ids = IdDeduplicator::new();
        assert_eq!(ids.claim("x"), None);
        assert_eq!(ids.claim("x"), Some("x-1".into()));
        assert_eq!(ids.claim("x"), Some("x-2".into()));
    }

    #[test]
    fn test_claim_skips_existing_suffix() {
        let mut ids = IdDeduplicator::new();
        assert_eq!(ids.claim("x-1"), None);
        assert_eq!(ids.claim("x"), None);
        assert_eq!(ids.claim("x"), Some("x-2".into()));
    }
}
