//! Content types and providers for docsift.
//!
//! This crate describes the two kinds of content an index is built from:
//! - [`Topic`] descriptors, whose markdown bodies come from a [`ContentSource`]
//! - [`ExampleGroup`]s, ordered key to code maps under a display category
//!
//! It also carries frontmatter parsing and the title and id helpers shared by the index.

#![warn(missing_docs)]

mod error;
mod frontmatter;
mod humanize;
mod source;

pub use error::ContentError;
pub use frontmatter::{Frontmatter, first_heading, split_frontmatter};
pub use humanize::{IdDeduplicator, humanize_key, humanize_slug, slugify_label};
use serde::{Deserialize, Serialize};
pub use source::{ContentSource, DirectorySource, MemorySource};

/// A documentation topic descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Slug used for lookup and the item id.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// One-line summary.
    pub description: String,
}

impl Topic {
    /// Creates a topic descriptor.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The item kind an example group produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleKind {
    /// Runnable examples.
    #[default]
    Example,
    /// Reference code.
    Code,
}

/// One key and its source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleEntry {
    /// snake_case key, humanized into the title.
    pub key: String,
    /// Source code, used verbatim as item content.
    pub code: String,
}

/// An ordered group of code examples sharing a category and base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleGroup {
    /// Display category label.
    pub category: String,
    /// Base URL for every entry.
    pub url: String,
    /// Kind of item each entry becomes.
    pub kind: ExampleKind,
    /// Entries in iteration order.
    pub entries: Vec<ExampleEntry>,
}

impl ExampleGroup {
    /// Creates an empty group of [`ExampleKind::Example`] entries.
    pub fn new(category: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            url: url.into(),
            kind: ExampleKind::default(),
            entries: Vec::new(),
        }
    }

    /// Sets the item kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ExampleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Appends an entry.
    #[must_use]
    pub fn entry(mut self, key: impl Into<String>, code: impl Into<String>) -> Self {
        self.push(key, code);
        self
    }

    /// Appends an entry without checking for an existing key.
    pub fn push(&mut self, key: impl Into<String>, code: impl Into<String>) {
        self.entries.push(ExampleEntry {
            key: key.into(),
            code: code.into(),
        });
    }

    /// Replaces the code of an existing key in place, or appends a new entry.
    pub fn upsert(&mut self, key: &str, code: impl Into<String>) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => existing.code = code.into(),
            None => self.push(key, code),
        }
    }

    /// Returns the code for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_builder_keeps_order() {
        let group = ExampleGroup::new("Unit Testing", "/examples/unit")
            .entry("b_test", "b")
            .entry("a_test", "a");
        let keys: Vec<_> = group.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["b_test", "a_test"]);
        assert_eq!(group.kind, ExampleKind::Example);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut group = ExampleGroup::new("Mocking", "/m")
            .entry("first", "1")
            .entry("second", "2");
        group.upsert("first", "one");
        group.upsert("third", "3");

        let pairs: Vec<_> = group
            .entries
            .iter()
            .map(|e| (e.key.as_str(), e.code.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("first", "one"), ("second", "2"), ("third", "3")]
        );
        assert_eq!(group.get("third"), Some("3"));
        assert_eq!(group.get("missing"), None);
    }

    #[test]
    fn test_example_kind_serde() {
        let kind: ExampleKind = serde_yaml::from_str("code").unwrap();
        assert_eq!(kind, ExampleKind::Code);
    }
}
