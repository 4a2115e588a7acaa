//! Index records and the index container.

use std::fmt;

use chrono::{DateTime, Utc};
use docsift_content::ExampleKind;
use serde::Serialize;

/// What kind of content an item holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A documentation topic.
    Topic,
    /// A runnable example.
    Example,
    /// A reference code snippet.
    Code,
}

impl ItemKind {
    /// Lowercase name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Topic => "topic",
            Self::Example => "example",
            Self::Code => "code",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ExampleKind> for ItemKind {
    fn from(kind: ExampleKind) -> Self {
        match kind {
            ExampleKind::Example => Self::Example,
            ExampleKind::Code => Self::Code,
        }
    }
}

/// One retrievable unit of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchIndexItem {
    /// Identifier, unique within an index.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line summary.
    pub description: String,
    /// Route to the canonical location.
    pub url: String,
    /// Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// `Documentation` for topics, otherwise the example group's category. Filters match
    /// on this label exactly.
    pub category: String,
    /// Full text body used for scoring.
    pub content: String,
    /// Short preview, always set by aggregation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Lowercase vocabulary terms found in `content`.
    pub keywords: Vec<String>,
}

/// An immutable, fully built search index.
#[derive(Debug, Clone, Serialize)]
pub struct SearchIndex {
    /// Items in aggregation order.
    items: Vec<SearchIndexItem>,
    /// When the index was built.
    generated_at: DateTime<Utc>,
    /// Always `items.len()`.
    total_items: usize,
}

impl SearchIndex {
    /// Wraps built items.
    pub(crate) fn new(items: Vec<SearchIndexItem>, generated_at: DateTime<Utc>) -> Self {
        let total_items = items.len();
        Self {
            items,
            generated_at,
            total_items,
        }
    }

    /// Items in aggregation order.
    pub fn items(&self) -> &[SearchIndexItem] {
        &self.items
    }

    /// Build timestamp.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Number of items.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&SearchIndexItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// A matched item and its relevance score.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchResult<'a> {
    /// The matched item.
    #[serde(flatten)]
    pub item: &'a SearchIndexItem,
    /// Relevance score, always above zero.
    pub score: u32,
}
