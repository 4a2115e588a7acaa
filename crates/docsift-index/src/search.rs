//! Query scoring, filtering and ranking.

use std::fmt;

use serde::Serialize;

use crate::{
    aggregate::TOPIC_CATEGORY,
    item::{ItemKind, SearchIndex, SearchIndexItem, SearchResult},
};

/// Default cap on returned results.
pub const MAX_RESULTS: usize = 20;

/// Category of getting-started material, grouped with documentation.
const QUICK_START_CATEGORY: &str = "Quick Start";

/// Category of UI component snippets.
const COMPONENTS_CATEGORY: &str = "Components";

/// Weight of the whole query appearing in the title.
const TITLE_WEIGHT: u32 = 100;
/// Weight of the whole query appearing in the description.
const DESCRIPTION_WEIGHT: u32 = 50;
/// Weight of the whole query appearing in the category.
const CATEGORY_WEIGHT: u32 = 30;
/// Weight per occurrence of a term in the content.
const CONTENT_OCCURRENCE_WEIGHT: u32 = 5;
/// Weight of a term appearing inside any keyword.
const KEYWORD_WEIGHT: u32 = 15;
/// Weight of a term appearing anywhere in the item's text.
const FULL_TEXT_WEIGHT: u32 = 10;

/// Coarse content selector applied before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFilter {
    /// Everything.
    #[default]
    All,
    /// Topics plus documentation and quick start material.
    Docs,
    /// Examples outside the documentation and component categories.
    Examples,
    /// Component snippets.
    Components,
}

impl SearchFilter {
    /// Every filter, in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Docs, Self::Examples, Self::Components];

    /// Lowercase name, as parsed.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Docs => "docs",
            Self::Examples => "examples",
            Self::Components => "components",
        }
    }

    /// Whether an item passes this filter.
    pub fn matches(self, item: &SearchIndexItem) -> bool {
        let category = item.category.as_str();
        match self {
            Self::All => true,
            Self::Docs => {
                item.kind == ItemKind::Topic
                    || category == TOPIC_CATEGORY
                    || category == QUICK_START_CATEGORY
            }
            Self::Examples => {
                item.kind == ItemKind::Example
                    && category != COMPONENTS_CATEGORY
                    && category != TOPIC_CATEGORY
                    && category != QUICK_START_CATEGORY
            }
            Self::Components => category == COMPONENTS_CATEGORY,
        }
    }
}

/// Unknown names fall back to [`SearchFilter::All`].
impl From<&str> for SearchFilter {
    fn from(name: &str) -> Self {
        match name {
            "docs" => Self::Docs,
            "examples" => Self::Examples,
            "components" => Self::Components,
            _ => Self::All,
        }
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Searches with the default [`MAX_RESULTS`] cap.
pub fn search<'a>(
    query: &str,
    index: &'a SearchIndex,
    filter: SearchFilter,
) -> Vec<SearchResult<'a>> {
    search_with_limit(query, index, filter, MAX_RESULTS)
}

/// Scores every item passing `filter`, drops zero scores, and returns the best `limit`.
///
/// Ties keep index order. An empty or whitespace-only query returns nothing.
pub fn search_with_limit<'a>(
    query: &str,
    index: &'a SearchIndex,
    filter: SearchFilter,
    limit: usize,
) -> Vec<SearchResult<'a>> {
    let matched = search_all(query, index, filter);
    matched.into_iter().take(limit).collect()
}

/// Every scoring item passing `filter`, best first, without a cap.
pub fn search_all<'a>(
    query: &str,
    index: &'a SearchIndex,
    filter: SearchFilter,
) -> Vec<SearchResult<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query = Query::new(query);
    let mut results: Vec<SearchResult<'a>> = index
        .items()
        .iter()
        .filter(|item| filter.matches(item))
        .filter_map(|item| {
            let score = query.score(item);
            (score > 0).then_some(SearchResult { item, score })
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// A lowercased query and its terms.
struct Query {
    /// The full lowercased query.
    phrase: String,
    /// Whitespace-separated terms.
    terms: Vec<String>,
}

impl Query {
    /// Lowercases and splits a query.
    fn new(query: &str) -> Self {
        let phrase = query.to_lowercase();
        let terms = phrase.split_whitespace().map(str::to_string).collect();
        Self { phrase, terms }
    }

    /// Relevance of an item.
    ///
    /// Whole-phrase hits on title, description and category, then per-term hits on content
    /// occurrences, keywords and the full text. Content hits count toward both the
    /// occurrence and full-text signals.
    fn score(&self, item: &SearchIndexItem) -> u32 {
        let title = item.title.to_lowercase();
        let description = item.description.to_lowercase();
        let category = item.category.to_lowercase();
        let content = item.content.to_lowercase();

        let mut score = 0u32;
        if title.contains(&self.phrase) {
            score += TITLE_WEIGHT;
        }
        if description.contains(&self.phrase) {
            score += DESCRIPTION_WEIGHT;
        }
        if category.contains(&self.phrase) {
            score += CATEGORY_WEIGHT;
        }

        let mut full_text = [title, description, category, content.clone()].join(" ");
        for keyword in &item.keywords {
            full_text.push(' ');
            full_text.push_str(&keyword.to_lowercase());
        }

        for term in &self.terms {
            let count = content.matches(term.as_str()).count();
            let occurrences = u32::try_from(count).unwrap_or(u32::MAX);
            score = score.saturating_add(occurrences.saturating_mul(CONTENT_OCCURRENCE_WEIGHT));

            if item.keywords.iter().any(|k| k.contains(term.as_str())) {
                score = score.saturating_add(KEYWORD_WEIGHT);
            }
            if full_text.contains(term.as_str()) {
                score = score.saturating_add(FULL_TEXT_WEIGHT);
            }
        }

        score
    }
}

/// Scores one item against a query, as [`search`] would.
pub fn score_item(query: &str, item: &SearchIndexItem) -> u32 {
    if query.trim().is_empty() {
        return 0;
    }
    Query::new(query).score(item)
}
