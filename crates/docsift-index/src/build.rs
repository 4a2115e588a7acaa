//! Index construction.

use chrono::Utc;
use docsift_config::Config;
use docsift_content::{ContentSource, ExampleGroup, IdDeduplicator, MemorySource, Topic};
use tracing::{debug, warn};

use crate::{
    IndexError,
    aggregate::{aggregate_examples, aggregate_topics},
    item::{SearchIndex, SearchIndexItem},
    sources::{groups_from_config, topic_source, topics_from_config},
};

/// Builds an index from topics, their content source and example groups.
///
/// Topics come first in input order, then each group's entries. Colliding ids are renamed
/// with a `-N` suffix so every id in the result is unique.
pub fn build_index<S>(topics: &[Topic], source: &S, groups: &[ExampleGroup]) -> SearchIndex
where
    S: ContentSource + ?Sized,
{
    let mut items = aggregate_topics(topics, source);
    let topic_count = items.len();
    items.extend(aggregate_examples(groups));

    ensure_unique_ids(&mut items);

    debug!(
        topics = topic_count,
        examples = items.len() - topic_count,
        "built search index"
    );
    SearchIndex::new(items, Utc::now())
}

/// Builds an index from everything a configuration declares.
pub fn build_from_config(config: &Config) -> Result<SearchIndex, IndexError> {
    let topics = topics_from_config(config);
    let source = topic_source(config, &topics);
    let groups = groups_from_config(config)?;
    Ok(build_index(topics.topics(), source.as_ref(), &groups))
}

/// Renames later items whose id is already taken.
fn ensure_unique_ids(items: &mut [SearchIndexItem]) {
    let mut ids = IdDeduplicator::new();
    for item in items {
        if let Some(renamed) = ids.claim(&item.id) {
            warn!(id = %item.id, renamed = %renamed, "duplicate item id");
            item.id = renamed;
        }
    }
}

/// Collects index inputs before building.
pub struct IndexBuilder {
    /// Topic descriptors in order.
    topics: Vec<Topic>,
    /// Example groups in order.
    groups: Vec<ExampleGroup>,
    /// Topic body lookup.
    source: Box<dyn ContentSource>,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self {
            topics: Vec::new(),
            groups: Vec::new(),
            source: Box::new(MemorySource::new()),
        }
    }
}

impl IndexBuilder {
    /// Creates a builder with no content and an empty in-memory source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a topic.
    #[must_use]
    pub fn topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    /// Adds several topics.
    #[must_use]
    pub fn topics(mut self, topics: impl IntoIterator<Item = Topic>) -> Self {
        self.topics.extend(topics);
        self
    }

    /// Adds an example group.
    #[must_use]
    pub fn group(mut self, group: ExampleGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Sets the topic content source.
    #[must_use]
    pub fn source(mut self, source: impl ContentSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Builds the index. The builder can be reused.
    pub fn build(&self) -> SearchIndex {
        build_index(&self.topics, self.source.as_ref(), &self.groups)
    }
}
