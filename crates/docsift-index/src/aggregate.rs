//! Turns topics and example groups into index items.
//!
//! Aggregation produces complete items: keywords and excerpts are derived here, so a topic
//! whose content fails to load can keep its deliberately empty keyword list.

use docsift_content::{ContentSource, ExampleGroup, Topic, humanize_key, slugify_label};
use tracing::warn;

use crate::{
    excerpt::{create_code_excerpt, create_excerpt},
    item::{ItemKind, SearchIndexItem},
    keywords::extract_keywords,
};

/// Category assigned to every topic.
pub const TOPIC_CATEGORY: &str = "Documentation";

/// Route prefix for topic urls.
const TOPIC_URL_PREFIX: &str = "/docs/";

/// Builds one item per topic, in input order.
///
/// A topic whose body cannot be loaded becomes a degraded item built from its title and
/// description. The failure is logged and never propagated.
pub fn aggregate_topics<S>(topics: &[Topic], source: &S) -> Vec<SearchIndexItem>
where
    S: ContentSource + ?Sized,
{
    topics
        .iter()
        .map(|topic| match source.load(&topic.slug) {
            Ok(content) => topic_item(topic, content),
            Err(error) => {
                warn!(slug = %topic.slug, %error, "topic content unavailable, indexing metadata only");
                degraded_topic_item(topic)
            }
        })
        .collect()
}

/// Builds one item per example entry, group by group.
pub fn aggregate_examples(groups: &[ExampleGroup]) -> Vec<SearchIndexItem> {
    groups
        .iter()
        .flat_map(|group| {
            let category_slug = slugify_label(&group.category);
            group.entries.iter().map(move |entry| {
                let title = humanize_key(&entry.key);
                SearchIndexItem {
                    id: format!("example-{category_slug}-{}", entry.key),
                    description: format!("{} example: {title}", group.category),
                    title,
                    url: group.url.clone(),
                    kind: ItemKind::from(group.kind),
                    category: group.category.clone(),
                    keywords: extract_keywords(&entry.code),
                    excerpt: Some(create_code_excerpt(&entry.code)),
                    content: entry.code.clone(),
                }
            })
        })
        .collect()
}

/// Item for a topic whose body loaded.
fn topic_item(topic: &Topic, content: String) -> SearchIndexItem {
    SearchIndexItem {
        id: topic_id(&topic.slug),
        title: topic.title.clone(),
        description: topic.description.clone(),
        url: format!("{TOPIC_URL_PREFIX}{}", topic.slug),
        kind: ItemKind::Topic,
        category: TOPIC_CATEGORY.to_string(),
        keywords: extract_keywords(&content),
        excerpt: Some(create_excerpt(&content)),
        content,
    }
}

/// Item for a topic whose body failed to load.
fn degraded_topic_item(topic: &Topic) -> SearchIndexItem {
    SearchIndexItem {
        id: topic_id(&topic.slug),
        title: topic.title.clone(),
        description: topic.description.clone(),
        url: format!("{TOPIC_URL_PREFIX}{}", topic.slug),
        kind: ItemKind::Topic,
        category: TOPIC_CATEGORY.to_string(),
        content: format!("{}\n\n{}", topic.title, topic.description),
        excerpt: Some(topic.description.clone()),
        keywords: Vec::new(),
    }
}

/// Id of a topic item.
fn topic_id(slug: &str) -> String {
    format!("topic-{slug}")
}
