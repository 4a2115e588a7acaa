//! In-memory search index for docsift.
//!
//! The index is built in three steps:
//! - aggregation turns topics and example groups into uniform [`SearchIndexItem`]s, deriving
//!   keywords with a fixed vocabulary and short excerpts
//! - the builder makes ids unique and stamps the build time
//! - the query engine filters, scores and ranks items against a query
//!
//! # Example
//!
//! ```
//! use docsift_content::{ExampleGroup, MemorySource, Topic};
//! use docsift_index::{SearchFilter, build_index, search};
//!
//! let topics = [Topic::new("api-reference", "API Reference", "Test kit helpers")];
//! let source = MemorySource::new().with("api-reference", "Create a mock with vi.fn().");
//! let groups = [ExampleGroup::new("Unit Testing", "/examples/unit")
//!     .entry("basic_test", "test('x', () => {})")];
//!
//! let index = build_index(&topics, &source, &groups);
//! let results = search("mock", &index, SearchFilter::All);
//! assert_eq!(results[0].item.id, "topic-api-reference");
//! ```

#![warn(missing_docs)]

mod aggregate;
mod build;
mod discovery;
mod error;
mod excerpt;
mod item;
mod keywords;
mod search;
mod sources;

pub use aggregate::{TOPIC_CATEGORY, aggregate_examples, aggregate_topics};
pub use build::{IndexBuilder, build_from_config, build_index};
pub use discovery::{
    DiscoveredFile, DiscoveredTopic, TopicMetadata, discover_example_files, discover_topics,
    example_key, read_topic_metadata, topic_slug,
};
pub use error::IndexError;
pub use excerpt::{
    CODE_EXCERPT_LINES, CODE_EXCERPT_MAX_CHARS, EXCERPT_MAX_CHARS, create_code_excerpt,
    create_excerpt,
};
pub use item::{ItemKind, SearchIndex, SearchIndexItem, SearchResult};
pub use keywords::extract_keywords;
pub use search::{MAX_RESULTS, SearchFilter, score_item, search, search_all, search_with_limit};
pub use sources::{ConfiguredTopics, groups_from_config, topic_source, topics_from_config};
