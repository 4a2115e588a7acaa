//! Index inputs derived from configuration.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use docsift_config::{Config, ExampleGroupConfig, GroupKind};
use docsift_content::{
    ContentSource, DirectorySource, ExampleGroup, ExampleKind, MemorySource, Topic, humanize_slug,
};
use tracing::{debug, warn};

use crate::{
    IndexError,
    discovery::{discover_example_files, discover_topics, example_key, read_topic_metadata},
};

/// Topics a configuration declares or discovers, with their file locations.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredTopics {
    /// Topic descriptors in index order.
    topics: Vec<Topic>,
    /// Slugs whose file isn't `{slug}.md`, with the path relative to the content directory.
    locations: Vec<(String, PathBuf)>,
}

impl ConfiguredTopics {
    /// Topic descriptors in index order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }
}

/// Resolves the topics of a configuration.
///
/// Declared topics come first, in precedence order. A declared topic with no title takes it
/// from its file (frontmatter, then first heading) or falls back to the humanized slug.
/// With discovery enabled, undeclared markdown files follow, sorted by path. A file whose slug
/// is already taken (`guides-setup.md` and `guides/setup.md`) is skipped; the first path wins.
pub fn topics_from_config(config: &Config) -> ConfiguredTopics {
    let content_dir = config.content.path.as_deref();
    let mut result = ConfiguredTopics::default();

    for entry in &config.topics {
        let metadata = match content_dir {
            Some(dir) if entry.title.is_none() || entry.description.is_none() => {
                read_topic_metadata(&dir.join(format!("{}.md", entry.slug)))
            }
            _ => Default::default(),
        };
        result.topics.push(Topic {
            slug: entry.slug.clone(),
            title: entry
                .title
                .clone()
                .or(metadata.title)
                .unwrap_or_else(|| humanize_slug(&entry.slug)),
            description: entry
                .description
                .clone()
                .or(metadata.description)
                .unwrap_or_default(),
        });
    }

    if config.content.discover
        && let Some(dir) = content_dir
    {
        let discovered = discover_topics(dir);
        debug!(count = discovered.len(), dir = %dir.display(), "discovered topics");

        let mut used: HashSet<String> = config.topics.iter().map(|t| t.slug.clone()).collect();
        for topic in discovered {
            if !used.insert(topic.slug.clone()) {
                if topic.rel_path != Path::new(&format!("{}.md", topic.slug)) {
                    warn!(
                        slug = %topic.slug,
                        path = %topic.rel_path.display(),
                        "topic slug already used, skipping file"
                    );
                }
                continue;
            }
            result.locations.push((topic.slug.clone(), topic.rel_path));
            result.topics.push(Topic::new(topic.slug, topic.title, topic.description));
        }
    }

    result
}

/// Returns the content source for configured topics.
///
/// Without a content directory every topic is indexed from its metadata only.
pub fn topic_source(config: &Config, topics: &ConfiguredTopics) -> Box<dyn ContentSource> {
    let Some(ref dir) = config.content.path else {
        return Box::new(MemorySource::new());
    };

    let mut source = DirectorySource::new(dir.clone());
    for (slug, rel_path) in &topics.locations {
        source.alias(slug.clone(), rel_path.clone());
    }
    Box::new(source)
}

/// Loads every configured example group.
///
/// Files under a group's `path` come first, sorted by relative path. Inline entries are then
/// applied in key order, replacing file entries with the same key.
pub fn groups_from_config(config: &Config) -> Result<Vec<ExampleGroup>, IndexError> {
    config.examples.iter().map(load_group).collect()
}

/// Loads one example group.
fn load_group(config: &ExampleGroupConfig) -> Result<ExampleGroup, IndexError> {
    let mut group = ExampleGroup::new(&config.category, &config.url).with_kind(match config.kind {
        GroupKind::Example => ExampleKind::Example,
        GroupKind::Code => ExampleKind::Code,
    });

    if let Some(ref root) = config.path
        && root.is_dir()
    {
        let patterns = config.compile_patterns()?;
        let files = discover_example_files(root, &patterns);
        debug!(category = %config.category, count = files.len(), "discovered example files");

        for file in files {
            let code = fs::read_to_string(&file.abs_path).map_err(|source| {
                IndexError::ReadExample {
                    path: file.abs_path.clone(),
                    source,
                }
            })?;
            group.push(example_key(&file.rel_path), code);
        }
    }

    for (key, code) in &config.entries {
        group.upsert(key, code.as_str());
    }

    Ok(group)
}
