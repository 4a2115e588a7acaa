//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    Config, ConfigError, ContentSettings, DEFAULT_EXAMPLE_INCLUDE, ExampleGroupConfig, Settings,
    TopicEntry,
    discovery::is_global_config,
    parse::{RawConfig, RawExampleGroup, RawSettings},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory containing the config file, used to resolve relative paths.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Content path: first defined wins, resolved against the file that defined it
/// - Topics: merged by slug, first definition wins completely
/// - Example groups: merged by category, first definition wins completely
///
/// Topics and groups keep the order in which they are first seen.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let settings = merge_settings(configs);
    let content = merge_content(configs)?;
    let topics = merge_topics(configs);
    let examples = merge_examples(configs)?;
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        settings,
        content,
        topics,
        examples,
        config_root,
    })
}

/// Merges general settings, taking first defined value for each field.
fn merge_settings(configs: &[ParsedConfig]) -> Settings {
    let mut result = Settings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref raw) = parsed.config.settings {
            apply_raw_settings(&mut result, raw);
        }
    }

    result
}

/// Applies raw settings on top of existing settings.
///
/// Configs are applied lowest precedence first, so later calls override.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(limit) = raw.limit {
        result.limit = limit;
    }
    if let Some(ref filter) = raw.default_filter {
        result.default_filter.clone_from(filter);
    }
}

/// Merges the `[content]` section.
fn merge_content(configs: &[ParsedConfig]) -> Result<ContentSettings, ConfigError> {
    let mut result = ContentSettings::default();

    let path_source = configs.iter().find_map(|parsed| {
        parsed
            .config
            .content
            .as_ref()
            .and_then(|c| c.path.as_deref())
            .map(|path| (path, parsed.dir()))
    });
    if let Some((path, dir)) = path_source {
        result.path = Some(resolve_path(path, dir)?);
    }

    result.discover = configs
        .iter()
        .find_map(|parsed| parsed.config.content.as_ref().and_then(|c| c.discover))
        .unwrap_or(false);

    Ok(result)
}

/// Merges declared topics by slug.
fn merge_topics(configs: &[ParsedConfig]) -> Vec<TopicEntry> {
    let mut seen = HashSet::new();
    let mut topics = Vec::new();

    for parsed in configs {
        let Some(ref raw_topics) = parsed.config.topic else {
            continue;
        };
        for raw in raw_topics {
            if !seen.insert(raw.slug.clone()) {
                continue;
            }
            topics.push(TopicEntry {
                slug: raw.slug.clone(),
                title: raw.title.clone(),
                description: raw.description.clone(),
            });
        }
    }

    topics
}

/// Merges example groups by category, resolving group paths.
///
/// `is_global` is determined by whether the source config file is `~/.docsift.toml`.
fn merge_examples(configs: &[ParsedConfig]) -> Result<Vec<ExampleGroupConfig>, ConfigError> {
    let mut seen = HashSet::new();
    let mut groups = Vec::new();

    for parsed in configs {
        let Some(ref raw_groups) = parsed.config.examples else {
            continue;
        };
        let is_global = is_global_config(&parsed.path);

        for raw in raw_groups {
            if !seen.insert(raw.category.clone()) {
                continue;
            }
            let path = raw
                .path
                .as_deref()
                .map(|p| resolve_path(p, parsed.dir()))
                .transpose()?;
            groups.push(convert_group(raw, path, is_global));
        }
    }

    Ok(groups)
}

/// Converts a raw example group to the final type with defaults applied.
fn convert_group(
    raw: &RawExampleGroup,
    path: Option<PathBuf>,
    is_global: bool,
) -> ExampleGroupConfig {
    let include = raw
        .include
        .clone()
        .unwrap_or_else(|| vec![DEFAULT_EXAMPLE_INCLUDE.to_string()]);

    ExampleGroupConfig {
        category: raw.category.clone(),
        url: raw.url.clone(),
        kind: raw.kind.unwrap_or_default(),
        path,
        include,
        exclude: raw.exclude.clone().unwrap_or_default(),
        entries: raw.entries.clone().unwrap_or_default(),
        is_global,
    }
}
