//! Configuration system for docsift.
//!
//! docsift uses TOML configuration files named `.docsift.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.docsift.toml` files found, then loading `~/.docsift.toml` as the global config with
//! lowest precedence.
//!
//! A configuration declares where topic markdown lives, which topics exist, and which example
//! groups feed the index.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawContent, RawExampleGroup, RawSettings, RawTopic, parse_config_file,
    parse_config_str,
};
pub use patterns::GroupPatterns;
pub use resolve::{format_path_for_display, resolve_path};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default maximum number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Default search filter name.
pub const DEFAULT_FILTER: &str = "all";

/// Default include pattern for example group directories.
pub const DEFAULT_EXAMPLE_INCLUDE: &str = "**/*";

/// Top-level merged configuration for docsift.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.docsift.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Topic content location.
    pub content: ContentSettings,
    /// Declared topics in precedence order.
    pub topics: Vec<TopicEntry>,
    /// Example groups in precedence order.
    pub examples: Vec<ExampleGroupConfig>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.docsift.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.docsift.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.docsift.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Returns true if neither topics nor example groups are configured.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty() && self.examples.is_empty() && !self.content.discover
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A missing content directory, or declared topics without one
    /// - Declared topics whose `{slug}.md` file is missing
    /// - Example group paths that don't exist or aren't directories
    /// - Include patterns that don't match any files
    /// - Empty configuration
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// Topics and example groups are not included since they carry resolved paths.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            settings: self.settings.clone(),
            content: SerializableContent {
                path: self
                    .content
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string()),
                discover: self.content.discover,
            },
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// General settings for docsift.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum results per query.
    pub limit: usize,
    /// Filter used when none is requested.
    pub default_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

/// Where topic bodies are loaded from.
#[derive(Debug, Clone, Default)]
pub struct ContentSettings {
    /// Resolved directory holding `{slug}.md` files.
    pub path: Option<PathBuf>,
    /// Whether undeclared markdown files in `path` become topics.
    pub discover: bool,
}

/// A declared documentation topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicEntry {
    /// Topic slug.
    pub slug: String,
    /// Display title, if declared.
    pub title: Option<String>,
    /// One-line summary, if declared.
    pub description: Option<String>,
}

/// The kind of item an example group produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// Runnable examples.
    #[default]
    Example,
    /// Reference code snippets.
    Code,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Example => write!(f, "example"),
            Self::Code => write!(f, "code"),
        }
    }
}

/// A resolved example group.
#[derive(Debug, Clone)]
pub struct ExampleGroupConfig {
    /// Display category label.
    pub category: String,
    /// Base URL for every entry.
    pub url: String,
    /// Item kind produced by the group.
    pub kind: GroupKind,
    /// Resolved directory of example files.
    pub path: Option<PathBuf>,
    /// Include patterns relative to `path`.
    pub include: Vec<String>,
    /// Exclude patterns relative to `path`.
    pub exclude: Vec<String>,
    /// Inline entries, ordered by key.
    pub entries: BTreeMap<String, String>,
    /// Whether this group was defined in the global `~/.docsift.toml`.
    pub is_global: bool,
}

impl ExampleGroupConfig {
    /// Compiles this group's include/exclude patterns.
    pub fn compile_patterns(&self) -> Result<GroupPatterns, ConfigError> {
        GroupPatterns::compile(self)
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// General settings.
    settings: Settings,
    /// Content settings with the path rendered as a string.
    content: SerializableContent,
}

/// Content settings in their serializable form.
#[derive(Serialize)]
struct SerializableContent {
    /// Content directory, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    /// Topic discovery flag.
    discover: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.limit, 20);
        assert_eq!(settings.default_filter, "all");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.topics.is_empty());
        assert!(config.examples.is_empty());
        assert!(config.config_root.is_none());
        assert!(config.is_empty());
    }

    #[test]
    fn test_group_kind_display() {
        assert_eq!(GroupKind::Example.to_string(), "example");
        assert_eq!(GroupKind::Code.to_string(), "code");
        assert_eq!(GroupKind::default(), GroupKind::Example);
    }

    #[test]
    fn test_settings_to_toml() {
        let config = Config {
            content: ContentSettings {
                path: Some(PathBuf::from("/srv/docs")),
                discover: true,
            },
            ..Default::default()
        };
        let toml = config.settings_to_toml().unwrap();

        assert!(toml.contains("[settings]"));
        assert!(toml.contains("[content]"));
        assert!(toml.contains("limit = 20"));
        assert!(toml.contains("default_filter = \"all\""));
        assert!(toml.contains("path = \"/srv/docs\""));
        assert!(toml.contains("discover = true"));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert!(parsed.get("settings").is_some());
        assert!(parsed.get("content").is_some());
    }

    #[test]
    fn test_settings_to_toml_without_content_path() {
        let toml = Config::default().settings_to_toml().unwrap();
        assert!(!toml.contains("path ="));
    }
}
