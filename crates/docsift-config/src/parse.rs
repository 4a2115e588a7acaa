//! Configuration file parsing.
//!
//! Parses individual `.docsift.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{ConfigError, GroupKind};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Topic content location.
    pub content: Option<RawContent>,
    /// Declared documentation topics, in file order.
    pub topic: Option<Vec<RawTopic>>,
    /// Declared example groups, in file order.
    pub examples: Option<Vec<RawExampleGroup>>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Maximum search results.
    pub limit: Option<usize>,
    /// Filter applied when none is given on the command line.
    pub default_filter: Option<String>,
}

/// Raw `[content]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawContent {
    /// Directory holding `{slug}.md` files.
    pub path: Option<String>,
    /// Whether undeclared markdown files become topics.
    pub discover: Option<bool>,
}

/// Raw `[[topic]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTopic {
    /// Topic slug, also the content file stem.
    pub slug: String,
    /// Display title.
    pub title: Option<String>,
    /// One-line summary.
    pub description: Option<String>,
}

/// Raw `[[examples]]` entry.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawExampleGroup {
    /// Display category label.
    pub category: String,
    /// Base URL shared by every entry of the group.
    pub url: String,
    /// Item kind produced by the group.
    pub kind: Option<GroupKind>,
    /// Directory of example files.
    pub path: Option<String>,
    /// Include pattern(s) applied under `path`. Accepts a string or an array.
    #[serde(default)]
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub include: Option<Vec<String>>,
    /// Exclude pattern(s) applied under `path`. Accepts a string or an array.
    #[serde(default)]
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
    /// Inline key -> code entries.
    pub entries: Option<BTreeMap<String, String>>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
