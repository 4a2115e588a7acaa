//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, fs, path::Path};

use globset::{Glob, GlobMatcher};

use crate::{Config, ExampleGroupConfig};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The content directory does not exist.
    ContentPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The content path exists but is not a directory.
    ContentPathNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
    /// Topics are declared but no content directory is configured.
    NoContentPath,
    /// A declared topic has no markdown file.
    TopicFileMissing {
        /// Topic slug.
        slug: String,
        /// Expected file path.
        path: String,
    },
    /// An example group path does not exist.
    ExamplePathMissing {
        /// Group category.
        category: String,
        /// Path that doesn't exist.
        path: String,
    },
    /// An example group path exists but is not a directory.
    ExamplePathNotDirectory {
        /// Group category.
        category: String,
        /// Path that is not a directory.
        path: String,
    },
    /// An include pattern doesn't match any files.
    IncludePatternMatchesNothing {
        /// Group category.
        category: String,
        /// Pattern that matched nothing.
        pattern: String,
    },
    /// Neither topics nor example groups are configured.
    NothingConfigured,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContentPathMissing { path } => {
                write!(f, "content path does not exist: {path}")
            }
            Self::ContentPathNotDirectory { path } => {
                write!(f, "content path is not a directory: {path}")
            }
            Self::NoContentPath => {
                write!(f, "topics are declared but [content] path is not set")
            }
            Self::TopicFileMissing { slug, path } => {
                write!(f, "topic '{slug}' has no content file: {path}")
            }
            Self::ExamplePathMissing { category, path } => {
                write!(f, "examples '{category}' path does not exist: {path}")
            }
            Self::ExamplePathNotDirectory { category, path } => {
                write!(f, "examples '{category}' path is not a directory: {path}")
            }
            Self::IncludePatternMatchesNothing { category, pattern } => {
                write!(
                    f,
                    "include pattern '{pattern}' for examples '{category}' matches no files"
                )
            }
            Self::NothingConfigured => {
                write!(f, "no topics or examples are defined in configuration")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.is_empty() {
        warnings.push(ConfigWarning::NothingConfigured);
        return warnings;
    }

    warnings.extend(validate_content(config));

    for group in &config.examples {
        warnings.extend(validate_group(group));
    }

    warnings
}

/// Validates the content directory and declared topic files.
fn validate_content(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let Some(ref dir) = config.content.path else {
        if !config.topics.is_empty() || config.content.discover {
            warnings.push(ConfigWarning::NoContentPath);
        }
        return warnings;
    };

    if !dir.exists() {
        warnings.push(ConfigWarning::ContentPathMissing {
            path: dir.display().to_string(),
        });
        return warnings;
    }

    if !dir.is_dir() {
        warnings.push(ConfigWarning::ContentPathNotDirectory {
            path: dir.display().to_string(),
        });
        return warnings;
    }

    for topic in &config.topics {
        let file = dir.join(format!("{}.md", topic.slug));
        if !file.is_file() {
            warnings.push(ConfigWarning::TopicFileMissing {
                slug: topic.slug.clone(),
                path: file.display().to_string(),
            });
        }
    }

    warnings
}

/// Validates a single example group and its include patterns.
fn validate_group(group: &ExampleGroupConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    // Inline-only groups have nothing on disk to check
    let Some(ref path) = group.path else {
        return warnings;
    };

    if !path.exists() {
        warnings.push(ConfigWarning::ExamplePathMissing {
            category: group.category.clone(),
            path: path.display().to_string(),
        });
        return warnings;
    }

    if !path.is_dir() {
        warnings.push(ConfigWarning::ExamplePathNotDirectory {
            category: group.category.clone(),
            path: path.display().to_string(),
        });
        return warnings;
    }

    for pattern in &group.include {
        if !pattern_matches_any_file(path, pattern) {
            warnings.push(ConfigWarning::IncludePatternMatchesNothing {
                category: group.category.clone(),
                pattern: pattern.clone(),
            });
        }
    }

    warnings
}

/// Checks if a glob pattern matches any files in a directory.
fn pattern_matches_any_file(root: &Path, pattern: &str) -> bool {
    let Ok(glob) = Glob::new(pattern) else {
        return false;
    };
    walk_and_match(root, root, &glob.compile_matcher())
}

/// Recursively walks a directory and checks if any file matches the pattern.
fn walk_and_match(root: &Path, current: &Path, matcher: &GlobMatcher) -> bool {
    let Ok(entries) = fs::read_dir(current) else {
        return false;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };

        if path.is_file() && matcher.is_match(relative) {
            return true;
        }

        if path.is_dir() && walk_and_match(root, &path, matcher) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, path::PathBuf};

    use super::*;
    use crate::{ContentSettings, GroupKind, TopicEntry, test_support::TestDir};

    fn make_group(category: &str, path: Option<PathBuf>, include: &[&str]) -> ExampleGroupConfig {
        ExampleGroupConfig {
            category: category.into(),
            url: "/examples".into(),
            kind: GroupKind::Example,
            path,
            include: include.iter().map(|s| (*s).to_string()).collect(),
            exclude: Vec::new(),
            entries: BTreeMap::new(),
            is_global: false,
        }
    }

    fn topic(slug: &str) -> TopicEntry {
        TopicEntry {
            slug: slug.into(),
            title: None,
            description: None,
        }
    }

    #[test]
    fn test_empty_config_warns() {
        let warnings = validate_config(&Config::default());
        assert_eq!(warnings, vec![ConfigWarning::NothingConfigured]);
    }

    #[test]
    fn test_topics_without_content_path() {
        let config = Config {
            topics: vec![topic("intro")],
            ..Default::default()
        };
        assert_eq!(validate_config(&config), vec![ConfigWarning::NoContentPath]);
    }

    #[test]
    fn test_missing_content_dir() {
        let config = Config {
            topics: vec![topic("intro")],
            content: ContentSettings {
                path: Some(PathBuf::from("/nonexistent/docsift/docs")),
                discover: false,
            },
            ..Default::default()
        };
        let warnings = validate_config(&config);
        assert!(matches!(
            warnings.as_slice(),
            [ConfigWarning::ContentPathMissing { .. }]
        ));
    }

    #[test]
    fn test_missing_topic_file() {
        let test_dir = TestDir::new();
        let docs = test_dir.create_dir("docs");
        test_dir.create_file("docs/intro.md", "# Intro\n");

        let config = Config {
            topics: vec![topic("intro"), topic("missing")],
            content: ContentSettings {
                path: Some(docs),
                discover: false,
            },
            ..Default::default()
        };
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            &warnings[0],
            ConfigWarning::TopicFileMissing { slug, .. } if slug == "missing"
        ));
    }

    #[test]
    fn test_example_path_checks() {
        let test_dir = TestDir::new();
        let file = test_dir.create_file("not-a-dir.txt", "x");
        let snippets = test_dir.create_dir("snippets");
        test_dir.create_file("snippets/basic_test.ts", "test()");

        let config = Config {
            examples: vec![
                make_group("Missing", Some(test_dir.path().join("nope")), &["**/*"]),
                make_group("File", Some(file), &["**/*"]),
                make_group("Good", Some(snippets.clone()), &["**/*.ts"]),
                make_group("Empty", Some(snippets), &["**/*.py"]),
                make_group("Inline", None, &["**/*"]),
            ],
            ..Default::default()
        };
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 3);
        assert!(matches!(
            &warnings[0],
            ConfigWarning::ExamplePathMissing { category, .. } if category == "Missing"
        ));
        assert!(matches!(
            &warnings[1],
            ConfigWarning::ExamplePathNotDirectory { category, .. } if category == "File"
        ));
        assert_eq!(
            warnings[2],
            ConfigWarning::IncludePatternMatchesNothing {
                category: "Empty".into(),
                pattern: "**/*.py".into(),
            }
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::TopicFileMissing {
            slug: "intro".into(),
            path: "/docs/intro.md".into(),
        };
        assert_eq!(
            warning.to_string(),
            "topic 'intro' has no content file: /docs/intro.md"
        );
    }
}
