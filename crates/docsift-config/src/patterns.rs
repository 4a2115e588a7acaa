//! Include/exclude pattern compilation and matching.
//!
//! Compiles glob patterns from an example group into matchers that decide which files under
//! the group directory become entries.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::{ConfigError, ExampleGroupConfig};

/// Compiled include and exclude patterns for one example group.
#[derive(Debug)]
pub struct GroupPatterns {
    /// Files must match at least one of these.
    include: GlobSet,
    /// Files matching any of these are skipped.
    exclude: GlobSet,
}

impl GroupPatterns {
    /// Compiles a group's patterns.
    pub fn compile(group: &ExampleGroupConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            include: build_set(&group.include, &group.category, "include")?,
            exclude: build_set(&group.exclude, &group.category, "exclude")?,
        })
    }

    /// Checks a path relative to the group directory.
    ///
    /// A file matches if it matches at least one include pattern
    /// and does not match any exclude pattern.
    pub fn matches(&self, path: &Path) -> bool {
        self.include.is_match(path) && !self.exclude.is_match(path)
    }
}

/// Builds a glob set from a list of patterns.
fn build_set(patterns: &[String], category: &str, label: &str) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern)?);
    }
    builder.build().map_err(|e| ConfigError::InvalidPattern {
        pattern: format!("<combined {label} patterns for {category}>"),
        source: e,
    })
}

/// Compiles a single glob pattern.
fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}
