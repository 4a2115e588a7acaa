//! Topic content providers.

use std::{
    collections::HashMap,
    fs, io,
    path::{Component, PathBuf},
};

use crate::{ContentError, frontmatter::split_frontmatter};

/// Looks up a topic body by slug.
///
/// The index asks its source for each topic body and degrades the topic to its metadata
/// when the lookup fails.
///
/// # Example
///
/// ```
/// use docsift_content::{ContentError, ContentSource, MemorySource};
///
/// let source = MemorySource::new().with("intro", "# Intro\n\nWrite a test.");
/// assert_eq!(source.load("intro").unwrap(), "# Intro\n\nWrite a test.");
/// assert!(matches!(source.load("missing"), Err(ContentError::NotFound { .. })));
/// ```
pub trait ContentSource {
    /// Loads the markdown body for `slug`, frontmatter removed.
    fn load(&self, slug: &str) -> Result<String, ContentError>;
}

/// Reads `{slug}.md` files from a directory.
///
/// Frontmatter is stripped from the returned body. Slugs that don't follow the file name,
/// such as discovered nested topics, can be mapped to a relative path with
/// [`DirectorySource::alias`].
#[derive(Debug, Clone)]
pub struct DirectorySource {
    /// Directory holding the markdown files.
    root: PathBuf,
    /// Slug to relative path overrides.
    aliases: HashMap<String, PathBuf>,
}

impl DirectorySource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            aliases: HashMap::new(),
        }
    }

    /// Maps `slug` to a file relative to the root.
    pub fn alias(&mut self, slug: impl Into<String>, rel_path: impl Into<PathBuf>) {
        self.aliases.insert(slug.into(), rel_path.into());
    }

    /// Returns the file a slug maps to, or `None` if the slug would escape the root.
    pub fn path_for(&self, slug: &str) -> Option<PathBuf> {
        let relative = self
            .aliases
            .get(slug)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(format!("{slug}.md")));
        let contained = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        contained.then(|| self.root.join(relative))
    }
}

impl ContentSource for DirectorySource {
    fn load(&self, slug: &str) -> Result<String, ContentError> {
        let not_found = || ContentError::NotFound {
            slug: slug.to_string(),
        };
        let path = self.path_for(slug).ok_or_else(not_found)?;

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(source) => return Err(ContentError::ReadFile { path, source }),
        };

        let (_, body) = split_frontmatter(&raw);
        Ok(body.to_string())
    }
}

/// In-memory content keyed by slug.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    /// Bodies are returned as stored.
    bodies: HashMap<String, String>,
}

impl MemorySource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the body for `slug`.
    pub fn insert(&mut self, slug: impl Into<String>, body: impl Into<String>) {
        self.bodies.insert(slug.into(), body.into());
    }

    /// Builder form of [`MemorySource::insert`].
    #[must_use]
    pub fn with(mut self, slug: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(slug, body);
        self
    }
}

impl ContentSource for MemorySource {
    fn load(&self, slug: &str) -> Result<String, ContentError> {
        self.bodies
            .get(slug)
            .cloned()
            .ok_or_else(|| ContentError::NotFound {
                slug: slug.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_source_strips_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("api-reference.md"),
            "---\ntitle: API\n---\n\n# API Reference\n\nUse vi.fn to mock.\n",
        )
        .unwrap();

        let source = DirectorySource::new(dir.path());
        let body = source.load("api-reference").unwrap();
        assert_eq!(body, "# API Reference\n\nUse vi.fn to mock.\n");
    }

    #[test]
    fn test_directory_source_nested_slug() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("guides")).unwrap();
        fs::write(dir.path().join("guides/setup.md"), "Setup body").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.load("guides/setup").unwrap(), "Setup body");
    }

    #[test]
    fn test_directory_source_alias() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("guides")).unwrap();
        fs::write(dir.path().join("guides/setup.md"), "Nested body").unwrap();

        let mut source = DirectorySource::new(dir.path());
        source.alias("guides-setup", "guides/setup.md");
        assert_eq!(source.load("guides-setup").unwrap(), "Nested body");
    }

    #[test]
    fn test_directory_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.load("missing"),
            Err(ContentError::NotFound { slug }) if slug == "missing"
        ));
    }

    #[test]
    fn test_directory_source_rejects_escaping_slug() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path().join("docs"));
        assert!(source.path_for("../secret").is_none());
        assert!(matches!(
            source.load("../secret"),
            Err(ContentError::NotFound { .. })
        ));
    }

    #[test]
    fn test_directory_source_read_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder.md")).unwrap();

        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.load("folder"),
            Err(ContentError::ReadFile { .. })
        ));
    }

    #[test]
    fn test_memory_source() {
        let mut source = MemorySource::new();
        source.insert("intro", "Hello");
        assert_eq!(source.load("intro").unwrap(), "Hello");
        assert!(matches!(
            source.load("other"),
            Err(ContentError::NotFound { .. })
        ));
    }

    #[test]
    fn test_memory_source_replace() {
        let source = MemorySource::new().with("a", "one").with("a", "two");
        assert_eq!(source.load("a").unwrap(), "two");
    }
}
