//! Filesystem discovery of topic and example files.
//!
//! Walks content and example directories, skipping hidden entries, symlinks and binary
//! files. Results are sorted by relative path so builds are deterministic.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use docsift_config::GroupPatterns;
use docsift_content::{first_heading, humanize_slug, split_frontmatter};
use walkdir::WalkDir;

/// Extension of topic files.
const MARKDOWN_EXTENSION: &str = "md";

/// Extensions never treated as example source.
const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "avif", "mp3", "wav", "ogg", "mp4", "webm",
    "mov", "zip", "tar", "gz", "xz", "7z", "exe", "dll", "so", "dylib", "bin", "wasm", "pdf", "ttf",
    "otf", "woff", "woff2", "sqlite", "db", "class", "pyc", "o", "a",
];

/// A file found under a content or example directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Absolute path.
    pub abs_path: PathBuf,
    /// Path relative to the walked directory.
    pub rel_path: PathBuf,
}

/// A markdown topic found in the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTopic {
    /// Slug derived from the relative path.
    pub slug: String,
    /// Path relative to the content directory.
    pub rel_path: PathBuf,
    /// Title from frontmatter, first heading, or the humanized slug.
    pub title: String,
    /// Description from frontmatter, or empty.
    pub description: String,
}

/// Title and description read from a topic file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicMetadata {
    /// Frontmatter title, else the first `# ` heading.
    pub title: Option<String>,
    /// Frontmatter description.
    pub description: Option<String>,
}

/// Finds every markdown file under `content_dir` and describes it as a topic.
pub fn discover_topics(content_dir: &Path) -> Vec<DiscoveredTopic> {
    walk_files(content_dir)
        .into_iter()
        .filter(|file| file.rel_path.extension() == Some(OsStr::new(MARKDOWN_EXTENSION)))
        .map(|file| {
            let slug = topic_slug(&file.rel_path);
            let metadata = read_topic_metadata(&file.abs_path);
            DiscoveredTopic {
                title: metadata.title.unwrap_or_else(|| humanize_slug(&slug)),
                description: metadata.description.unwrap_or_default(),
                slug,
                rel_path: file.rel_path,
            }
        })
        .collect()
}

/// Finds the files of an example group that pass its patterns.
pub fn discover_example_files(root: &Path, patterns: &GroupPatterns) -> Vec<DiscoveredFile> {
    walk_files(root)
        .into_iter()
        .filter(|file| patterns.matches(&file.rel_path) && !is_binary_file(&file.rel_path))
        .collect()
}

/// Reads a topic file's title and description.
///
/// Unreadable files yield empty metadata.
pub fn read_topic_metadata(path: &Path) -> TopicMetadata {
    let Ok(raw) = fs::read_to_string(path) else {
        return TopicMetadata::default();
    };
    let (frontmatter, body) = split_frontmatter(&raw);
    let frontmatter = frontmatter.unwrap_or_default();

    TopicMetadata {
        title: frontmatter
            .title
            .or_else(|| first_heading(body).map(str::to_string)),
        description: frontmatter.description,
    }
}

/// Slug of a topic file: the relative path without extension, `/` replaced by `-`.
pub fn topic_slug(rel_path: &Path) -> String {
    path_stem_parts(rel_path).join("-")
}

/// Key of an example file: the relative path without extension, separators replaced by `_`.
pub fn example_key(rel_path: &Path) -> String {
    path_stem_parts(rel_path).join("_")
}

/// Path components with the extension dropped from the last one.
fn path_stem_parts(rel_path: &Path) -> Vec<String> {
    let mut parts: Vec<String> = rel_path
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if let Some(stem) = rel_path.file_stem() {
        parts.push(stem.to_string_lossy().into_owned());
    }
    parts
}

/// Walks a directory and returns regular, non-hidden files sorted by relative path.
fn walk_files(root: &Path) -> Vec<DiscoveredFile> {
    let mut files: Vec<DiscoveredFile> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let rel_path = e.path().strip_prefix(root).ok()?.to_path_buf();
            Some(DiscoveredFile {
                abs_path: e.path().to_path_buf(),
                rel_path,
            })
        })
        .collect();
    files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    files
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Checks if a file is likely binary based on extension.
fn is_binary_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| BINARY_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
