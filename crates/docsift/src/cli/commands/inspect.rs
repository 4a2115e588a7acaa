//! Implementation of `docsift inspect`.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use docsift_config::Config;
use docsift_content::{humanize_key, humanize_slug, split_frontmatter};
use docsift_highlight::{dim, header, indent_content, subheader};
use docsift_index::{
    create_code_excerpt, create_excerpt, example_key, extract_keywords, read_topic_metadata,
    topic_slug,
};
use tracing::debug;

use crate::cli::{args::InspectCommand, context::CommandContext};

/// What the index would derive from one file.
struct Derived {
    /// How the file would be indexed.
    kind: &'static str,
    /// Display title.
    title: String,
    /// Frontmatter description, topics only.
    description: Option<String>,
    /// Vocabulary keywords.
    keywords: Vec<String>,
    /// Preview text.
    excerpt: String,
}

/// Shows the keywords and excerpt derived for a file.
///
/// Names follow the file's path inside the configured content directory or example group,
/// so a nested topic gets the same title the index gives it. An unreadable config is ignored.
pub fn run(ctx: &CommandContext, cmd: &InspectCommand) -> ExitCode {
    let path = Path::new(&cmd.file);

    if !path.is_file() {
        eprintln!("error: file not found: {}", cmd.file);
        return ExitCode::FAILURE;
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: failed to read file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = Config::load(&ctx.cwd).unwrap_or_else(|error| {
        debug!(%error, "config unavailable, naming from the file name");
        Config::default()
    });

    let derived = if cmd.code || !is_markdown(path) {
        let roots = config.examples.iter().filter_map(|g| g.path.as_deref());
        derive_code(&relative_path(path, roots), &content)
    } else {
        let rel_path = relative_path(path, config.content.path.as_deref());
        derive_topic(path, &rel_path, &content)
    };

    print_derived(&cmd.file, &derived, content.len());
    ExitCode::SUCCESS
}

/// Path of `path` under the first root containing it, else its file name.
fn relative_path<'a>(path: &Path, roots: impl IntoIterator<Item = &'a Path>) -> PathBuf {
    let Ok(abs_path) = path.canonicalize() else {
        return file_name(path);
    };
    roots
        .into_iter()
        .filter_map(|root| root.canonicalize().ok())
        .find_map(|root| abs_path.strip_prefix(root).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| file_name(path))
}

/// Final component of `path`.
fn file_name(path: &Path) -> PathBuf {
    path.file_name().map(PathBuf::from).unwrap_or_default()
}

/// Derives topic fields the way discovery does.
fn derive_topic(path: &Path, rel_path: &Path, content: &str) -> Derived {
    let metadata = read_topic_metadata(path);
    let (_, body) = split_frontmatter(content);

    Derived {
        kind: "topic",
        title: metadata
            .title
            .unwrap_or_else(|| humanize_slug(&topic_slug(rel_path))),
        description: metadata.description,
        keywords: extract_keywords(body),
        excerpt: create_excerpt(body),
    }
}

/// Derives example fields from a source file.
fn derive_code(rel_path: &Path, content: &str) -> Derived {
    Derived {
        kind: "example",
        title: humanize_key(&example_key(rel_path)),
        description: None,
        keywords: extract_keywords(content),
        excerpt: create_code_excerpt(content),
    }
}

/// Whether a file would be indexed as a topic.
fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(OsStr::to_str),
        Some("md" | "markdown")
    )
}

/// Prints the derived fields.
fn print_derived(file: &str, derived: &Derived, size: usize) {
    println!("{}", header(file));
    println!(
        "{}",
        dim(&format!("indexed as {}, {size} bytes", derived.kind))
    );
    println!();

    println!("{} {}", subheader("Title:"), derived.title);
    if let Some(ref description) = derived.description {
        println!("{} {description}", subheader("Description:"));
    }
    println!();

    println!(
        "{}",
        subheader(&format!("Keywords ({}):", derived.keywords.len()))
    );
    if derived.keywords.is_empty() {
        println!("   {}", dim("(none)"));
    } else {
        println!("{}", indent_content(&derived.keywords.join(", ")));
    }
    println!();

    println!("{}", subheader("Excerpt:"));
    println!("{}", indent_content(&derived.excerpt));
}
