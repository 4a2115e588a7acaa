//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

pub use docsift_highlight::{dim, header, subheader, warning};
use docsift_highlight::{Highlighter, indent_content, rule};
use docsift_index::{ItemKind, SearchFilter, SearchIndexItem, SearchResult};
use serde::Serialize;

/// Width of the rule printed under item headers.
const RULE_WIDTH: usize = 60;

/// How search results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Header, metadata and excerpt per result.
    Full,
    /// One line per result.
    List,
    /// Pretty-printed JSON.
    Json,
}

impl OutputMode {
    /// Picks a mode from the `--list` and `--json` flags.
    pub fn from_flags(list: bool, json: bool) -> Self {
        if json {
            Self::Json
        } else if list {
            Self::List
        } else {
            Self::Full
        }
    }
}

/// JSON output for `docsift search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as searched.
    query: &'a str,
    /// Filter applied before scoring.
    filter: SearchFilter,
    /// Matches before the result cap.
    total_matches: usize,
    /// Ranked results.
    results: &'a [SearchResult<'a>],
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Outputs ranked search results.
pub fn output_search_results(
    query: &str,
    filter: SearchFilter,
    results: &[SearchResult<'_>],
    total_matches: usize,
    mode: OutputMode,
) -> ExitCode {
    if mode == OutputMode::Json {
        return print_json(&JsonSearchOutput {
            query,
            filter,
            total_matches,
            results,
        });
    }

    if results.is_empty() {
        println!("{}", dim("No results found."));
        return ExitCode::SUCCESS;
    }

    for result in results {
        match mode {
            OutputMode::List => println!("{}", format_list_line(result)),
            _ => println!("{}", format_full_result(result)),
        }
    }

    if total_matches > results.len() {
        println!(
            "{}",
            dim(&format!(
                "─── showing {} of {total_matches} matches ───",
                results.len()
            ))
        );
    }

    ExitCode::SUCCESS
}

/// One-line rendering of a result.
fn format_list_line(result: &SearchResult<'_>) -> String {
    let item = result.item;
    format!("{} {} {}", header(&item.id), dim("—"), item.title)
}

/// Multi-line rendering of a result with its excerpt.
fn format_full_result(result: &SearchResult<'_>) -> String {
    let item = result.item;
    let mut output = String::new();

    output.push_str(&format!("─── {} ───\n", header(&item.id)));
    output.push_str(&format!(
        "{} {}\n",
        subheader(&item.title),
        dim(&format!("[{}] {}", item.kind, item.category))
    ));
    output.push_str(&format!(
        "{}\n",
        dim(&format!("{} · score {}", item.url, result.score))
    ));

    if let Some(excerpt) = item.excerpt.as_deref().filter(|e| !e.is_empty()) {
        output.push('\n');
        output.push_str(&indent_content(excerpt));
        output.push('\n');
    }

    output
}

/// Outputs one item with its full, highlighted content.
pub fn output_item(item: &SearchIndexItem, json: bool) -> ExitCode {
    if json {
        return print_json(item);
    }

    println!("{}", header(&item.id));
    println!("{}", subheader(&item.title));
    if !item.description.is_empty() {
        println!("{}", item.description);
    }
    println!(
        "{}",
        dim(&format!("{} · {} · {}", item.kind, item.category, item.url))
    );
    if !item.keywords.is_empty() {
        println!("{} {}", dim("keywords:"), item.keywords.join(", "));
    }
    println!("{}", rule(RULE_WIDTH));

    let highlighter = Highlighter::new();
    let body = match item.kind {
        ItemKind::Topic => highlighter.highlight_markdown(&item.content),
        ItemKind::Example | ItemKind::Code => highlighter.highlight_code(&item.content, None),
    };
    println!("{body}");

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_from_flags() {
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Full);
        assert_eq!(OutputMode::from_flags(true, false), OutputMode::List);
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Json);
    }
}
