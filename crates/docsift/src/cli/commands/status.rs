//! Implementation of `docsift status`.

use std::process::ExitCode;

use docsift_config::{ConfigWarning, discover_config_files, format_path_for_display};
use docsift_index::topics_from_config;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, content, example groups, and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("docsift init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", format_path_for_display(path, Some(cwd)));
    }
    println!();

    let config = &ctx.config;
    let base = config.config_root.as_deref();

    println!("{}", subheader("Content:"));
    match config.content.path {
        Some(ref path) => {
            let display_path = format_path_for_display(path, base);
            if path.is_dir() {
                println!("   {display_path}");
            } else {
                println!("   {display_path} {}", warning("[missing]"));
            }
            if config.content.discover {
                println!("   {}", dim("(discovering undeclared topics)"));
            }
        }
        None => println!("   {}", dim("(none configured)")),
    }
    println!();

    let topics = topics_from_config(config);
    println!(
        "{}",
        subheader(&format!("Topics ({}):", topics.topics().len()))
    );
    if topics.topics().is_empty() {
        println!("   {}", dim("(none defined)"));
    } else {
        for topic in topics.topics() {
            println!("   {} {}", topic.slug, dim(&format!("({})", topic.title)));
        }
    }
    println!();

    println!("{}", subheader("Example groups:"));
    if config.examples.is_empty() {
        println!("   {}", dim("(none defined)"));
    } else {
        for group in &config.examples {
            let scope = if group.is_global { "global" } else { "local" };
            let source = match group.path {
                Some(ref path) => {
                    let display_path =
                        format_path_for_display(path, if group.is_global { None } else { base });
                    if path.is_dir() {
                        dim(&format!("-> {display_path}"))
                    } else {
                        format!(
                            "{} {}",
                            dim(&format!("-> {display_path}")),
                            warning("[missing]")
                        )
                    }
                }
                None => dim(&format!("{} inline entries", group.entries.len())),
            };
            println!(
                "   {} {} {}",
                group.category,
                dim(&format!("({}, {scope})", group.kind)),
                source
            );
        }
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints = Vec::new();

    for w in warnings {
        let hint = match w {
            ConfigWarning::NothingConfigured => {
                "add [[topic]] or [[examples]] sections to .docsift.toml"
            }
            ConfigWarning::NoContentPath => {
                "set [content] path to the directory holding topic files"
            }
            ConfigWarning::ContentPathMissing { .. }
            | ConfigWarning::ContentPathNotDirectory { .. } => {
                "create the content directory or fix [content] path"
            }
            ConfigWarning::TopicFileMissing { .. } => {
                "topics without a file are indexed from their title and description only"
            }
            ConfigWarning::ExamplePathMissing { .. }
            | ConfigWarning::ExamplePathNotDirectory { .. } => {
                "example paths must point to directories"
            }
            ConfigWarning::IncludePatternMatchesNothing { .. } => {
                "check include patterns or example paths"
            }
        };
        hints.push(hint);
    }

    hints.sort_unstable();
    hints.dedup();

    for hint in hints {
        println!("{}", dim(&format!("Hint: {hint}")));
    }
}
