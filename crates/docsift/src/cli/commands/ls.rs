//! Implementation of `docsift ls`.

use std::process::ExitCode;

use docsift_config::format_path_for_display;
use docsift_index::topics_from_config;

use crate::cli::{
    args::{LsCommand, LsWhat},
    context::CommandContext,
    output::{dim, header},
};

/// Lists configured topics, example groups, or indexed items.
pub fn run(ctx: &mut CommandContext, cmd: &LsCommand) -> ExitCode {
    match cmd.what {
        LsWhat::Topics => cmd_ls_topics(ctx, cmd.long),
        LsWhat::Groups => cmd_ls_groups(ctx, cmd.long),
        LsWhat::Items => cmd_ls_items(ctx, cmd.long),
    }
}

/// Lists declared and discovered topics.
fn cmd_ls_topics(ctx: &CommandContext, long: bool) -> ExitCode {
    let configured = topics_from_config(&ctx.config);
    let topics = configured.topics();

    if topics.is_empty() {
        println!("{}", dim("No topics configured."));
        return ExitCode::SUCCESS;
    }

    for topic in topics {
        println!("{} {} {}", header(&topic.slug), dim("—"), topic.title);
        if long {
            if !topic.description.is_empty() {
                println!("  {}", topic.description);
            }
            println!();
        }
    }

    ExitCode::SUCCESS
}

/// Lists configured example groups.
fn cmd_ls_groups(ctx: &CommandContext, long: bool) -> ExitCode {
    let config = &ctx.config;

    if config.examples.is_empty() {
        println!("{}", dim("No example groups configured."));
        return ExitCode::SUCCESS;
    }

    for group in &config.examples {
        let scope = if group.is_global { "global" } else { "local" };
        println!(
            "{} {} {}",
            header(&group.category),
            dim(&format!("({}, {scope})", group.kind)),
            dim(&format!("→ {}", group.url))
        );

        if long {
            if let Some(ref path) = group.path {
                let base = if group.is_global {
                    None
                } else {
                    config.config_root.as_deref()
                };
                println!("  {} {}", dim("path:"), format_path_for_display(path, base));
                for pattern in &group.include {
                    println!("  {} {}", dim("+"), pattern);
                }
                for pattern in &group.exclude {
                    println!("  {} {}", dim("-"), pattern);
                }
            }
            if !group.entries.is_empty() {
                println!(
                    "  {}",
                    dim(&format!("{} inline entries", group.entries.len()))
                );
            }
            println!();
        }
    }

    ExitCode::SUCCESS
}

/// Lists every item in the built index.
fn cmd_ls_items(ctx: &mut CommandContext, long: bool) -> ExitCode {
    let index = match ctx.index(false) {
        Ok(index) => index,
        Err(code) => return code,
    };

    if index.items().is_empty() {
        println!("{}", dim("No items indexed."));
        return ExitCode::SUCCESS;
    }

    for item in index.items() {
        println!("{} {} {}", header(&item.id), dim("—"), item.title);
        if long {
            println!(
                "  {}",
                dim(&format!(
                    "{} · {} · {} · {} chars",
                    item.kind,
                    item.category,
                    item.url,
                    item.content.len()
                ))
            );
            if !item.keywords.is_empty() {
                println!("  {} {}", dim("keywords:"), item.keywords.join(", "));
            }
            println!();
        }
    }

    if long {
        println!(
            "{}",
            dim(&format!(
                "{} items, built {}",
                index.total_items(),
                index.generated_at().format("%Y-%m-%d %H:%M:%S UTC")
            ))
        );
    }

    ExitCode::SUCCESS
}
