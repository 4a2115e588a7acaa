//! Clap argument definitions for the `docsift` CLI.

use std::{env, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "docsift")]
#[command(about = "Search documentation topics and code examples")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `docsift search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words, joined with spaces
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Restrict results: all, docs, examples, components [default: all]
    #[arg(short = 'f', long)]
    pub filter: Option<String>,

    /// Maximum results to return [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output titles only
    #[arg(long)]
    pub list: bool,

    /// Output in JSON format
    #[arg(long, conflicts_with = "list")]
    pub json: bool,
}

impl SearchCommand {
    /// The query as one string.
    pub fn query(&self) -> String {
        self.queries.join(" ")
    }
}

/// Arguments for `docsift get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Item ID, e.g. topic-getting-started or example-unit-testing-basic_test
    pub id: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `docsift ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Show detailed information.
    #[arg(short = 'l', long)]
    pub long: bool,

    /// What to list.
    #[command(subcommand)]
    pub what: LsWhat,
}

/// Arguments for `docsift inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// File to inspect
    pub file: String,

    /// Treat the file as example code even if it is markdown
    #[arg(long)]
    pub code: bool,
}

/// Arguments for `docsift init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.docsift.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `docsift` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search topics and examples
    #[command(after_help = "\
FILTERS:
  all          Everything (default)
  docs         Topics and Quick Start material
  examples     Examples outside Documentation, Quick Start and Components
  components   Component snippets

EXAMPLES:
  docsift search mock
  docsift search render props -f components
  docsift search 'vi.fn' -n 5 --json")]
    Search(SearchCommand),

    /// Show one indexed item by ID
    Get(GetCommand),

    /// List topics, example groups, or indexed items
    Ls(LsCommand),

    /// Show the keywords and excerpt derived for a file
    Inspect(InspectCommand),

    /// Initialize docsift configuration in current directory
    Init(InitCommand),

    /// Show status and validate configuration
    Status,

    /// Show effective configuration settings
    Config,
}

/// What to list with `docsift ls`.
#[derive(Clone, Copy, Subcommand, Debug)]
pub enum LsWhat {
    /// List configured topics
    Topics,
    /// List configured example groups
    Groups,
    /// List every indexed item
    Items,
}

/// Parses CLI arguments, printing hierarchical help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_hierarchical_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom help with subcommands and their nested subcommands.
fn print_hierarchical_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: docsift <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }

        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");

        for subsub in sub.get_subcommands() {
            let subname = subsub.get_name();
            if subname == "help" {
                continue;
            }
            let subabout = subsub
                .get_about()
                .map(|s| s.to_string())
                .unwrap_or_default();
            println!("    {subname:8} {subabout}");
        }
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -h, --help  Print help");
    println!();
    println!("Set DOCSIFT_LOG (e.g. debug) to print diagnostics on stderr.");
}

#[cfg(test)]
mod tests {
    use docsift_config::{DEFAULT_FILTER, DEFAULT_SEARCH_LIMIT};

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    /// Catches drift between the config defaults and the help text.
    #[test]
    fn cli_help_defaults_match_constants() {
        let cmd = Cli::command();

        let limit_help = get_arg_help(&cmd, "search", "limit");
        assert!(
            limit_help.contains(&format!("[default: {DEFAULT_SEARCH_LIMIT}]")),
            "search --limit help should contain default {DEFAULT_SEARCH_LIMIT}: {limit_help}"
        );

        let filter_help = get_arg_help(&cmd, "search", "filter");
        assert!(
            filter_help.contains(&format!("[default: {DEFAULT_FILTER}]")),
            "search --filter help should contain default {DEFAULT_FILTER}: {filter_help}"
        );
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_joins_query_words() {
        let args = ["docsift", "search", "render", "props", "-f", "components"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Commands::Search(cmd) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(cmd.query(), "render props");
        assert_eq!(cmd.filter.as_deref(), Some("components"));
        assert!(cmd.limit.is_none());
    }

    #[test]
    fn search_requires_a_query() {
        assert!(Cli::try_parse_from(["docsift", "search"]).is_err());
    }

    #[test]
    fn ls_parses_long_flag() {
        let cli = Cli::try_parse_from(["docsift", "ls", "-l", "items"]).unwrap();
        let Commands::Ls(cmd) = cli.command else {
            panic!("expected ls");
        };
        assert!(cmd.long);
        assert!(matches!(cmd.what, LsWhat::Items));
    }
}
