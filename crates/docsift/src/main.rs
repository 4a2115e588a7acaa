//! Command-line entry point for docsift.

use std::process::ExitCode;

use docsift::cli::{
    CommandContext,
    args::{Commands, parse_cli},
    commands,
    logging::init_tracing,
};

fn main() -> ExitCode {
    init_tracing();
    let cli = parse_cli();

    let ctx = match cli.command {
        Commands::Init(_) | Commands::Inspect(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let mut ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}
