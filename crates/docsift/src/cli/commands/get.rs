//! Implementation of `docsift get`.

use std::process::ExitCode;

use crate::cli::{args::GetCommand, context::CommandContext, output::output_item};

/// Retrieves one item by ID.
pub fn run(ctx: &mut CommandContext, cmd: &GetCommand) -> ExitCode {
    let index = match ctx.index(false) {
        Ok(index) => index,
        Err(code) => return code,
    };

    let Some(item) = index.get(&cmd.id) else {
        eprintln!("error: not found: {}", cmd.id);
        eprintln!("Run 'docsift ls items' to list available IDs.");
        return ExitCode::FAILURE;
    };

    output_item(item, cmd.json)
}
