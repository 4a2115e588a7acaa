//! Implementation of `docsift search`.

use std::process::ExitCode;

use docsift_index::{SearchFilter, search_all};

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{OutputMode, output_search_results},
};

/// Searches the index and prints ranked results.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let query = cmd.query();
    let settings = &ctx.config.settings;
    let filter = SearchFilter::from(
        cmd.filter
            .as_deref()
            .unwrap_or(settings.default_filter.as_str()),
    );
    let limit = cmd.limit.unwrap_or(settings.limit);
    let mode = OutputMode::from_flags(cmd.list, cmd.json);

    if query.trim().is_empty() {
        return output_search_results(&query, filter, &[], 0, mode);
    }

    let index = match ctx.index(true) {
        Ok(index) => index,
        Err(code) => return code,
    };

    let matches = search_all(&query, index, filter);
    let total_matches = matches.len();
    let results: Vec<_> = matches.into_iter().take(limit).collect();

    output_search_results(&query, filter, &results, total_matches, mode)
}
