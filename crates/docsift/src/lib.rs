//! docsift: search documentation topics and code examples from the terminal.
//!
//! docsift reads `.docsift.toml` files to find topic markdown and example groups, builds an
//! in-memory index for each invocation, and answers substring queries ranked by a fixed
//! weighting of title, description, category, content and keyword hits.

#![warn(missing_docs)]

pub mod cli;
