//! Error types for the docsift-index crate.

use std::{io, path::PathBuf};

use docsift_config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building an index from configuration.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Configuration could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to read an example file.
    #[error("failed to read example file {path}: {source}")]
    ReadExample {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
