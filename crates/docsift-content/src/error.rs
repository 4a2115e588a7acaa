//! Error types for content loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading topic content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Failed to read a content file.
    #[error("failed to read content file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// No content exists for the slug.
    #[error("no content for topic '{slug}'")]
    NotFound {
        /// The slug that was looked up.
        slug: String,
    },
}
