//! Error types for the ingestion pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors raised while discovering or ingesting files.
///
/// A file whose extension is not on the allow-list is not an error, it is
/// filtered out during discovery and logged.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The watched directory does not exist.
    #[error("input directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// The configured input path exists but is not a directory.
    #[error("input path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A file or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
