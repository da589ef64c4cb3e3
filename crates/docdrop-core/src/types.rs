//! Core types shared by the batch runner and the upload server.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a record identifier: `F-` followed by 8 hex characters.
///
/// Identifiers are random per ingestion attempt, never derived from file
/// content, so ingesting the same file twice yields two distinct ids.
pub fn new_file_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("F-{}", &hex[..8])
}

/// Which entry point produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestSource {
    /// Batch run over the watched directory.
    Cli,
    /// Interactive upload through the web UI.
    Ui,
}

impl IngestSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngestSource::Cli => "cli",
            IngestSource::Ui => "ui",
        }
    }
}

impl std::fmt::Display for IngestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalized metadata plus raw payload for one ingested file.
///
/// The payload is held in memory for the lifetime of the record and skipped
/// during serialization, so JSON consumers only ever see metadata.
#[derive(Debug, Clone, Serialize)]
pub struct IngestionRecord {
    pub file_id: String,
    /// Original filename without any directory components.
    pub name: String,
    /// Lowercase extension without the leading dot; empty if the file has none.
    pub extension: String,
    pub source: IngestSource,
    /// Where the file lived on disk at ingestion time.
    pub path: PathBuf,
    pub size_bytes: u64,
    #[serde(skip_serializing)]
    pub content_bytes: Vec<u8>,
}
