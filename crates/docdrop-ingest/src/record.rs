//! Normalization of a single file into an ingestion record.

use std::path::Path;

use tracing::info;

use docdrop_core::{new_file_id, IngestSource, IngestionRecord};

use crate::error::{IngestError, IngestResult};

/// Read `path` in full and build its ingestion record.
///
/// The payload is always read whole, and `size_bytes` is taken from the
/// bytes actually read rather than from file metadata. Callers are expected
/// to have applied the extension filter already: an unsupported extension is
/// not rejected here, just recorded as-is.
pub fn ingest_file(path: &Path, source: IngestSource) -> IngestResult<IngestionRecord> {
    let content_bytes = std::fs::read(path).map_err(|err| IngestError::Read {
        path: path.to_path_buf(),
        source: err,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    let record = IngestionRecord {
        file_id: new_file_id(),
        name,
        extension,
        source,
        path: path.to_path_buf(),
        size_bytes: content_bytes.len() as u64,
        content_bytes,
    };

    info!(
        "Ingested {} ({} bytes) as {}",
        record.path.display(),
        record.size_bytes,
        record.file_id
    );
    Ok(record)
}
