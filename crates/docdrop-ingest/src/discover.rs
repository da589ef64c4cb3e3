//! Directory scanning for ingestion candidates.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{IngestError, IngestResult};
use crate::filter::ExtensionFilter;

/// List the files in `dir` that qualify for ingestion.
///
/// Only direct children are considered, subdirectories are skipped rather
/// than recursed into. The result is sorted by path so repeated runs over an
/// unchanged directory see the same order.
pub fn discover_files(dir: &Path, filter: &ExtensionFilter) -> IngestResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(IngestError::DirectoryNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(IngestError::NotADirectory(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut matching = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping non-file entry: {}", path.display());
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if filter.matches(&name) {
            info!("Queued file for ingestion: {}", path.display());
            matching.push(path);
        } else {
            debug!("Skipping {} (extension not allowed)", path.display());
        }
    }

    matching.sort();
    info!("Found {} eligible file(s) in {}", matching.len(), dir.display());
    Ok(matching)
}
