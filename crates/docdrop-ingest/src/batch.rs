//! Batch orchestration: one discovery pass with per-file error isolation.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use docdrop_core::{IngestSource, IngestionRecord};

use crate::discover::discover_files;
use crate::error::{IngestError, IngestResult};
use crate::filter::ExtensionFilter;
use crate::record::ingest_file;

/// One file that failed during a batch pass.
#[derive(Debug)]
pub struct BatchFailure {
    /// Filename the failure applies to, without directory components.
    pub name: String,
    pub error: IngestError,
}

/// Partitioned result of a batch pass.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub succeeded: Vec<IngestionRecord>,
    pub failed: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// True when every discovered file produced a record.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of files the pass attempted.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Run one full ingestion pass over `dir`.
///
/// Discovery errors abort the pass. Once discovery has succeeded, a file
/// that fails to read is captured in the outcome and the pass continues with
/// the remaining files in order.
pub fn run_batch(
    dir: &Path,
    filter: &ExtensionFilter,
    source: IngestSource,
) -> IngestResult<BatchOutcome> {
    info!("Starting ingestion run over {}", dir.display());

    let files = discover_files(dir, filter)?;
    if files.is_empty() {
        warn!("No eligible files found in {}", dir.display());
        return Ok(BatchOutcome::default());
    }

    let outcome = ingest_all(&files, source);
    info!(
        "Ingestion run complete: {} succeeded, {} failed",
        outcome.succeeded.len(),
        outcome.failed.len()
    );
    Ok(outcome)
}

/// Ingest every path in order, isolating per-file failures.
pub fn ingest_all(paths: &[PathBuf], source: IngestSource) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for path in paths {
        match ingest_file(path, source) {
            Ok(record) => outcome.succeeded.push(record),
            Err(err) => {
                error!("Failed to ingest {}: {}", path.display(), err);
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "unknown".to_string());
                outcome.failed.push(BatchFailure { name, error: err });
            }
        }
    }

    outcome
}
