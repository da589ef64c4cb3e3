//! Shared application state.

use std::path::PathBuf;

use docdrop_core::DocdropConfig;
use docdrop_ingest::ExtensionFilter;

/// State shared by all route handlers.
pub struct AppState {
    pub config: DocdropConfig,
    /// Filter built once from the configured allow-list.
    pub filter: ExtensionFilter,
    /// Log file of the active run, surfaced through `/api/status`.
    pub run_log: PathBuf,
}

impl AppState {
    pub fn new(config: DocdropConfig, run_log: PathBuf) -> Self {
        let filter = ExtensionFilter::new(&config.allowed_extensions);
        Self {
            config,
            filter,
            run_log,
        }
    }
}
