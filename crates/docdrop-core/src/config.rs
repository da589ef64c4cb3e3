//! Configuration and data directory layout.

use std::path::{Path, PathBuf};

/// Extensions eligible for ingestion when no override is configured.
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 5] = ["pdf", "txt", "docx", "csv", "xlsx"];

/// Paths to the docdrop data directories.
#[derive(Debug, Clone)]
pub struct DataPaths {
    /// Root data directory.
    pub root: PathBuf,
    /// Watched directory scanned by batch runs and targeted by uploads.
    pub input: PathBuf,
    /// Root under which run-scoped log directories are created.
    pub logs: PathBuf,
}

impl DataPaths {
    /// Resolve the directory layout under a root.
    ///
    /// Nothing is created here: a batch run over a root that has no input
    /// directory yet must be able to observe and report that.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            input: root.join("input"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Create the watched input directory if it does not exist yet.
    pub fn ensure_input_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.input)
    }
}

/// Top-level docdrop configuration.
#[derive(Debug, Clone)]
pub struct DocdropConfig {
    /// HTTP port for the upload server.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Extensions eligible for ingestion, lowercase, without leading dots.
    pub allowed_extensions: Vec<String>,
}

impl DocdropConfig {
    /// Build configuration for a data directory, honoring `PORT` and
    /// `DOCDROP_ALLOWED_EXTENSIONS` from the environment.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8420);

        let allowed_extensions = std::env::var("DOCDROP_ALLOWED_EXTENSIONS")
            .ok()
            .map(|raw| parse_extension_list(&raw))
            .filter(|list| !list.is_empty())
            .unwrap_or_else(default_extensions);

        Self {
            port,
            data_paths: DataPaths::new(data_dir),
            allowed_extensions,
        }
    }
}

/// The default allow-list as an owned vector.
pub fn default_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// Split a comma-separated extension list, normalizing each entry to
/// lowercase without leading dots and dropping entries left empty.
pub fn parse_extension_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}
