//! Extension allow-list deciding which files qualify for ingestion.

use std::collections::BTreeSet;
use std::path::Path;

use docdrop_core::config::default_extensions;

/// Set of file extensions eligible for ingestion.
///
/// Matching is case-insensitive on the final extension only, so
/// `archive.tar.gz` is judged by `gz`. Files without an extension never
/// match, whatever the configured set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    allowed: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Build a filter from any list of extensions.
    ///
    /// Entries are lowercased and leading dots stripped, so `".PDF"` and
    /// `"pdf"` configure the same entry. Empty entries are ignored.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { allowed }
    }

    /// Whether `file_name` carries an allowed extension.
    pub fn matches(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.allowed.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }

    /// The configured extensions, lowercase, in sorted order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(|ext| ext.as_str())
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(default_extensions())
    }
}
