//! docdrop upload server — HTTP surface for interactive document ingestion.
//!
//! Uploads land in the same watched directory the batch runner scans, and go
//! through the same normalizer, so a file arriving over HTTP produces the
//! same kind of record as one dropped into the directory by hand.

pub mod routes;
pub mod state;

pub use state::AppState;
