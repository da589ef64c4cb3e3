//! docdrop ingest — extension filtering, discovery, and file normalization.
//!
//! The pipeline is deliberately small: decide which files qualify
//! ([`ExtensionFilter`]), find them ([`discover_files`]), turn each one into
//! an [`IngestionRecord`](docdrop_core::IngestionRecord) ([`ingest_file`]),
//! and run the whole thing as one pass with per-file error isolation
//! ([`run_batch`]).

pub mod batch;
pub mod discover;
pub mod error;
pub mod filter;
pub mod record;

pub use batch::{ingest_all, run_batch, BatchFailure, BatchOutcome};
pub use discover::discover_files;
pub use error::{IngestError, IngestResult};
pub use filter::ExtensionFilter;
pub use record::ingest_file;
