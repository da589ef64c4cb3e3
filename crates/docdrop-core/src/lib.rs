//! docdrop core — record model, configuration, run-scoped logging.

pub mod config;
pub mod logging;
pub mod types;

pub use config::{DataPaths, DocdropConfig, DEFAULT_ALLOWED_EXTENSIONS};
pub use logging::{init_run_logger, RunLog};
pub use types::{new_file_id, IngestSource, IngestionRecord};
