//! Run-scoped logging.
//!
//! Every invocation, batch run or server start, gets its own log directory
//! and file under the logs root:
//!
//! ```text
//! logs/<YYYYMMDD>/<app>_<YYYYMMDD_HHMMSS>/<app>_<YYYYMMDD_HHMMSS>.log
//! ```
//!
//! Output is mirrored to stdout so interactive runs stay observable.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Handle for an active run log.
///
/// Dropping it flushes and stops the background file writer, so callers keep
/// it alive for the whole process.
pub struct RunLog {
    path: PathBuf,
    _guard: WorkerGuard,
}

impl RunLog {
    /// Path of the log file receiving this run's output.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Install the global subscriber for this run and return the log handle.
///
/// Creates the run directory, opens a fresh log file inside it, and layers a
/// stdout writer next to the file writer. The filter honors `RUST_LOG` and
/// otherwise defaults to `info`, or `debug` when `verbose` is set. Call once
/// at process start.
pub fn init_run_logger(app_name: &str, logs_root: &Path, verbose: bool) -> io::Result<RunLog> {
    let (run_dir, log_path) = run_log_paths(logs_root, app_name, Local::now());
    std::fs::create_dir_all(&run_dir)?;

    let file = File::create(&log_path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    tracing::info!("Logging initialised, run log file: {}", log_path.display());

    Ok(RunLog {
        path: log_path,
        _guard: guard,
    })
}

/// Build the run directory and log file paths for an invocation at `now`.
fn run_log_paths(logs_root: &Path, app_name: &str, now: DateTime<Local>) -> (PathBuf, PathBuf) {
    let day = now.format("%Y%m%d").to_string();
    let run_name = format!("{}_{}", app_name, now.format("%Y%m%d_%H%M%S"));

    let run_dir = logs_root.join(day).join(&run_name);
    let log_path = run_dir.join(format!("{}.log", run_name));
    (run_dir, log_path)
}
