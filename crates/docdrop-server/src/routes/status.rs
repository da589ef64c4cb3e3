//! Status route — effective configuration and run-log location.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use docdrop_ingest::discover_files;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

/// GET /api/status — where this run logs to and what it would ingest.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let eligible_files = discover_files(&state.config.data_paths.input, &state.filter)
        .map(|found| found.len())
        .unwrap_or(0);

    Json(serde_json::json!({
        "port": state.config.port,
        "watched_dir": state.config.data_paths.input.to_string_lossy(),
        "run_log": state.run_log.to_string_lossy(),
        "allowed_extensions": state.filter.extensions().collect::<Vec<_>>(),
        "eligible_files": eligible_files,
    }))
}
