//! File routes — multipart upload into the watched directory, plus the
//! directory overview the UI renders.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{info, warn};

use docdrop_core::IngestSource;
use docdrop_ingest::{discover_files, ingest_file, IngestError};

use crate::state::AppState;

/// Request body cap for the upload route, replacing the 2 MiB axum default.
const MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/files", get(list_files))
        .route(
            "/files/upload",
            post(upload_files).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
}

/// GET /api/files — eligible files currently in the watched directory.
async fn list_files(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let input_dir = &state.config.data_paths.input;

    let found = match discover_files(input_dir, &state.filter) {
        Ok(found) => found,
        Err(IngestError::DirectoryNotFound(_)) => {
            // Nothing has been uploaded yet; the directory appears with the
            // first upload.
            return (
                StatusCode::OK,
                Json(serde_json::json!({
                    "files": [],
                    "total": 0,
                    "warning": "input directory does not exist yet",
                })),
            );
        }
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": err.to_string() })),
            );
        }
    };

    let files: Vec<serde_json::Value> = found
        .iter()
        .map(|path| {
            let meta = std::fs::metadata(path).ok();
            serde_json::json!({
                "name": path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
                "extension": path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.to_lowercase())
                    .unwrap_or_default(),
                "size_bytes": meta.as_ref().map(|m| m.len()).unwrap_or(0),
                "path": path.to_string_lossy(),
                "modified": meta
                    .as_ref()
                    .and_then(|m| m.modified().ok())
                    .map(|m| chrono::DateTime::<chrono::Utc>::from(m).to_rfc3339())
                    .unwrap_or_default(),
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "files": files,
            "total": files.len(),
        })),
    )
}

/// POST /api/files/upload — accept multipart uploads, write each into the
/// watched directory, and run it through the shared normalizer.
async fn upload_files(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut uploaded = Vec::new();
    let mut errors = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        // Sanitize filename
        let safe_filename = sanitize_filename(&filename);

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                errors.push(serde_json::json!({
                    "name": safe_filename,
                    "error": format!("Read failed: {}", err),
                }));
                continue;
            }
        };

        if let Err(err) = state.config.data_paths.ensure_input_dir() {
            errors.push(serde_json::json!({
                "name": safe_filename,
                "error": format!("Input directory unavailable: {}", err),
            }));
            continue;
        }

        // Same name replaces the previous file, last writer wins.
        let destination = state.config.data_paths.input.join(&safe_filename);
        if destination.exists() {
            warn!("Upload replaces existing file {}", destination.display());
        }
        if let Err(err) = std::fs::write(&destination, &bytes) {
            errors.push(serde_json::json!({
                "name": safe_filename,
                "error": format!("Write failed: {}", err),
            }));
            continue;
        }

        match ingest_file(&destination, IngestSource::Ui) {
            Ok(record) => {
                info!("Uploaded and ingested {} as {}", record.name, record.file_id);
                uploaded.push(serde_json::json!({
                    "file_id": record.file_id,
                    "name": record.name,
                    "extension": record.extension,
                    "source": record.source.as_str(),
                    "path": record.path.to_string_lossy(),
                    "size_bytes": record.size_bytes,
                }));
            }
            Err(err) => {
                warn!("Failed to ingest upload {}: {}", safe_filename, err);
                errors.push(serde_json::json!({
                    "name": safe_filename,
                    "error": err.to_string(),
                }));
            }
        }
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "uploaded": uploaded.len(),
            "errors": errors.len(),
            "files": uploaded,
            "errorDetails": errors,
        })),
    )
}

/// Sanitize a filename to prevent path traversal.
fn sanitize_filename(name: &str) -> String {
    // Remove directory components
    let name = name.replace('/', "").replace('\\', "").replace("..", "");

    std::path::Path::new(&name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string()
}
