//! Upload API integration tests.
//!
//! Drives the real router with in-memory requests and asserts the response
//! shapes the UI depends on, against a temporary data directory.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use docdrop_core::config::{default_extensions, DataPaths};
use docdrop_core::DocdropConfig;
use docdrop_server::routes::build_router;
use docdrop_server::AppState;

const BOUNDARY: &str = "----docdrop-test-boundary";

fn test_app(root: &Path) -> Router {
    let config = DocdropConfig {
        port: 8420,
        data_paths: DataPaths::new(root),
        allowed_extensions: default_extensions(),
    };
    let run_log = root.join("logs/test.log");
    build_router(Arc::new(AppState::new(config, run_log)))
}

fn multipart_body(parts: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (filename, content) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"files\"; filename=\"{}\"\r\n\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(parts: &[(&str, &[u8])]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/files/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_response(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn upload_writes_file_and_returns_record_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, json) =
        json_response(app, upload_request(&[("hello.txt", b"hello docdrop")])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["uploaded"], 1);
    assert_eq!(json["errors"], 0);

    let record = &json["files"][0];
    assert_eq!(record["name"], "hello.txt");
    assert_eq!(record["extension"], "txt");
    assert_eq!(record["source"], "ui");
    assert_eq!(record["size_bytes"], 13);
    let file_id = record["file_id"].as_str().unwrap();
    assert!(file_id.starts_with("F-"));
    assert_eq!(file_id.len(), 10);

    let saved = dir.path().join("input/hello.txt");
    assert_eq!(std::fs::read(&saved).unwrap(), b"hello docdrop");
}

#[tokio::test]
async fn upload_accepts_several_files_in_one_request() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let parts: &[(&str, &[u8])] = &[("a.csv", b"1,2"), ("b.pdf", b"%PDF-1.4")];
    let (status, json) = json_response(app, upload_request(parts)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["uploaded"], 2);
    let names: Vec<_> = json["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a.csv", "b.pdf"]);
    assert!(dir.path().join("input/a.csv").exists());
    assert!(dir.path().join("input/b.pdf").exists());
}

#[tokio::test]
async fn upload_with_same_name_replaces_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::write(input.join("report.txt"), b"old contents").unwrap();

    let app = test_app(dir.path());
    let (status, json) =
        json_response(app, upload_request(&[("report.txt", b"new contents")])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["uploaded"], 1);
    assert_eq!(json["errors"], 0);

    // Last writer wins, no renamed copy appears next to the original.
    assert_eq!(std::fs::read(input.join("report.txt")).unwrap(), b"new contents");
    let entries = std::fs::read_dir(&input).unwrap().count();
    assert_eq!(entries, 1);
}

#[tokio::test]
async fn upload_does_not_reapply_the_extension_filter() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, json) = json_response(app, upload_request(&[("tool.exe", b"MZ")])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["uploaded"], 1);
    assert_eq!(json["files"][0]["extension"], "exe");
}

#[tokio::test]
async fn upload_failures_are_reported_per_file() {
    let dir = tempfile::tempdir().unwrap();
    // Occupy the input path with a plain file so the directory cannot exist.
    std::fs::write(dir.path().join("input"), b"not a directory").unwrap();

    let app = test_app(dir.path());
    let parts: &[(&str, &[u8])] = &[("one.txt", b"1"), ("two.csv", b"2")];
    let (status, json) = json_response(app, upload_request(parts)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["uploaded"], 0);
    assert_eq!(json["errors"], 2);
    let details = json["errorDetails"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["name"], "one.txt");
    assert!(!details[0]["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn upload_accepts_multi_megabyte_documents() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let payload = vec![b'x'; 3 * 1024 * 1024];
    let (status, json) =
        json_response(app, upload_request(&[("scan.pdf", payload.as_slice())])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["uploaded"], 1);
    assert_eq!(json["errors"], 0);
    assert_eq!(json["files"][0]["size_bytes"], 3 * 1024 * 1024);

    let saved = dir.path().join("input/scan.pdf");
    assert_eq!(std::fs::metadata(&saved).unwrap().len(), 3 * 1024 * 1024);
}

#[tokio::test]
async fn listing_before_any_upload_warns_and_stays_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path());

    let (status, json) = json_response(app, get_request("/api/files")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 0);
    assert_eq!(json["files"].as_array().unwrap().len(), 0);
    assert!(json["warning"].as_str().is_some());
}

#[tokio::test]
async fn listing_filters_and_sorts_directory_contents() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::write(input.join("c.jpg"), b"jpeg").unwrap();
    std::fs::write(input.join("b.pdf"), b"%PDF").unwrap();
    std::fs::write(input.join("a.txt"), b"text").unwrap();

    let app = test_app(dir.path());
    let (status, json) = json_response(app, get_request("/api/files")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);
    let files = json["files"].as_array().unwrap();
    assert_eq!(files[0]["name"], "a.txt");
    assert_eq!(files[1]["name"], "b.pdf");
    assert_eq!(files[0]["size_bytes"], 4);
    assert_eq!(files[1]["extension"], "pdf");
    assert!(files[0]["modified"].as_str().is_some());
}

#[tokio::test]
async fn listing_reports_an_error_when_the_input_path_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    // Occupy the input path with a plain file so discovery cannot scan it.
    std::fs::write(dir.path().join("input"), b"not a directory").unwrap();

    let app = test_app(dir.path());
    let (status, json) = json_response(app, get_request("/api/files")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("not a directory"));
    assert!(json.get("files").is_none());
}

#[tokio::test]
async fn status_reports_configuration_and_run_log() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::write(input.join("a.txt"), b"x").unwrap();
    std::fs::write(input.join("b.csv"), b"y").unwrap();
    std::fs::write(input.join("skip.bin"), b"z").unwrap();

    let app = test_app(dir.path());
    let (status, json) = json_response(app, get_request("/api/status")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["port"], 8420);
    assert_eq!(json["eligible_files"], 2);
    assert!(json["watched_dir"].as_str().unwrap().ends_with("input"));
    assert!(json["run_log"].as_str().unwrap().ends_with("test.log"));
    let extensions = json["allowed_extensions"].as_array().unwrap();
    assert!(extensions.iter().any(|e| e == "pdf"));
    assert!(extensions.iter().any(|e| e == "xlsx"));
}
