//! docdrop server binary — serves the upload API over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use docdrop_server::routes;
use docdrop_server::state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("DOCDROP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = resolve_data_dir();
    let config = docdrop_core::DocdropConfig::from_env(&data_dir);

    // Run-scoped logging: fresh log directory per server start
    let run_log = docdrop_core::init_run_logger("upload_ui", &config.data_paths.logs, false)?;

    info!("Data directory: {}", data_dir.display());
    info!(
        "Allowed extensions: {}",
        config.allowed_extensions.join(", ")
    );

    let port = config.port;
    let state = Arc::new(AppState::new(config, run_log.path().to_path_buf()));

    // Build router
    let app = routes::build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("docdrop upload server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
