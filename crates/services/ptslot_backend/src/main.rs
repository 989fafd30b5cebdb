// File: services/ptslot_backend/src/main.rs
use ptslot_common::{config_error, init_from_config, log_error, log_result, Context, PtslotError};
use ptslot_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

mod app;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        log_error(&err, "ptslot backend stopped");
        eprintln!("ptslot backend stopped: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), PtslotError> {
    let config = Arc::new(load_config().map_err(config_error)?);
    // keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_from_config(&config.logging);

    let app = log_result(
        app::build_app(config.clone()),
        "Application routes ready",
        "Failed to build application",
    )?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
    }
}
