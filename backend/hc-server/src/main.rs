use hc_server::{AppState, build_router, logger};
use hc_session::{FileStorage, SessionSettings, SessionStore};

use std::error::Error;
use std::sync::Arc;

use axum::{ServiceExt, extract::Request};
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = hc_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting hc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Restore whoever was signed in last time
    let session_dir = config.session_dir()?;
    info!("Session storage: {}", session_dir.display());
    let session = SessionStore::open(
        Arc::new(FileStorage::new(session_dir)),
        SessionSettings::from_config(&config),
    )?;

    let app_state = AppState::seeded(Arc::new(session), config.latency.clone());
    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {e}"),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
