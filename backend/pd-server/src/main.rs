use pd_server::{AppState, ServerError, build_router, logger};
use pd_store::RequestStore;

use std::error::Error;
use std::path::PathBuf;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = pd_config::Config::load()?;
    config.validate()?;

    // Ensure the log directory exists before the logger opens the file
    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pd-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = if config.store.seed_sample_data {
        RequestStore::new(pd_core::sample_data::seed_requests(), config.store.id_offset)
    } else {
        warn!("Starting with an empty request store");
        RequestStore::new(Vec::new(), config.store.id_offset)
    };
    info!("Request store ready with {} requests", store.len().await);

    let mut app_state = AppState::new(store, config.auth.clone());

    if let Some(ref dir) = config.server.static_dir {
        let static_dir = PathBuf::from(dir);
        if !static_dir.is_dir() {
            return Err(ServerError::StaticDir {
                path: static_dir.display().to_string(),
            }
            .into());
        }
        info!("Serving static files from {}", static_dir.display());
        app_state = app_state.with_static_dir(static_dir);
    }

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

/// Resolve on Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
