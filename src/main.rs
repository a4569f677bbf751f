//! surfsup - read-only climate reporting API
//!
//! This is the main entry point for the surfsup server.

use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use surfsup::{
    init_tracing, log_dataset_stats, log_error, router, AppState, ClimateStore, Config, Result,
    SurfsUpError,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration before tracing so the configured level applies
    let config = Config::load()?;
    init_tracing(&config.log_level);

    info!("Starting surfsup v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        log_error(&e, "validating configuration");
        e
    })?;

    let database_path = config.data.database_path.clone();
    info!("Opening climate database: {:?}", database_path);

    let store = ClimateStore::open(&database_path, config.data.max_connections)
        .await
        .map_err(|e| {
            log_error(&e, "opening database");
            e
        })?;

    store.validate_schema().await.map_err(|e| {
        log_error(&e, "validating database schema");
        e
    })?;

    let summary = store.dataset_summary().await?;
    log_dataset_stats(&database_path.display().to_string(), &summary);

    // Create the server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| SurfsUpError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let state = AppState::new_shared(config, store.clone());
    let app = router(state);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| SurfsUpError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SurfsUpError::Server {
            message: format!("Server error: {}", e),
        })?;

    store.close().await;
    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
