//! climate-api - A read-only JSON API over a historical station climate dataset
//!
//! This is the main entry point for the server.

use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use climate_api::handlers::heartbeat::mark_started;
use climate_api::{
    create_router, init_tracing, log_dataset_stats, log_error, AppState, ClimateError, Config,
    Dataset, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, database_path) = Config::load()?;

    init_tracing(&config.log_level);
    mark_started();

    info!("Starting climate-api v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        log_error(&e, "configuration");
        e
    })?;

    info!("Opening dataset: {:?}", database_path);

    let dataset = Dataset::open(&database_path, config.database.max_connections)
        .await
        .map_err(|e| {
            log_error(&e, "dataset_open");
            e
        })?;

    dataset.verify_schema().await.map_err(|e| {
        error!("Dataset does not match the expected schema: {}", e);
        e
    })?;

    let summary = dataset.summary().await?;
    log_dataset_stats(&database_path.to_string_lossy(), &summary);

    let state = AppState::new_shared(config.clone(), dataset.clone());
    let app = create_router(state);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| ClimateError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ClimateError::Server {
            message: format!("Server error: {}", e),
        })?;

    dataset.close().await;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
