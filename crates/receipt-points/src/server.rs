//! Server setup

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use receipt_points_store::MemoryStore;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::config::{ConfigError, ServiceConfig};
use crate::http::create_router;
use crate::processor::ReceiptProcessor;

/// Build the router and bind address from configuration.
///
/// The schema is loaded and compiled here, once, and the store is created
/// empty.
pub fn create_app(config: &ServiceConfig) -> Result<(Router, SocketAddr), ConfigError> {
    let validator = config.validator()?;
    let processor = ReceiptProcessor::new(MemoryStore::new(), validator, config.processor.clone());
    let router = create_router(Arc::new(processor));

    Ok((router, config.socket_addr()?))
}

/// Run the server until Ctrl+C or SIGTERM.
pub async fn run_server(config: ServiceConfig) -> anyhow::Result<()> {
    let (router, addr) = create_app(&config)?;

    let listener = TcpListener::bind(addr).await?;
    info!("receipt points server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
