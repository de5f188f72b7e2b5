//! HTTP server initialization and runtime setup.
//!
//! Handles store creation, service wiring and the Axum server lifecycle,
//! including graceful shutdown.

use crate::config::Config;
use crate::domain::repositories::UrlStore;
use crate::infrastructure::persistence::InMemoryUrlStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::future::Future;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// See [`run_until`].
pub async fn run(config: Config) -> Result<()> {
    run_until(config, shutdown_signal()).await
}

/// Runs the HTTP server until `shutdown` completes.
///
/// Initializes:
/// - In-memory URL store
/// - Link and stats services
/// - Axum HTTP server
///
/// In-flight requests are allowed to finish once `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run_until<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let store: Arc<dyn UrlStore> = Arc::new(InMemoryUrlStore::new());
    tracing::info!("Using in-memory URL store");

    let state = AppState::new(store, &config);
    let app = app_router(state, &config);

    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("Failed to bind {listen_addr}"))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        () = terminate => tracing::info!("Received SIGTERM signal"),
    }

    tracing::info!("Shutting down...");
}
