//! HTTP server initialization and runtime setup.
//!
//! Builds the registry, wires services into [`AppState`] and drives the Axum
//! server until a shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Builds application state for `config`.
///
/// The registry is seeded with the default links unless `seed_links` is off.
pub fn build_state(config: &Config) -> AppState {
    let repository = if config.seed_links {
        InMemoryLinkRepository::seeded()
    } else {
        InMemoryLinkRepository::new()
    };

    AppState::new(Arc::new(repository), config.not_found_mode)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be resolved or bound
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!(seeded = config.seed_links, "Link registry ready");

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    let addr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
