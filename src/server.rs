//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The demo user directory
/// - An empty session store
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// All state lives in memory and is lost when the process exits.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let addr: SocketAddr = config.listen_addr.parse()?;

    let state = AppState::with_demo_users(config)?;
    let accounts = state.auth_service.user_status().await?.len();
    tracing::info!(accounts, "User directory seeded");

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
