//! HTTP surface: receives GitLab webhooks and forwards WeCom notifications.

pub mod core;
pub mod error_handler;
mod routes;

use std::sync::Arc;

use axum::{Router, routing::post};
use tokio::signal;
use tracing::{error, info};

use crate::{
    core::app_state::{AppConfig, AppState},
    error_handler::{AppError, AppResult},
    routes::gitlab_hook::gitlab_hook_route::gitlab_hook_route,
};

pub use crate::routes::gitlab_hook::gitlab_hook_route::GITLAB_EVENT_HEADER;

/// Loads configuration from the environment and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let cfg = AppConfig::from_env()?;
    let state = AppState::from_config(&cfg)?;
    let app = router(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&cfg.api_address)
        .await
        .map_err(AppError::Bind)?;
    info!(
        address = %cfg.api_address,
        dry_run = cfg.notifier.dry_run,
        "gitlab webhook listener started"
    );

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Builds the router; exposed so tests can drive it without a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/wechat/gitlab/{key}", post(gitlab_hook_route))
        .with_state(Arc::new(state))
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
