pub mod gitlab_hook_route;
pub mod merge_request_hook;
pub mod pipeline_hook;

use tracing::{error, info};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
};

/// Single delivery attempt; failures are logged and surfaced, never retried.
async fn deliver(state: &AppState, key: &str, content: &str) -> AppResult<()> {
    match state.notifier.send(key, content).await {
        Ok(()) => {
            info!("notification delivered");
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "notification delivery failed");
            Err(AppError::Delivery(err))
        }
    }
}
