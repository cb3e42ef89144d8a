use gitlab_hooks::{PipelineEvent, render_pipeline};
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::gitlab_hook::{deliver, gitlab_hook_route::ACK},
};

/// Announces pipelines that finished with `success` or `failed`.
pub async fn handle_pipeline(state: &AppState, key: &str, body: &[u8]) -> AppResult<&'static str> {
    let ev = PipelineEvent::from_slice(body)?;
    info!(
        project = %ev.project.name,
        id = ev.object_attributes.id,
        status = %ev.object_attributes.status,
        git_ref = %ev.object_attributes.git_ref,
        "pipeline hook received"
    );

    if let Some(content) = render_pipeline(&ev) {
        deliver(state, key, &content).await?;
    }

    Ok(ACK)
}
