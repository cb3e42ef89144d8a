use gitlab_hooks::{MergeRequestEvent, render_merge_request};
use tracing::info;

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::gitlab_hook::{deliver, gitlab_hook_route::ACK},
};

/// Announces opened and merged merge requests.
///
/// A malformed body fails before anything is sent. A failed delivery is
/// returned to GitLab as an error instead of the `OK` acknowledgment.
pub async fn handle_merge_request(
    state: &AppState,
    key: &str,
    body: &[u8],
) -> AppResult<&'static str> {
    let ev = MergeRequestEvent::from_slice(body)?;
    info!(
        project = %ev.project.name,
        iid = ev.object_attributes.iid,
        action = %ev.object_attributes.action,
        "merge request hook received"
    );

    if let Some(content) = render_merge_request(&ev) {
        deliver(state, key, &content).await?;
    }

    Ok(ACK)
}
