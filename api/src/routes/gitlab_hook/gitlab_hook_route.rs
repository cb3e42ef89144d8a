use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
};
use gitlab_hooks::HookKind;
use tracing::{debug, instrument};
use wecom_notifier::mask_key;

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::gitlab_hook::{
        merge_request_hook::handle_merge_request, pipeline_hook::handle_pipeline,
    },
};

/// Header GitLab uses to name the hook kind.
pub const GITLAB_EVENT_HEADER: &str = "X-Gitlab-Event";

/// Acknowledgment body for every handled (or ignored) hook.
pub const ACK: &str = "OK";

/// POST /wechat/gitlab/{key}
///
/// Routes a GitLab webhook by its `X-Gitlab-Event` header. `{key}` names the
/// WeCom robot that receives the notification. Hooks other than merge request
/// and pipeline are acknowledged without reading the body.
#[instrument(
    name = "gitlab_hook_route",
    skip(state, key, headers, body),
    fields(key = %mask_key(&key))
)]
pub async fn gitlab_hook_route(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<&'static str> {
    if let Some(id) = headers.get("X-Request-Id").and_then(|h| h.to_str().ok()) {
        debug!(%id, "request id attached");
    }

    let event = headers
        .get(GITLAB_EVENT_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    match HookKind::from_header(event) {
        Some(HookKind::MergeRequest) => handle_merge_request(&state, &key, &body).await,
        Some(HookKind::Pipeline) => handle_pipeline(&state, &key, &body).await,
        None => {
            debug!(event, "hook kind not handled");
            Ok(ACK)
        }
    }
}
