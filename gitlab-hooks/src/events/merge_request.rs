//! `Merge Request Hook` payload.

use serde::Deserialize;

use super::{HookKind, Project, User, decode, null_default};
use crate::errors::HookResult;

/// Merge request event as delivered by GitLab.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MergeRequestEvent {
    /// The user who triggered the event (opener or merger).
    #[serde(deserialize_with = "null_default")]
    pub user: User,
    #[serde(deserialize_with = "null_default")]
    pub project: Project,
    #[serde(deserialize_with = "null_default")]
    pub object_attributes: MergeRequestAttributes,
    /// Assigned reviewers, rendered in payload order.
    #[serde(rename = "assignees", deserialize_with = "null_default")]
    pub reviewers: Vec<User>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MergeRequestAttributes {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    /// `open`, `merge`, `update`, `close`, ...
    #[serde(deserialize_with = "null_default")]
    pub action: String,
    /// Project-scoped merge request number (`!iid`).
    #[serde(deserialize_with = "null_default")]
    pub iid: u64,
}

impl MergeRequestEvent {
    /// Decodes a raw request body.
    pub fn from_slice(body: &[u8]) -> HookResult<Self> {
        decode(HookKind::MergeRequest, body)
    }
}
