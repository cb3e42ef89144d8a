//! `Pipeline Hook` payload.

use serde::Deserialize;

use super::{HookKind, Project, decode, null_default};
use crate::errors::HookResult;

/// Pipeline event as delivered by GitLab.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipelineEvent {
    #[serde(deserialize_with = "null_default")]
    pub project: Project,
    #[serde(deserialize_with = "null_default")]
    pub object_attributes: PipelineAttributes,
    #[serde(deserialize_with = "null_default")]
    pub commit: Commit,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipelineAttributes {
    /// Instance-wide pipeline id, used in `{project}/pipelines/{id}`.
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    /// Branch or tag name.
    #[serde(rename = "ref", deserialize_with = "null_default")]
    pub git_ref: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Commit {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    #[serde(deserialize_with = "null_default")]
    pub author: CommitAuthor,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommitAuthor {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
}

impl PipelineEvent {
    /// Decodes a raw request body.
    pub fn from_slice(body: &[u8]) -> HookResult<Self> {
        decode(HookKind::Pipeline, body)
    }

    /// Link to the pipeline detail page.
    pub fn pipeline_url(&self) -> String {
        format!("{}/pipelines/{}", self.project.url, self.object_attributes.id)
    }
}
