//! Serde model of the GitLab webhook bodies we react to.
//!
//! See <https://docs.gitlab.com/ee/user/project/integrations/webhook_events.html>.
//! Every field falls back to its zero value when GitLab omits it or sends
//! `null`, so partial payloads still decode; only malformed JSON is rejected.
//! An empty body decodes as an all-default event.

pub mod merge_request;
pub mod pipeline;

pub use merge_request::{MergeRequestAttributes, MergeRequestEvent};
pub use pipeline::{Commit, CommitAuthor, PipelineAttributes, PipelineEvent};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::errors::{HookError, HookResult};

/// Value of the `X-Gitlab-Event` header for the hooks we handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    MergeRequest,
    Pipeline,
}

impl HookKind {
    /// Maps a raw `X-Gitlab-Event` header value; `None` for any other hook.
    pub fn from_header(value: &str) -> Option<Self> {
        match value {
            "Merge Request Hook" => Some(Self::MergeRequest),
            "Pipeline Hook" => Some(Self::Pipeline),
            _ => None,
        }
    }

    /// The header value GitLab sends for this hook.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MergeRequest => "Merge Request Hook",
            Self::Pipeline => "Pipeline Hook",
        }
    }
}

/// A GitLab user as embedded in hook payloads (`user`, `assignees[]`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub username: String,
}

impl User {
    /// `Name(username)`, the form used in every notification line.
    pub fn display(&self) -> String {
        format!("{}({})", self.name, self.username)
    }
}

/// Project block shared by all hook payloads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    /// `group/project`.
    #[serde(rename = "path_with_namespace", deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "web_url", deserialize_with = "null_default")]
    pub url: String,
}

/// Reads `null` as the field's zero value.
pub(crate) fn null_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

pub(crate) fn decode<T: DeserializeOwned + Default>(kind: HookKind, body: &[u8]) -> HookResult<T> {
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|source| HookError::Decode {
        event: kind.as_str(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_mapping() {
        assert_eq!(
            HookKind::from_header("Merge Request Hook"),
            Some(HookKind::MergeRequest)
        );
        assert_eq!(
            HookKind::from_header("Pipeline Hook"),
            Some(HookKind::Pipeline)
        );
        assert_eq!(HookKind::from_header("Push Hook"), None);
        assert_eq!(HookKind::from_header("pipeline hook"), None);
        assert_eq!(HookKind::from_header(""), None);
    }

    #[test]
    fn user_display() {
        let u = User {
            name: "张三".into(),
            username: "zhangsan".into(),
        };
        assert_eq!(u.display(), "张三(zhangsan)");
    }

    #[test]
    fn null_fields_read_as_zero_values() {
        let p: Project =
            serde_json::from_str(r#"{"id":null,"path_with_namespace":null,"web_url":null}"#)
                .unwrap();
        assert_eq!((p.id, p.name.as_str(), p.url.as_str()), (0, "", ""));

        let u: User = serde_json::from_str(r#"{"name":"A","username":null}"#).unwrap();
        assert_eq!(u.display(), "A()");
    }
}
