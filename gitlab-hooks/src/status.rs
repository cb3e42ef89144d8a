//! Pipeline status → display mapping.

/// How a terminal pipeline status is shown in WeCom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStatus {
    /// Localized suffix appended to the heading.
    pub text: &'static str,
    /// WeCom markdown font color (`info`, `comment` or `warning`).
    pub color: &'static str,
}

/// Only these statuses produce a notification.
const NOTIFIED_STATUSES: &[(&str, PipelineStatus)] = &[
    (
        "success",
        PipelineStatus {
            text: "成功🎉",
            color: "info",
        },
    ),
    (
        "failed",
        PipelineStatus {
            text: "失败🤔",
            color: "warning",
        },
    ),
];

impl PipelineStatus {
    /// Looks up a GitLab pipeline status (`success`, `failed`, `running`, ...).
    pub fn lookup(status: &str) -> Option<Self> {
        NOTIFIED_STATUSES
            .iter()
            .find(|(name, _)| *name == status)
            .map(|(_, display)| *display)
    }
}
