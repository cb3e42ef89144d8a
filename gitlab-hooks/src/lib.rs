//! GitLab webhook payloads and their WeCom markdown renderings.
//!
//! The crate is split in three small layers:
//!   * [`events`]: serde model of the GitLab `Merge Request Hook` and
//!     `Pipeline Hook` bodies (only the fields we render);
//!   * [`status`]: the fixed pipeline status → display table;
//!   * [`format`]: pure functions turning an event into an optional
//!     markdown message.
//!
//! Nothing here performs I/O. Delivery lives in `wecom-notifier`, routing in
//! the `api` crate.

pub mod errors;
pub mod events;
pub mod format;
pub mod status;

pub use errors::{HookError, HookResult};
pub use events::{HookKind, MergeRequestEvent, PipelineEvent};
pub use format::{render_merge_request, render_pipeline};
pub use status::PipelineStatus;
