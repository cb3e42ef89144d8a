//! Error type for payload decoding.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type HookResult<T> = Result<T, HookError>;

/// Root error type for the gitlab-hooks crate.
#[derive(Debug, Error)]
pub enum HookError {
    /// The request body is not valid JSON or a field has the wrong JSON type.
    #[error("invalid {event} payload: {source}")]
    Decode {
        /// Event kind the body was decoded as (e.g. `Merge Request Hook`).
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
