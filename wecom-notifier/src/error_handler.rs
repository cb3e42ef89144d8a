//! Unified error handling for `wecom-notifier`.
//!
//! A single top-level error type [`NotifyError`] covers delivery failures;
//! startup problems are grouped in [`ConfigError`]. Small helpers for reading
//! environment variables live here as well and return [`NotifyResult`].
//!
//! All messages carry the `[WeCom Notifier]` prefix to simplify attribution in logs.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type NotifyResult<T> = std::result::Result<T, NotifyError>;

/// Top-level error for the `wecom-notifier` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The routing key was empty; nothing was sent.
    #[error("[WeCom Notifier] routing key must not be empty")]
    EmptyKey,

    /// Underlying HTTP transport error (DNS, connect, reset, TLS).
    #[error("[WeCom Notifier] transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The robot did not answer within the configured timeout.
    #[error("[WeCom Notifier] request timed out after {0:?}")]
    Timeout(Duration),

    /// Robot endpoint returned a non-successful HTTP status.
    #[error("[WeCom Notifier] HTTP {status}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        /// Short, trimmed snippet of the response body.
        snippet: String,
    },

    /// Robot accepted the request but refused the message (`errcode != 0`).
    #[error("[WeCom Notifier] message rejected: errcode={errcode} errmsg={errmsg}")]
    Rejected { errcode: i64, errmsg: String },

    /// Robot reply could not be decoded.
    #[error("[WeCom Notifier] decode error: {0}")]
    Decode(String),
}

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[WeCom Notifier] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (ports, timeouts).
    #[error("[WeCom Notifier] invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },

    /// Value had the wrong format (e.g. invalid URL).
    #[error("[WeCom Notifier] invalid format in {var}: {reason}")]
    InvalidFormat {
        var: &'static str,
        reason: &'static str,
    },
}

/* ------------------------------------------------------------------------- */
/* Env helpers                                                               */
/* ------------------------------------------------------------------------- */

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// [`ConfigError::MissingVar`] if the variable is absent or blank.
pub fn must_env(name: &'static str) -> NotifyResult<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Returns the variable when set and non-blank, `default` otherwise.
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// [`ConfigError::InvalidNumber`] if the variable is set but not a `u32`.
pub fn env_opt_u32(name: &'static str) -> NotifyResult<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<u32>().map(Some).map_err(|_| {
            NotifyError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/// Reads a boolean flag: `1`, `true`, `yes`, `on` (any case) are true.
pub fn env_bool(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// [`ConfigError::InvalidFormat`] when the scheme is missing.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> NotifyResult<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}
