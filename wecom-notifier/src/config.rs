//! Sender configuration loaded from environment variables.
//!
//! # Environment variables
//!
//! - `WECOM_WEBHOOK_URL`   = robot endpoint without the `key` query
//!                           (default: the public WeCom endpoint)
//! - `NOTIFY_TIMEOUT_SECS` = per-request timeout in seconds (default 10)
//! - `NOTIFY_DRY_RUN`      = log notifications instead of sending them

use std::time::Duration;

use crate::error_handler::{
    ConfigError, NotifyResult, env_bool, env_opt_u32, env_or, validate_http_endpoint,
};

/// Public WeCom group robot endpoint.
pub const DEFAULT_WEBHOOK_URL: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send";

const DEFAULT_TIMEOUT_SECS: u32 = 10;

/// Runtime configuration for the notifier.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Robot endpoint; the routing key is appended as `?key=...`.
    pub webhook_url: String,
    /// Per-request timeout.
    pub timeout_secs: u32,
    /// If true, notifications are logged and never sent.
    pub dry_run: bool,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            dry_run: false,
        }
    }
}

impl NotifierConfig {
    /// Builds and validates the config from the environment.
    ///
    /// # Errors
    /// [`ConfigError::InvalidNumber`] / [`ConfigError::InvalidFormat`] on bad values.
    pub fn from_env() -> NotifyResult<Self> {
        let cfg = Self {
            webhook_url: env_or("WECOM_WEBHOOK_URL", DEFAULT_WEBHOOK_URL),
            timeout_secs: env_opt_u32("NOTIFY_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS),
            dry_run: env_bool("NOTIFY_DRY_RUN", false),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validates config values.
    pub fn validate(&self) -> NotifyResult<()> {
        validate_http_endpoint("WECOM_WEBHOOK_URL", self.webhook_url.trim())?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidNumber {
                var: "NOTIFY_TIMEOUT_SECS",
                reason: "must be > 0",
            }
            .into());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_secs))
    }
}
