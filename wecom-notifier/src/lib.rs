//! Sender facade without async-trait or dynamic trait objects.
//!
//! [`Notifier`] wraps the concrete senders behind enum dispatch and exposes a
//! single operation, [`Notifier::send`], taking a routing key and a markdown
//! body. Each call performs at most one HTTP request; there are no retries.

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::NotifierConfig;
pub use error_handler::{ConfigError, NotifyError, NotifyResult};
pub use services::{dry_run::DryRunNotifier, wecom_robot::WeComRobot};

use tracing::debug;

/// Concrete sender with enum dispatch.
#[derive(Debug, Clone)]
pub enum Notifier {
    WeCom(WeComRobot),
    DryRun(DryRunNotifier),
}

impl Notifier {
    /// Builds the sender selected by `cfg.dry_run`.
    pub fn from_config(cfg: &NotifierConfig) -> NotifyResult<Self> {
        debug!(dry_run = cfg.dry_run, webhook_url = %cfg.webhook_url, "initializing notifier");
        if cfg.dry_run {
            return Ok(Self::DryRun(DryRunNotifier));
        }
        Ok(Self::WeCom(WeComRobot::new(cfg)?))
    }

    /// Delivers `content` to the robot identified by `key`.
    pub async fn send(&self, key: &str, content: &str) -> NotifyResult<()> {
        match self {
            Self::WeCom(robot) => robot.send(key, content).await,
            Self::DryRun(dry) => dry.send(key, content).await,
        }
    }
}

/// Robot keys act as credentials; logs keep the first four characters of
/// keys longer than eight and nothing of shorter ones.
pub fn mask_key(key: &str) -> String {
    let head: String = key.chars().take(4).collect();
    if key.chars().count() > 8 {
        format!("{head}***")
    } else {
        "***".to_string()
    }
}
