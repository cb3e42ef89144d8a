use tracing::info;

use crate::error_handler::NotifyResult;
use crate::mask_key;

/// Logs notifications instead of delivering them (`NOTIFY_DRY_RUN=1`).
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunNotifier;

impl DryRunNotifier {
    pub async fn send(&self, key: &str, content: &str) -> NotifyResult<()> {
        info!(key = %mask_key(key), %content, "dry-run: notification not sent");
        Ok(())
    }
}
