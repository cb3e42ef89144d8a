use wecom_notifier::{Notifier, NotifierConfig, error_handler::must_env};

use crate::error_handler::{AppError, AppResult};

/// Process configuration read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address, e.g. "0.0.0.0:8080".
    pub api_address: String,
    /// Sender settings (robot endpoint, timeout, dry-run).
    pub notifier: NotifierConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            api_address: must_env("API_ADDRESS").map_err(AppError::Startup)?,
            notifier: NotifierConfig::from_env().map_err(AppError::Startup)?,
        })
    }
}

/// Shared state for all HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Delivers rendered notifications to the robot named by the routing key.
    pub notifier: Notifier,
}

impl AppState {
    pub fn new(notifier: Notifier) -> Self {
        Self { notifier }
    }

    /// Build handler state from the loaded configuration.
    pub fn from_config(cfg: &AppConfig) -> AppResult<Self> {
        let notifier = Notifier::from_config(&cfg.notifier).map_err(AppError::Startup)?;
        Ok(Self::new(notifier))
    }
}
