//! Thin client for WeCom group robots.
//!
//! - `POST {webhook_url}?key={key}` with `{"msgtype":"markdown","markdown":{"content":...}}`
//!
//! The robot answers `200 {"errcode":0,"errmsg":"ok"}` on success. A non-zero
//! `errcode` (bad key, content too long, rate limited) comes back with HTTP 200
//! as well, so both the status and the body are checked.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::NotifierConfig;
use crate::error_handler::{NotifyError, NotifyResult};
use crate::mask_key;

const SNIPPET_LEN: usize = 200;

/// WeCom robot HTTP client.
#[derive(Debug, Clone)]
pub struct WeComRobot {
    http: Client,
    webhook_url: String,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct MarkdownMessage<'a> {
    msgtype: &'static str,
    markdown: MarkdownBody<'a>,
}

#[derive(Debug, Serialize)]
struct MarkdownBody<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct RobotReply {
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

impl WeComRobot {
    /// Creates a robot client with a dedicated HTTP instance.
    ///
    /// # Errors
    /// Config validation errors, or [`NotifyError::Transport`] if the HTTP
    /// client cannot be built.
    pub fn new(cfg: &NotifierConfig) -> NotifyResult<Self> {
        cfg.validate()?;
        let http = Client::builder()
            .user_agent(concat!("wecom-notifier/", env!("CARGO_PKG_VERSION")))
            .timeout(cfg.timeout())
            .build()
            .map_err(NotifyError::Transport)?;

        debug!(webhook_url = %cfg.webhook_url, "creating WeComRobot");
        Ok(Self {
            http,
            webhook_url: cfg.webhook_url.trim().trim_end_matches('/').to_string(),
            timeout: cfg.timeout(),
        })
    }

    /// Posts a markdown message to the robot identified by `key`.
    #[instrument(name = "wecom_send", skip(self, key, content), fields(key = %mask_key(key), len = content.len()))]
    pub async fn send(&self, key: &str, content: &str) -> NotifyResult<()> {
        if key.trim().is_empty() {
            return Err(NotifyError::EmptyKey);
        }

        let body = MarkdownMessage {
            msgtype: "markdown",
            markdown: MarkdownBody { content },
        };

        let resp = self
            .http
            .post(self.endpoint(key))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| self.transport_error(e))?;
        debug!(%status, "robot replied");

        interpret_reply(status, &text)
    }

    fn endpoint(&self, key: &str) -> String {
        format!("{}?key={}", self.webhook_url, urlencoding::encode(key.trim()))
    }

    fn transport_error(&self, e: reqwest::Error) -> NotifyError {
        if e.is_timeout() {
            NotifyError::Timeout(self.timeout)
        } else {
            NotifyError::Transport(e)
        }
    }
}

fn interpret_reply(status: StatusCode, body: &str) -> NotifyResult<()> {
    if !status.is_success() {
        return Err(NotifyError::HttpStatus {
            status,
            snippet: snippet(body),
        });
    }

    let reply: RobotReply = serde_json::from_str(body)
        .map_err(|e| NotifyError::Decode(format!("{e}; body: {}", snippet(body))))?;

    if reply.errcode != 0 {
        return Err(NotifyError::Rejected {
            errcode: reply.errcode,
            errmsg: reply.errmsg,
        });
    }
    Ok(())
}

fn snippet(body: &str) -> String {
    body.trim().chars().take(SNIPPET_LEN).collect()
}
