//! Slack Incoming Webhook 客户端
//!
//! 单次 POST，不重试。非 2xx 响应视为失败，响应体作为错误原因
//! （Slack 返回 `invalid_payload`、`no_service` 这类纯文本）。

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::channel::NotificationChannel;
use super::payload::SlackMessage;
use crate::error::{NotifyError, Result};

/// 默认超时时间 (秒)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Webhook 客户端配置
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Webhook URL (如 https://hooks.slack.com/services/T.../B.../xxx)
    pub url: String,
    /// 超时时间 (秒)
    pub timeout_secs: u64,
    /// 是否使用 HTTP(S)_PROXY 环境变量中的代理
    pub use_system_proxy: bool,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            use_system_proxy: true,
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.use_system_proxy = enabled;
        self
    }
}

/// Slack Webhook 客户端
#[derive(Debug)]
pub struct WebhookClient {
    client: Client,
    config: WebhookConfig,
}

impl WebhookClient {
    /// 创建新的 Webhook 客户端
    pub fn new(config: WebhookConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(NotifyError::MissingWebhookUrl);
        }

        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| NotifyError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }
}

impl NotificationChannel for WebhookClient {
    fn name(&self) -> &str {
        "slack"
    }

    async fn send(&self, message: &SlackMessage) -> Result<()> {
        debug!(timeout_secs = self.config.timeout_secs, "Posting Slack webhook");

        let response = self
            .client
            .post(&self.config.url)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Http {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        info!(status = status.as_u16(), "Slack webhook accepted message");
        Ok(())
    }
}
