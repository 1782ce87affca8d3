//! 运行配置
//!
//! 来源优先级：命令行参数 > 环境变量（由 clap `env` 处理）。
//! Webhook 地址是唯一必需项，空字符串等同于未配置。

use crate::error::{NotifyError, Result};
use crate::notification::webhook::{WebhookConfig, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    pub webhook_url: Option<String>,
    pub timeout_secs: u64,
    pub use_system_proxy: bool,
    pub dry_run: bool,
    /// 是否附带 Event / Runner / Job 字段
    pub include_fields: bool,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            use_system_proxy: true,
            dry_run: false,
            include_fields: true,
        }
    }
}

impl NotifyConfig {
    /// 校验并返回 Webhook 地址
    pub fn require_webhook_url(&self) -> Result<&str> {
        match self.webhook_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(NotifyError::MissingWebhookUrl),
        }
    }

    /// 转换为 Webhook 客户端配置
    pub fn webhook_config(&self) -> Result<WebhookConfig> {
        let url = self.require_webhook_url()?;
        Ok(WebhookConfig::new(url)
            .with_timeout_secs(self.timeout_secs)
            .with_system_proxy(self.use_system_proxy))
    }
}
