//! 错误类型
//!
//! 只有两类错误会上报：配置缺失和投递失败。
//! 上下文字段缺失、事件文件异常、未知状态都在各自模块里降级处理，不会走到这里。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// 未配置 Webhook 地址，在构建和发送之前即失败
    #[error("Missing SLACK_WEBHOOK_URL environment variable")]
    MissingWebhookUrl,

    /// HTTP 客户端创建失败
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// 请求未能送达（连接失败、超时等）
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Webhook 返回非 2xx
    #[error("Slack returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotifyError>;
