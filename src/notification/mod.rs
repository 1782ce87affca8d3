//! 通知层 - 把 workflow 结果格式化为 Slack 消息并发送
//!
//! # 流程
//! 1. `Status` 解析状态关键字
//! 2. `MessageFormatter` 基于 `RunContext` + `GithubEvent` 构建 `SlackMessage`
//! 3. `NotificationDispatcher` 通过 `NotificationChannel` 发送一次
//!
//! # 使用示例
//! ```ignore
//! use action_slack::notification::{MessageFormatter, NotificationDispatcher, Status, WebhookClient, WebhookConfig};
//!
//! let message = MessageFormatter::new(Status::parse("success")).format(&ctx, &event);
//! let client = WebhookClient::new(WebhookConfig::new(url))?;
//! NotificationDispatcher::new(client).dispatch(&message).await?;
//! ```

pub mod channel;
pub mod dispatcher;
pub mod formatter;
pub mod links;
pub mod payload;
pub mod sender;
pub mod status;
pub mod webhook;

pub use channel::{NotificationChannel, SendResult};
pub use dispatcher::NotificationDispatcher;
pub use formatter::{msg, MessageContent, MessageFormatter};
pub use links::{truncate_branch, truncate_commit_message, Link, LinkSet};
pub use payload::{Attachment, Field, SlackMessage};
pub use sender::Sender;
pub use status::Status;
pub use webhook::{WebhookClient, WebhookConfig};
