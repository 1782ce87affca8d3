//! 通知分发器 - 把一条消息交给渠道发送一次

use super::channel::{NotificationChannel, SendResult};
use super::payload::SlackMessage;
use crate::error::Result;
use tracing::{info, warn};

/// 通知分发器
pub struct NotificationDispatcher<C> {
    channel: C,
    /// 是否为 dry-run 模式
    dry_run: bool,
}

impl<C: NotificationChannel> NotificationDispatcher<C> {
    /// 创建新的分发器
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            dry_run: false,
        }
    }

    /// 设置 dry-run 模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// 发送消息，等待完成后返回
    ///
    /// dry-run 模式下把 payload 打印到 stdout，不发送。
    pub async fn dispatch(&self, message: &SlackMessage) -> Result<SendResult> {
        let name = self.channel.name();

        if self.dry_run {
            let json = serde_json::to_string_pretty(message)?;
            println!("{}", json);
            info!(channel = %name, "[DRY-RUN] Payload printed, not sent");
            return Ok(SendResult::Skipped("dry-run".to_string()));
        }

        match self.channel.send(message).await {
            Ok(()) => {
                info!(channel = %name, "Notification sent");
                Ok(SendResult::Sent)
            }
            Err(e) => {
                warn!(channel = %name, error = %e, "Channel send failed");
                Err(e)
            }
        }
    }
}
