//! 通知渠道 trait 定义

use std::future::Future;

use super::payload::SlackMessage;
use crate::error::Result;

/// 发送结果
#[derive(Debug, Clone, PartialEq)]
pub enum SendResult {
    /// 发送成功
    Sent,
    /// 跳过（dry-run）
    Skipped(String),
}

/// 通知渠道 trait
///
/// `send` 只调用一次，不重试；失败以 `Err` 返回给调用方。
pub trait NotificationChannel: Send + Sync {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 发送消息并等待结果
    fn send(&self, message: &SlackMessage) -> impl Future<Output = Result<()>> + Send;
}
