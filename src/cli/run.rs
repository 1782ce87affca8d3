//! 通知命令处理
//!
//! 一次调用 = 一次完整流程：校验配置 → 读取上下文 → 构建消息 → 发送一次。

use clap::Args;
use tracing::{debug, info};

use crate::config::NotifyConfig;
use crate::context::{EventDocument, GithubEvent, RunContext};
use crate::error::Result;
use crate::notification::webhook::DEFAULT_TIMEOUT_SECS;
use crate::notification::{
    MessageFormatter, NotificationChannel, NotificationDispatcher, SendResult, SlackMessage,
    Status, WebhookClient,
};

/// 通知命令参数
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Workflow 状态: success / failure / cancelled
    #[arg(long, env = "INPUT_STATUS", default_value = "")]
    pub status: String,

    /// Slack Incoming Webhook URL
    #[arg(long, env = "SLACK_WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// HTTP 请求超时（秒）
    #[arg(long, env = "ACTION_SLACK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// 不使用 HTTP(S)_PROXY 代理
    #[arg(long)]
    pub no_proxy: bool,

    /// 不附带 Event / Runner / Job 字段
    #[arg(long)]
    pub no_fields: bool,

    /// 只打印 payload，不发送
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    pub fn config(&self) -> NotifyConfig {
        NotifyConfig {
            webhook_url: self.webhook_url.clone(),
            timeout_secs: self.timeout_secs,
            use_system_proxy: !self.no_proxy,
            dry_run: self.dry_run,
            include_fields: !self.no_fields,
        }
    }
}

/// 使用当前进程环境执行
pub async fn handle_run(args: RunArgs) -> Result<SendResult> {
    run(args, |key| std::env::var(key).ok()).await
}

/// 执行一次通知
///
/// Webhook 地址缺失时立即返回错误，不读取上下文、不构建消息。
pub async fn run<F>(args: RunArgs, lookup: F) -> Result<SendResult>
where
    F: Fn(&str) -> Option<String>,
{
    let config = args.config();
    let webhook = config.webhook_config()?;

    let ctx = RunContext::from_lookup(lookup);
    let status = Status::parse(&args.status);
    info!(
        status = %status,
        event = %ctx.event_name,
        repository = %ctx.repository,
        "Preparing workflow notification"
    );

    let message = build_message(&config, status, &ctx);
    let dispatcher = NotificationDispatcher::new(WebhookClient::new(webhook)?).with_dry_run(config.dry_run);
    dispatcher.dispatch(&message).await
}

/// 读取事件 payload 并构建消息
pub fn build_message(config: &NotifyConfig, status: Status, ctx: &RunContext) -> SlackMessage {
    let document = EventDocument::load(&ctx.event_path);
    let event = GithubEvent::new(&ctx.event_name, document);
    debug!(event = %event.name(), "Loaded event payload");

    MessageFormatter::new(status)
        .with_fields(config.include_fields)
        .format(ctx, &event)
}

/// 通过指定渠道执行一次通知（用于替换 Webhook 客户端）
pub async fn notify_with<C: NotificationChannel>(
    config: &NotifyConfig,
    status: Status,
    ctx: &RunContext,
    channel: C,
) -> Result<SendResult> {
    config.require_webhook_url()?;
    let message = build_message(config, status, ctx);
    NotificationDispatcher::new(channel)
        .with_dry_run(config.dry_run)
        .dispatch(&message)
        .await
}
