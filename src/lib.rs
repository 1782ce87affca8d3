//! action-slack - 把 GitHub Actions workflow 结果推送到 Slack

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod notification;

pub use config::NotifyConfig;
pub use context::{EventDocument, GithubEvent, RunContext};
pub use error::NotifyError;
pub use notification::{
    MessageFormatter, NotificationChannel, NotificationDispatcher, SendResult, SlackMessage,
    Status, WebhookClient, WebhookConfig,
};
