//! Slack 消息 payload（legacy attachment 格式）
//!
//! ```json
//! {
//!   "attachments": [{
//!     "color": "#2cbe4e",
//!     "pretext": "✅ Workflow <url|CI #42> completed",
//!     "text": "`<url|1a2b3c4d>` - Fix bug\n🧑‍💻 <url|octocat> on <url|main>",
//!     "mrkdwn_in": ["pretext", "text", "footer"],
//!     "author_name": "octocat",
//!     "author_link": "https://github.com/octocat",
//!     "author_icon": "https://avatars.githubusercontent.com/u/1",
//!     "fields": [{"title": "Event", "value": "push", "short": true}],
//!     "footer": "<url|octo/repo> | powered by <...|action-slack>",
//!     "footer_icon": "https://slack.github.com/static/img/favicon-neutral.png"
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// 页脚署名
pub const FOOTER_ATTRIBUTION: &str =
    "powered by <https://github.com/titenkov/action-slack|action-slack>";
/// 页脚图标
pub const FOOTER_ICON: &str = "https://slack.github.com/static/img/favicon-neutral.png";

/// Webhook 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub attachments: Vec<Attachment>,
}

impl SlackMessage {
    pub fn single(attachment: Attachment) -> Self {
        Self {
            attachments: vec![attachment],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub color: String,
    pub pretext: String,
    pub text: String,
    /// 需要按 mrkdwn 渲染的字段
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    pub footer: String,
    pub footer_icon: String,
}

/// attachment 中的表格字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub title: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub short: bool,
}

impl Field {
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }

    pub fn long(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: false,
        }
    }
}
