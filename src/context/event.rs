//! 触发事件 payload
//!
//! GitHub 把触发事件的完整 JSON 写到 `GITHUB_EVENT_PATH`。这里只关心三个子文档：
//! `sender`、`head_commit`、`pull_request`，其余字段忽略。
//! 文件缺失、不可读、格式错误都降级为空文档。

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// 事件发起人
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventSender {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HeadCommit {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// 事件文档中用到的部分
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventDocument {
    #[serde(default)]
    pub sender: Option<EventSender>,
    #[serde(default)]
    pub head_commit: Option<HeadCommit>,
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

impl EventDocument {
    /// 解析 JSON 文本，失败时返回空文档
    pub fn parse(content: &str) -> Self {
        match serde_json::from_str(content) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "Event payload is not valid JSON, ignoring it");
                Self::default()
            }
        }
    }

    /// 从文件加载，路径为空或读取失败时返回空文档
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            debug!("No event payload path, using empty document");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cannot read event payload");
                Self::default()
            }
        }
    }
}

/// 按事件名区分的触发事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GithubEvent {
    Issues(EventDocument),
    IssueComment(EventDocument),
    PullRequest(EventDocument),
    Push(EventDocument),
    /// 其他事件（schedule、workflow_dispatch 等），保留原始事件名
    Other {
        name: String,
        document: EventDocument,
    },
}

impl GithubEvent {
    pub fn new(event_name: &str, document: EventDocument) -> Self {
        match event_name {
            "issues" => Self::Issues(document),
            "issue_comment" => Self::IssueComment(document),
            "pull_request" => Self::PullRequest(document),
            "push" => Self::Push(document),
            other => Self::Other {
                name: other.to_string(),
                document,
            },
        }
    }

    /// 事件名
    pub fn name(&self) -> &str {
        match self {
            Self::Issues(_) => "issues",
            Self::IssueComment(_) => "issue_comment",
            Self::PullRequest(_) => "pull_request",
            Self::Push(_) => "push",
            Self::Other { name, .. } => name,
        }
    }

    pub fn document(&self) -> &EventDocument {
        match self {
            Self::Issues(doc) | Self::IssueComment(doc) | Self::PullRequest(doc) | Self::Push(doc) => {
                doc
            }
            Self::Other { document, .. } => document,
        }
    }

    /// payload 中的 sender，只对 issues / issue_comment / pull_request / push 生效
    ///
    /// 外层 `None` 表示该事件不读取 sender；内层文档缺失 sender 时返回空 sender。
    pub fn sender(&self) -> Option<EventSender> {
        match self {
            Self::Other { .. } => None,
            _ => Some(self.document().sender.clone().unwrap_or_default()),
        }
    }

    /// 提交信息来源：head_commit.message，其次 pull_request.title
    pub fn commit_message(&self) -> &str {
        let doc = self.document();
        if let Some(commit) = &doc.head_commit {
            return commit.message.as_deref().unwrap_or("");
        }
        doc.pull_request
            .as_ref()
            .and_then(|pr| pr.title.as_deref())
            .unwrap_or("")
    }
}
