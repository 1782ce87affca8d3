//! 链接与文本截断
//!
//! 链接统一渲染为 Slack mrkdwn 的 `<url|label>`。

use std::fmt;

use super::sender::Sender;
use crate::context::RunContext;

/// 提交信息最大显示长度（字符数）
pub const COMMIT_MESSAGE_MAX_LEN: usize = 50;
/// 分支名最大显示长度（字符数）
pub const BRANCH_MAX_LEN: usize = 40;

const ELLIPSIS: &str = "...";

/// 一个超链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub label: String,
}

impl Link {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}|{}>", self.url, self.label)
    }
}

/// 消息里用到的所有链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSet {
    pub job: Link,
    pub workflow: Link,
    pub repository: Link,
    pub branch: Link,
    pub commit: Link,
    /// 作者缺少名称或链接时为 None
    pub author: Option<Link>,
}

impl LinkSet {
    pub fn build(ctx: &RunContext, sender: &Sender) -> Self {
        let workflow_url = ctx.workflow_url();
        let repository_url = ctx.repository_url();
        let run = format!("{} #{}", ctx.workflow, ctx.run_number);

        let author = sender
            .is_linkable()
            .then(|| Link::new(sender.link.clone(), sender.name.clone()));

        Self {
            job: Link::new(workflow_url.clone(), format!("{} / {}", run, ctx.job)),
            workflow: Link::new(workflow_url, run),
            repository: Link::new(repository_url.clone(), ctx.repository.clone()),
            // 链接目标始终使用完整分支名
            branch: Link::new(
                format!("{}/tree/{}", repository_url, ctx.branch),
                truncate_branch(&ctx.branch),
            ),
            commit: Link::new(
                format!("{}/commit/{}", repository_url, ctx.commit),
                ctx.commit.clone(),
            ),
            author,
        }
    }
}

/// 超过 `max` 个字符时截断并追加 `...`
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut truncated: String = text.chars().take(max).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        text.to_string()
    }
}

/// 只保留第一行，再截断到 50 个字符
pub fn truncate_commit_message(message: &str) -> String {
    let first_line = message.split('\n').next().unwrap_or("");
    let first_line = first_line.strip_suffix('\r').unwrap_or(first_line);
    truncate_chars(first_line, COMMIT_MESSAGE_MAX_LEN)
}

/// 分支显示名截断到 40 个字符
pub fn truncate_branch(branch: &str) -> String {
    truncate_chars(branch, BRANCH_MAX_LEN)
}
