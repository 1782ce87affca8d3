//! 消息作者（触发 run 的用户）

use crate::context::{GithubEvent, RunContext};

/// 作者信息，字段可能为空
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sender {
    pub name: String,
    pub link: String,
    pub icon: String,
}

impl Sender {
    /// 解析作者
    ///
    /// issues / issue_comment / pull_request / push 事件读取 payload 的 sender，
    /// 其他事件使用 `GITHUB_ACTOR` 和拼接的主页链接。
    pub fn resolve(ctx: &RunContext, event: &GithubEvent) -> Self {
        match event.sender() {
            Some(sender) => Self {
                name: sender.login.unwrap_or_default(),
                link: sender.html_url.unwrap_or_default(),
                icon: sender.avatar_url.unwrap_or_default(),
            },
            None => Self {
                name: ctx.actor.clone(),
                link: format!("{}/{}", ctx.server(), ctx.actor),
                icon: String::new(),
            },
        }
    }

    /// 名称和链接都存在时才展示作者
    pub fn is_linkable(&self) -> bool {
        !self.name.is_empty() && !self.link.is_empty()
    }

    /// 作者头像；payload 没有 avatar 时使用 `<link>.png?size=32`
    pub fn avatar(&self) -> String {
        if self.icon.is_empty() {
            format!("{}.png?size=32", self.link)
        } else {
            self.icon.clone()
        }
    }
}
