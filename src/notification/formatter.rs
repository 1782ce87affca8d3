//! 消息格式化模块 - 把运行上下文转换为 Slack attachment
//!
//! 两种消息形态：
//! - 富文本：有作者链接且提交信息非空，展示提交、作者和分支
//! - 简单：只展示 workflow 状态

use super::links::{truncate_commit_message, LinkSet};
use super::payload::{Attachment, Field, SlackMessage, FOOTER_ATTRIBUTION, FOOTER_ICON};
use super::sender::Sender;
use super::status::Status;
use crate::context::{GithubEvent, RunContext};

/// Message text constants
pub mod msg {
    pub const WORKFLOW: &str = "Workflow";
    pub const AUTHOR_ICON: &str = "🧑‍💻";
    pub const ON: &str = "on";

    pub const FIELD_EVENT: &str = "Event";
    pub const FIELD_RUNNER: &str = "Runner";
    pub const FIELD_JOB: &str = "Job";
}

/// 消息主体内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageContent {
    Rich {
        commit: String,
        commit_message: String,
        author: String,
        branch: String,
    },
    Minimal,
}

impl MessageContent {
    /// 作者链接存在且提交信息非空时使用富文本
    pub fn select(links: &LinkSet, commit_message: &str) -> Self {
        match &links.author {
            Some(author) if !commit_message.is_empty() => MessageContent::Rich {
                commit: links.commit.to_string(),
                commit_message: commit_message.to_string(),
                author: author.to_string(),
                branch: links.branch.to_string(),
            },
            _ => MessageContent::Minimal,
        }
    }

    pub fn pretext(&self, status: Status, links: &LinkSet) -> String {
        match self {
            MessageContent::Rich { .. } => format!(
                "{} {} {} {}",
                status.icon(),
                msg::WORKFLOW,
                links.workflow,
                status.text()
            ),
            MessageContent::Minimal => format!("{} {}", status.icon(), status.text()),
        }
    }

    pub fn text(&self, status: Status, links: &LinkSet) -> String {
        match self {
            MessageContent::Rich {
                commit,
                commit_message,
                author,
                branch,
            } => format!(
                "`{}` - {}\n{} {} {} {}",
                commit,
                commit_message,
                msg::AUTHOR_ICON,
                author,
                msg::ON,
                branch
            ),
            MessageContent::Minimal => {
                format!("{} {} {}", msg::WORKFLOW, links.workflow, status.text())
            }
        }
    }
}

/// 消息格式化器
pub struct MessageFormatter {
    status: Status,
    include_fields: bool,
}

impl MessageFormatter {
    /// 创建新的 MessageFormatter
    pub fn new(status: Status) -> Self {
        Self {
            status,
            include_fields: true,
        }
    }

    /// 设置是否附带 Event / Runner / Job 字段
    pub fn with_fields(mut self, include: bool) -> Self {
        self.include_fields = include;
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// 构建 Slack 消息
    pub fn format(&self, ctx: &RunContext, event: &GithubEvent) -> SlackMessage {
        let sender = Sender::resolve(ctx, event);
        let links = LinkSet::build(ctx, &sender);
        let commit_message = truncate_commit_message(event.commit_message());
        let content = MessageContent::select(&links, &commit_message);

        let (author_name, author_link, author_icon) = match &links.author {
            Some(_) => (
                Some(sender.name.clone()),
                Some(sender.link.clone()),
                Some(sender.avatar()),
            ),
            None => (None, None, None),
        };

        let fields = if self.include_fields {
            Self::build_fields(ctx, &links)
        } else {
            Vec::new()
        };

        SlackMessage::single(Attachment {
            color: self.status.color().to_string(),
            pretext: content.pretext(self.status, &links),
            text: content.text(self.status, &links),
            mrkdwn_in: vec!["pretext".to_string(), "text".to_string(), "footer".to_string()],
            author_name,
            author_link,
            author_icon,
            fields,
            footer: format!("{} | {}", links.repository, FOOTER_ATTRIBUTION),
            footer_icon: FOOTER_ICON.to_string(),
        })
    }

    /// Event / Runner 只在非空时出现；有 job 名时附带 job 链接
    fn build_fields(ctx: &RunContext, links: &LinkSet) -> Vec<Field> {
        let mut fields = Vec::new();
        if !ctx.event_name.is_empty() {
            fields.push(Field::short(msg::FIELD_EVENT, ctx.event_name.clone()));
        }
        if !ctx.os.is_empty() {
            fields.push(Field::short(msg::FIELD_RUNNER, ctx.os.clone()));
        }
        if !ctx.job.is_empty() {
            fields.push(Field::long(msg::FIELD_JOB, links.job.to_string()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EventDocument;

    fn ctx(event_name: &str) -> RunContext {
        RunContext {
            os: "Linux".to_string(),
            event_name: event_name.to_string(),
            job: "build".to_string(),
            workflow: "CI".to_string(),
            run_id: "1001".to_string(),
            run_number: "42".to_string(),
            repository: "octo/repo".to_string(),
            server_url: "https://github.com".to_string(),
            commit: "1a2b3c4d".to_string(),
            branch: "main".to_string(),
            actor: "octocat".to_string(),
            event_path: String::new(),
        }
    }

    fn push_event(json: &str) -> GithubEvent {
        GithubEvent::new("push", EventDocument::parse(json))
    }

    const REPO: &str = "https://github.com/octo/repo";
    const RUN: &str = "https://github.com/octo/repo/actions/runs/1001";

    #[test]
    fn test_rich_message() {
        let event = push_event(
            r#"{"head_commit":{"message":"Fix bug\nlong body"},
                "sender":{"login":"dev","html_url":"https://github.com/dev","avatar_url":"https://a/1"}}"#,
        );
        let message = MessageFormatter::new(Status::parse("success")).format(&ctx("push"), &event);
        let a = &message.attachments[0];

        assert_eq!(a.color, "#2cbe4e");
        assert_eq!(a.pretext, format!("✅ Workflow <{}|CI #42> completed", RUN));
        assert_eq!(
            a.text,
            format!(
                "`<{repo}/commit/1a2b3c4d|1a2b3c4d>` - Fix bug\n🧑‍💻 <https://github.com/dev|dev> on <{repo}/tree/main|main>",
                repo = REPO
            )
        );
        assert_eq!(a.author_name.as_deref(), Some("dev"));
        assert_eq!(a.author_link.as_deref(), Some("https://github.com/dev"));
        assert_eq!(a.author_icon.as_deref(), Some("https://a/1"));
        assert_eq!(
            a.footer,
            format!("<{}|octo/repo> | {}", REPO, FOOTER_ATTRIBUTION)
        );
        assert_eq!(a.footer_icon, FOOTER_ICON);
    }

    #[test]
    fn test_minimal_message_without_commit_message() {
        let event = push_event(r#"{"sender":{"login":"dev","html_url":"https://github.com/dev"}}"#);
        let message = MessageFormatter::new(Status::Failure).format(&ctx("push"), &event);
        let a = &message.attachments[0];

        assert_eq!(a.color, "#cb2431");
        assert_eq!(a.pretext, "❌ failed");
        assert_eq!(a.text, format!("Workflow <{}|CI #42> failed", RUN));
        // 作者可用时仍保留 author 字段
        assert_eq!(a.author_name.as_deref(), Some("dev"));
        assert_eq!(a.author_icon.as_deref(), Some("https://github.com/dev.png?size=32"));
    }

    #[test]
    fn test_minimal_message_without_author() {
        let event = push_event(r#"{"head_commit":{"message":"Fix bug"}}"#);
        let message = MessageFormatter::new(Status::Success).format(&ctx("push"), &event);
        let a = &message.attachments[0];

        assert_eq!(a.pretext, "✅ completed");
        assert!(a.author_name.is_none());
        assert!(a.author_link.is_none());
        assert!(a.author_icon.is_none());

        let json = serde_json::to_value(&message).unwrap();
        assert!(json["attachments"][0].get("author_name").is_none());
    }

    #[test]
    fn test_unknown_status_message() {
        let event = GithubEvent::new("schedule", EventDocument::default());
        let message = MessageFormatter::new(Status::parse("")).format(&ctx("schedule"), &event);
        let a = &message.attachments[0];

        assert_eq!(a.color, "warning");
        assert_eq!(a.pretext, "🟡 Unknown");
        assert_eq!(a.text, format!("Workflow <{}|CI #42> Unknown", RUN));
        // schedule 事件使用 actor 作为作者
        assert_eq!(a.author_name.as_deref(), Some("octocat"));
        assert_eq!(a.author_link.as_deref(), Some("https://github.com/octocat"));
    }

    #[test]
    fn test_pull_request_title_rich_message() {
        let event = GithubEvent::new(
            "pull_request",
            EventDocument::parse(
                r#"{"pull_request":{"title":"Add feature X"},"sender":{"login":"dev","html_url":"https://github.com/dev"}}"#,
            ),
        );
        let message = MessageFormatter::new(Status::Cancelled).format(&ctx("pull_request"), &event);
        let a = &message.attachments[0];
        assert_eq!(a.pretext, format!("⚠️ Workflow <{}|CI #42> cancelled", RUN));
        assert!(a.text.contains("` - Add feature X\n"));
    }

    #[test]
    fn test_fields() {
        let event = GithubEvent::new("schedule", EventDocument::default());
        let message = MessageFormatter::new(Status::Success).format(&ctx("schedule"), &event);
        let fields = &message.attachments[0].fields;

        assert_eq!(
            fields,
            &vec![
                Field::short("Event", "schedule"),
                Field::short("Runner", "Linux"),
                Field::long("Job", format!("<{}|CI #42 / build>", RUN)),
            ]
        );
    }

    #[test]
    fn test_fields_disabled_or_empty() {
        let event = GithubEvent::new("schedule", EventDocument::default());
        let message = MessageFormatter::new(Status::Success)
            .with_fields(false)
            .format(&ctx("schedule"), &event);
        assert!(message.attachments[0].fields.is_empty());

        let message = MessageFormatter::new(Status::Success).format(&RunContext::default(), &event);
        let json = serde_json::to_value(&message).unwrap();
        assert!(json["attachments"][0].get("fields").is_none());
    }

    #[test]
    fn test_empty_context_does_not_panic() {
        let event = GithubEvent::new("", EventDocument::default());
        let message = MessageFormatter::new(Status::Unknown).format(&RunContext::default(), &event);
        assert_eq!(message.attachments.len(), 1);
        assert_eq!(message.attachments[0].color, "warning");
    }

    #[test]
    fn test_select_content() {
        let sender = Sender {
            name: "dev".to_string(),
            link: "https://github.com/dev".to_string(),
            icon: String::new(),
        };
        let links = LinkSet::build(&ctx("push"), &sender);
        assert!(matches!(MessageContent::select(&links, "msg"), MessageContent::Rich { .. }));
        assert_eq!(MessageContent::select(&links, ""), MessageContent::Minimal);

        let links = LinkSet::build(&ctx("push"), &Sender::default());
        assert_eq!(MessageContent::select(&links, "msg"), MessageContent::Minimal);
    }
}
