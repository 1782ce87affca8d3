//! CI 运行上下文：环境变量 + 触发事件 payload

pub mod event;
pub mod run_context;

pub use event::{EventDocument, EventSender, GithubEvent};
pub use run_context::RunContext;
