//! 运行上下文 - 从 CI 环境变量快照解析本次 workflow run 的元数据
//!
//! 环境变量只在入口处读取一次，之后以 `RunContext` 显式传递。
//! 所有字段都可能为空，缺失的变量一律降级为空字符串。

use std::collections::HashMap;

/// 提交 SHA 显示长度
pub const SHORT_SHA_LEN: usize = 8;

/// 服务器地址缺失时使用的默认值
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// 环境变量名
pub mod vars {
    pub const RUNNER_OS: &str = "RUNNER_OS";
    pub const EVENT_NAME: &str = "GITHUB_EVENT_NAME";
    pub const JOB: &str = "GITHUB_JOB";
    pub const WORKFLOW: &str = "GITHUB_WORKFLOW";
    pub const RUN_ID: &str = "GITHUB_RUN_ID";
    pub const RUN_NUMBER: &str = "GITHUB_RUN_NUMBER";
    pub const REPOSITORY: &str = "GITHUB_REPOSITORY";
    pub const SERVER_URL: &str = "GITHUB_SERVER_URL";
    pub const SHA: &str = "GITHUB_SHA";
    pub const HEAD_REF: &str = "GITHUB_HEAD_REF";
    pub const REF: &str = "GITHUB_REF";
    pub const ACTOR: &str = "GITHUB_ACTOR";
    pub const EVENT_PATH: &str = "GITHUB_EVENT_PATH";
}

/// 本次 run 的上下文
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    pub os: String,
    pub event_name: String,
    pub job: String,
    pub workflow: String,
    pub run_id: String,
    pub run_number: String,
    pub repository: String,
    pub server_url: String,
    /// 截断后的提交 SHA（前 8 位）
    pub commit: String,
    pub branch: String,
    pub actor: String,
    pub event_path: String,
}

impl RunContext {
    /// 通过查找函数构建上下文
    ///
    /// 查找函数返回 `None` 时视为空字符串。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();

        let sha = get(vars::SHA);
        let branch = resolve_branch(&get(vars::HEAD_REF), &get(vars::REF));

        Self {
            os: get(vars::RUNNER_OS),
            event_name: get(vars::EVENT_NAME),
            job: get(vars::JOB),
            workflow: get(vars::WORKFLOW),
            run_id: get(vars::RUN_ID),
            run_number: get(vars::RUN_NUMBER),
            repository: get(vars::REPOSITORY),
            server_url: get(vars::SERVER_URL),
            commit: sha.chars().take(SHORT_SHA_LEN).collect(),
            branch,
            actor: get(vars::ACTOR),
            event_path: get(vars::EVENT_PATH),
        }
    }

    /// 从环境变量快照构建
    pub fn from_env_map(env: &HashMap<String, String>) -> Self {
        Self::from_lookup(|key| env.get(key).cloned())
    }

    /// 从当前进程环境构建
    pub fn from_process_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 服务器地址，缺失时回退到 github.com
    pub fn server(&self) -> &str {
        let server = self.server_url.trim_end_matches('/');
        if server.is_empty() {
            DEFAULT_SERVER_URL
        } else {
            server
        }
    }

    /// `<server>/<repository>`
    pub fn repository_url(&self) -> String {
        format!("{}/{}", self.server(), self.repository)
    }

    /// `<server>/<repository>/actions/runs/<runId>`
    pub fn workflow_url(&self) -> String {
        format!("{}/actions/runs/{}", self.repository_url(), self.run_id)
    }
}

/// 分支解析：优先 PR 源分支，否则去掉 `refs/heads/` 前缀
fn resolve_branch(head_ref: &str, git_ref: &str) -> String {
    if !head_ref.is_empty() {
        return head_ref.to_string();
    }
    git_ref
        .strip_prefix(BRANCH_REF_PREFIX)
        .unwrap_or(git_ref)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_full_environment() {
        let ctx = RunContext::from_env_map(&env(&[
            (vars::RUNNER_OS, "Linux"),
            (vars::EVENT_NAME, "push"),
            (vars::JOB, "build"),
            (vars::WORKFLOW, "CI"),
            (vars::RUN_ID, "123456"),
            (vars::RUN_NUMBER, "42"),
            (vars::REPOSITORY, "octo/repo"),
            (vars::SERVER_URL, "https://github.com"),
            (vars::SHA, "0123456789abcdef0123456789abcdef01234567"),
            (vars::REF, "refs/heads/main"),
            (vars::ACTOR, "octocat"),
            (vars::EVENT_PATH, "/tmp/event.json"),
        ]));

        assert_eq!(ctx.os, "Linux");
        assert_eq!(ctx.commit, "01234567");
        assert_eq!(ctx.branch, "main");
        assert_eq!(ctx.repository_url(), "https://github.com/octo/repo");
        assert_eq!(
            ctx.workflow_url(),
            "https://github.com/octo/repo/actions/runs/123456"
        );
    }

    #[test]
    fn test_empty_environment_does_not_fail() {
        let ctx = RunContext::from_env_map(&HashMap::new());
        assert_eq!(ctx, RunContext::default());
        assert_eq!(ctx.commit, "");
        assert_eq!(ctx.branch, "");
        assert_eq!(ctx.server(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_head_ref_wins_over_ref() {
        let ctx = RunContext::from_env_map(&env(&[
            (vars::HEAD_REF, "feature/login"),
            (vars::REF, "refs/pull/7/merge"),
        ]));
        assert_eq!(ctx.branch, "feature/login");
    }

    #[test]
    fn test_empty_head_ref_falls_back_to_ref() {
        let ctx = RunContext::from_env_map(&env(&[
            (vars::HEAD_REF, ""),
            (vars::REF, "refs/heads/release/1.x"),
        ]));
        assert_eq!(ctx.branch, "release/1.x");
    }

    #[test]
    fn test_non_branch_ref_is_kept() {
        assert_eq!(resolve_branch("", "refs/tags/v1.0.0"), "refs/tags/v1.0.0");
    }

    #[test]
    fn test_short_sha_is_not_padded() {
        let ctx = RunContext::from_env_map(&env(&[(vars::SHA, "abc")]));
        assert_eq!(ctx.commit, "abc");
    }

    #[test]
    fn test_server_trailing_slash_trimmed() {
        let ctx = RunContext::from_env_map(&env(&[
            (vars::SERVER_URL, "https://ghe.example.com/"),
            (vars::REPOSITORY, "team/app"),
        ]));
        assert_eq!(ctx.repository_url(), "https://ghe.example.com/team/app");
    }
}
