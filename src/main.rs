//! action-slack CLI
//!
//! 在 workflow 的最后一步运行，把 job 状态发送到 Slack。

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use action_slack::cli::{format_failure, handle_run, RunArgs};

#[derive(Parser)]
#[command(name = "action-slack")]
#[command(about = "Send GitHub Actions workflow status to a Slack incoming webhook")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 日志输出到 stderr，stdout 留给 workflow command 和 dry-run 输出
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("action_slack=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Notification failed");
            println!("{}", format_failure(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<()> {
    handle_run(cli.run).await?;
    Ok(())
}
