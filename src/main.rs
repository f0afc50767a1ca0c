//! Keepalive Agent 主程序入口
//!
//! 解析配置、初始化日志，然后启动控制服务器。定时ping不会在启动时
//! 自动开始，需要显式调用 `GET /ping`。

use anyhow::{Context, Result};
use clap::Parser;
use keepalive_agent::cli::Args;
use keepalive_agent::config::{PingConfig, ServerConfig};
use keepalive_agent::logging::{LogConfig, LoggingSystem};
use keepalive_agent::ping::{HttpPingAction, PingScheduler};
use keepalive_agent::web::{AppState, WebServer};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数（带环境变量回退）
    let args = Args::parse();

    // 初始化日志系统
    let log_config = LogConfig {
        level: args.log_level.clone().into(),
        ..Default::default()
    };
    LoggingSystem::setup_logging(log_config).context("初始化日志系统失败")?;

    info!("Keepalive Agent v{} 启动", keepalive_agent::VERSION);

    // 构建并验证配置
    let ping_config = PingConfig::from_args(&args);
    ping_config.validate().context("配置验证失败")?;
    let server_config = ServerConfig::from_args(&args);

    info!(
        "保活目标: {}, ping间隔: {} 分钟, 请求超时: {} 秒",
        ping_config.target_url,
        ping_config.interval_minutes(),
        ping_config.timeout.as_secs()
    );

    // 组装调度器与控制服务器
    let action = Arc::new(HttpPingAction::new(&ping_config).context("创建ping动作失败")?);
    let scheduler = Arc::new(PingScheduler::new(action, ping_config));
    let state = AppState::new(scheduler);

    WebServer::new(server_config, state)
        .run()
        .await
        .context("控制服务器运行失败")?;

    Ok(())
}
