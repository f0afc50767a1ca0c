//! Web路由处理函数
//!
//! 实现控制接口的四个GET端点。所有端点都返回HTTP 200和纯文本响应；
//! 控制操作不会失败，出站ping的失败只体现在日志中。

use super::AppState;
use axum::extract::State;

/// 首页横幅，描述当前运行模式
pub async fn banner(State(state): State<AppState>) -> String {
    let status = state.scheduler.status().await;
    let mode = if status.active { "active" } else { "inactive" };
    format!(
        "Keepalive agent is running ({mode}). Target: {}, Interval: {} minutes.",
        status.target_url, status.interval_minutes
    )
}

/// 启动定时ping
///
/// 幂等操作：已在运行时先清除旧的定时任务再重新启动（重启语义）。
pub async fn start_ping(State(state): State<AppState>) -> String {
    state.scheduler.start().await;
    let config = state.scheduler.config();
    format!(
        "Pinging started. Target: {}, Interval: {} minutes. Initial ping sent.",
        config.target_url,
        config.interval_minutes()
    )
}

/// 停止定时ping
pub async fn stop_ping(State(state): State<AppState>) -> String {
    if state.scheduler.stop().await {
        "Pinging stopped.".to_string()
    } else {
        "Pinging is not currently active.".to_string()
    }
}

/// 查询定时ping状态
pub async fn ping_status(State(state): State<AppState>) -> String {
    let status = state.scheduler.status().await;
    let mode = if status.active { "active" } else { "inactive" };
    format!(
        "Pinging is {mode}. Target: {}, Interval: {} minutes.",
        status.target_url, status.interval_minutes
    )
}
