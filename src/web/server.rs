//! Web服务器实现
//!
//! 提供控制接口的HTTP服务器和路由管理

use super::{handlers, AppState};
use crate::config::ServerConfig;
use crate::error::Result;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Web服务器
pub struct WebServer {
    /// 服务器配置
    config: ServerConfig,
    /// 应用共享状态
    state: AppState,
}

/// 构建控制接口路由
///
/// # 参数
/// * `state` - 应用共享状态
///
/// # 返回
/// * `Router` - 配置好的路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::banner))
        .route("/ping", get(handlers::start_ping))
        .route("/stop-ping", get(handlers::stop_ping))
        .route("/ping-status", get(handlers::ping_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

impl WebServer {
    /// 创建新的Web服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// 启动服务器并运行直到收到关闭信号
    ///
    /// # 返回
    /// * `Result<()>` - 运行结果
    pub async fn run(self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let app = router(self.state);

        let listener = TcpListener::bind(addr).await?;
        info!("控制服务器正在监听: {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("控制服务器已关闭");
        Ok(())
    }
}

/// 等待关闭信号（ctrl-c）
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("监听关闭信号失败: {}", e);
    }
}
