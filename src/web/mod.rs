//! Web控制接口模块
//!
//! 提供启动/停止/查询定时ping的HTTP控制接口

use crate::ping::PingScheduler;
use std::sync::Arc;

pub mod handlers;
pub mod server;

pub use server::{router, WebServer};

/// Web应用共享状态
#[derive(Clone)]
pub struct AppState {
    /// ping调度器
    pub scheduler: Arc<PingScheduler>,
}

impl AppState {
    /// 创建新的Web应用状态
    pub fn new(scheduler: Arc<PingScheduler>) -> Self {
        Self { scheduler }
    }
}
