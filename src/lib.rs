//! Keepalive Agent - 服务保活工具
//!
//! 这是一个用Rust编写的服务保活工具，通过定时向目标服务发送HTTP GET请求，
//! 防止目标服务因空闲而被平台挂起。支持：
//! - 固定间隔的HTTP保活ping
//! - HTTP控制接口（启动/停止/查询）
//! - 环境变量配置
//! - 结构化日志记录

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod ping;
pub mod web;

// 重新导出主要类型
pub use config::{PingConfig, ServerConfig};
pub use error::KeepaliveError;
pub use ping::{HttpPingAction, PingAction, PingOutcome, PingScheduler};

/// 应用程序版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 应用程序名称
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// 应用程序描述
pub const APP_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
