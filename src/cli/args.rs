//! 命令行参数定义
//!
//! 使用clap定义应用程序的命令行接口。每个参数都支持对应的环境变量，
//! 与原始部署方式（纯环境变量配置）保持兼容。

use clap::{Parser, ValueEnum};

/// Keepalive Agent - 服务保活工具
#[derive(Parser, Debug, Clone)]
#[command(
    name = "keepalive-agent",
    version = crate::VERSION,
    about = crate::APP_DESCRIPTION,
    long_about = None
)]
pub struct Args {
    /// 控制服务器监听端口
    #[arg(
        short,
        long,
        value_name = "PORT",
        help = "控制服务器监听端口",
        env = "PORT",
        default_value_t = crate::config::DEFAULT_PORT
    )]
    pub port: u16,

    /// 目标服务URL
    #[arg(
        short,
        long,
        value_name = "URL",
        help = "需要保活的目标服务URL",
        env = "TARGET_SERVER_URL",
        default_value = crate::config::DEFAULT_TARGET_URL
    )]
    pub target_url: String,

    /// ping间隔（分钟）
    #[arg(
        short,
        long,
        value_name = "MINUTES",
        help = "ping间隔（分钟）",
        env = "PING_INTERVAL_MINUTES",
        default_value_t = crate::config::DEFAULT_INTERVAL_MINUTES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_minutes: u64,

    /// 出站请求超时（秒）
    #[arg(
        long,
        value_name = "SECONDS",
        help = "出站ping请求超时（秒）",
        env = "PING_TIMEOUT_SECONDS",
        default_value_t = crate::config::DEFAULT_TIMEOUT_SECONDS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_seconds: u64,

    /// 日志级别
    #[arg(
        short,
        long,
        value_enum,
        default_value = "info",
        help = "日志级别",
        env = "KEEPALIVE_LOG_LEVEL"
    )]
    pub log_level: LogLevel,
}

/// 日志级别枚举
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum LogLevel {
    /// 调试级别
    Debug,
    /// 信息级别
    Info,
    /// 警告级别
    Warn,
    /// 错误级别
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}
