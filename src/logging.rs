//! 日志系统模块
//!
//! 提供结构化日志配置和初始化功能

use anyhow::Result;
use log::LevelFilter;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// 日志配置结构
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 日志级别
    pub level: LevelFilter,
    /// 是否输出到控制台
    pub console: bool,
    /// 是否使用JSON格式
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            console: true,
            json_format: false,
        }
    }
}

/// 全局日志初始化守卫，防止重复初始化
static LOGGING_INIT: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// 日志系统
pub struct LoggingSystem;

impl LoggingSystem {
    /// 初始化日志系统
    ///
    /// 幂等操作：重复调用返回第一次初始化的结果，不会重复初始化。
    /// `RUST_LOG`环境变量优先于配置中的日志级别。
    ///
    /// # 参数
    /// * `config` - 日志配置
    ///
    /// # 返回
    /// * `Result<()>` - 初始化结果
    pub fn setup_logging(config: LogConfig) -> Result<()> {
        let result = LOGGING_INIT.get_or_init(|| Self::init(&config).map_err(|e| e.to_string()));

        result
            .clone()
            .map_err(|e| anyhow::anyhow!("日志系统初始化失败: {}", e))
    }

    /// 判断日志系统是否已初始化
    pub fn is_initialized() -> bool {
        LOGGING_INIT.get().is_some()
    }

    /// 执行实际的初始化
    fn init(config: &LogConfig) -> Result<()> {
        // log crate 到 tracing 的桥接
        tracing_log::LogTracer::init()?;

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

        if !config.console {
            registry().with(env_filter).try_init()?;
        } else if config.json_format {
            let layer = fmt::layer().json().with_target(true);
            registry().with(env_filter).with(layer).try_init()?;
        } else {
            let layer = fmt::layer().with_target(false);
            registry().with(env_filter).with(layer).try_init()?;
        }

        Ok(())
    }
}
