//! 错误处理模块
//!
//! 定义应用程序的统一错误类型

use thiserror::Error;

/// Keepalive Agent 应用程序的主要错误类型
#[derive(Error, Debug)]
pub enum KeepaliveError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 保活ping相关错误
    #[error("保活ping错误: {0}")]
    Ping(#[from] PingError),

    /// IO错误
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    /// JSON序列化/反序列化错误
    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 其他错误
    #[error("其他错误: {0}")]
    Other(#[from] anyhow::Error),
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 配置验证错误
    #[error("配置验证失败: {0}")]
    ValidationError(String),

    /// 监听地址无效
    #[error("监听地址无效: {addr}")]
    InvalidBindAddress { addr: String },
}

/// 保活ping错误类型
///
/// 注意：单次ping的失败不会以错误形式向上传播，而是被分类为
/// [`crate::ping::PingOutcome`]；此处的错误仅覆盖客户端构建等启动期问题。
#[derive(Error, Debug)]
pub enum PingError {
    /// HTTP客户端构建失败
    #[error("HTTP客户端构建失败: {0}")]
    ClientError(#[from] reqwest::Error),
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, KeepaliveError>;
