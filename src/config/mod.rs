//! 配置模块
//!
//! 定义保活ping与控制服务器的配置类型。配置在进程启动时从
//! 命令行参数/环境变量读取一次，之后不可变。

use crate::cli::args::Args;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::time::Duration;

/// 默认目标服务URL
pub const DEFAULT_TARGET_URL: &str = "http://localhost:3001";

/// 默认ping间隔（分钟）
///
/// 选择14分钟是为了略小于常见的15分钟空闲挂起阈值。
pub const DEFAULT_INTERVAL_MINUTES: u64 = 14;

/// 默认出站请求超时（秒）
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// 默认控制服务器端口
pub const DEFAULT_PORT: u16 = 3003;

/// 保活ping配置
#[derive(Debug, Clone)]
pub struct PingConfig {
    /// 目标服务URL
    pub target_url: String,
    /// ping间隔
    pub interval: Duration,
    /// 出站请求超时
    pub timeout: Duration,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            interval: Duration::from_secs(DEFAULT_INTERVAL_MINUTES * 60),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl PingConfig {
    /// 从命令行参数构建配置
    ///
    /// # 参数
    /// * `args` - 已解析的命令行参数
    ///
    /// # 返回
    /// * `Self` - 配置实例
    pub fn from_args(args: &Args) -> Self {
        Self {
            target_url: args.target_url.clone(),
            interval: Duration::from_secs(args.interval_minutes * 60),
            timeout: Duration::from_secs(args.timeout_seconds),
        }
    }

    /// 获取ping间隔（分钟）
    pub fn interval_minutes(&self) -> u64 {
        self.interval.as_secs() / 60
    }

    /// 验证配置
    ///
    /// # 返回
    /// * `Result<(), ConfigError>` - 验证结果
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_url.is_empty() {
            return Err(ConfigError::ValidationError("目标URL不能为空".to_string()));
        }

        if !self.target_url.starts_with("http://") && !self.target_url.starts_with("https://") {
            return Err(ConfigError::ValidationError(format!(
                "目标URL必须以http://或https://开头: {}",
                self.target_url
            )));
        }

        if self.interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "ping间隔必须大于0".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::ValidationError(
                "请求超时必须大于0".to_string(),
            ));
        }

        Ok(())
    }
}

/// 控制服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub bind_address: String,
    /// 监听端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// 从命令行参数构建配置
    pub fn from_args(args: &Args) -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: args.port,
        }
    }

    /// 获取监听的socket地址
    ///
    /// # 返回
    /// * `Result<SocketAddr, ConfigError>` - 解析后的地址
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress {
                addr: format!("{}:{}", self.bind_address, self.port),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_config_default() {
        let config = PingConfig::default();
        assert_eq!(config.target_url, "http://localhost:3001");
        assert_eq!(config.interval_minutes(), 14);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ping_config_validation() {
        let mut config = PingConfig::default();
        config.target_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = PingConfig::default();
        config.target_url = String::new();
        assert!(config.validate().is_err());

        let mut config = PingConfig::default();
        config.interval = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_server_config_socket_addr() {
        let config = ServerConfig {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_config_invalid_bind_address() {
        let config = ServerConfig {
            bind_address: "not-an-address".to_string(),
            port: 3000,
        };

        assert!(config.socket_addr().is_err());
    }
}
