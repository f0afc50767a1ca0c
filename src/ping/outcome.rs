//! ping结果数据结构
//!
//! 定义单次ping的结果分类和记录类型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// ping结果分类
///
/// 单次ping的三种结局：目标返回2xx、目标返回非2xx、请求未能完成。
/// 失败不会作为错误向调用方传播，而是以此枚举的形式被记录。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PingOutcome {
    /// 成功：响应状态码在200-299范围内
    Success {
        /// HTTP状态码
        status_code: u16,
    },
    /// HTTP错误：收到响应但状态码不在200-299范围内
    HttpError {
        /// HTTP状态码
        status_code: u16,
        /// 状态码描述文本
        status_text: String,
    },
    /// 传输错误：请求未能完成（DNS失败、连接拒绝、超时等）
    TransportError {
        /// 错误描述
        message: String,
    },
}

impl PingOutcome {
    /// 判断是否为成功结果
    pub fn is_success(&self) -> bool {
        matches!(self, PingOutcome::Success { .. })
    }

    /// 从HTTP响应分类结果
    ///
    /// # 参数
    /// * `response` - HTTP响应
    ///
    /// # 返回
    /// * `Self` - 分类后的结果
    pub fn from_response(response: &reqwest::Response) -> Self {
        let status = response.status();
        if status.is_success() {
            PingOutcome::Success {
                status_code: status.as_u16(),
            }
        } else {
            PingOutcome::HttpError {
                status_code: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
        }
    }

    /// 从传输层错误分类结果
    ///
    /// # 参数
    /// * `error` - reqwest错误
    ///
    /// # 返回
    /// * `Self` - 分类后的结果
    pub fn from_transport_error(error: &reqwest::Error) -> Self {
        PingOutcome::TransportError {
            message: format_transport_error(error),
        }
    }
}

impl std::fmt::Display for PingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PingOutcome::Success { status_code } => write!(f, "HTTP {status_code}"),
            PingOutcome::HttpError {
                status_code,
                status_text,
            } => write!(f, "HTTP {status_code} {status_text}"),
            PingOutcome::TransportError { message } => write!(f, "{message}"),
        }
    }
}

/// 格式化传输层错误信息，使其更加清晰易读
fn format_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else if error.is_request() {
        "Invalid request".to_string()
    } else {
        let error_str = error.to_string();
        if error_str.contains("dns") || error_str.contains("DNS") {
            "DNS resolution failed".to_string()
        } else if error_str.contains("certificate")
            || error_str.contains("tls")
            || error_str.contains("ssl")
        {
            "SSL/TLS certificate error".to_string()
        } else {
            format!("Request failed: {error_str}")
        }
    }
}

/// 单次ping的记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingRecord {
    /// 记录ID
    pub id: Uuid,
    /// 目标URL
    pub target_url: String,
    /// ping时间戳
    pub timestamp: DateTime<Utc>,
    /// 结果分类
    pub outcome: PingOutcome,
    /// 响应时间
    #[serde(with = "duration_serde")]
    pub response_time: Duration,
}

impl PingRecord {
    /// 创建新的ping记录
    ///
    /// # 参数
    /// * `target_url` - 目标URL
    /// * `outcome` - 结果分类
    ///
    /// # 返回
    /// * `Self` - ping记录实例
    pub fn new(target_url: String, outcome: PingOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            target_url,
            timestamp: Utc::now(),
            outcome,
            response_time: Duration::from_millis(0),
        }
    }

    /// 设置响应时间
    pub fn with_response_time(mut self, response_time: Duration) -> Self {
        self.response_time = response_time;
        self
    }

    /// 获取响应时间（毫秒）
    pub fn response_time_ms(&self) -> u64 {
        self.response_time.as_millis() as u64
    }

    /// 转换为JSON字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Duration序列化模块
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_success() {
        assert!(PingOutcome::Success { status_code: 200 }.is_success());
        assert!(PingOutcome::Success { status_code: 204 }.is_success());
        assert!(!PingOutcome::HttpError {
            status_code: 503,
            status_text: "Service Unavailable".to_string(),
        }
        .is_success());
        assert!(!PingOutcome::TransportError {
            message: "Connection refused".to_string(),
        }
        .is_success());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            PingOutcome::Success { status_code: 204 }.to_string(),
            "HTTP 204"
        );
        assert_eq!(
            PingOutcome::HttpError {
                status_code: 503,
                status_text: "Service Unavailable".to_string(),
            }
            .to_string(),
            "HTTP 503 Service Unavailable"
        );
        assert_eq!(
            PingOutcome::TransportError {
                message: "Request timeout".to_string(),
            }
            .to_string(),
            "Request timeout"
        );
    }

    #[test]
    fn test_record_creation() {
        let record = PingRecord::new(
            "http://localhost:3001".to_string(),
            PingOutcome::Success { status_code: 200 },
        )
        .with_response_time(Duration::from_millis(42));

        assert_eq!(record.target_url, "http://localhost:3001");
        assert_eq!(record.response_time_ms(), 42);
        assert!(record.outcome.is_success());
    }

    #[test]
    fn test_record_serialization() {
        let record = PingRecord::new(
            "http://localhost:3001".to_string(),
            PingOutcome::HttpError {
                status_code: 503,
                status_text: "Service Unavailable".to_string(),
            },
        )
        .with_response_time(Duration::from_millis(100));

        let json = record.to_json().unwrap();
        assert!(json.contains("http_error"));
        assert!(json.contains("503"));
        assert!(json.contains("http://localhost:3001"));
    }
}
