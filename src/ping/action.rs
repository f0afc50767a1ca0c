//! ping动作实现
//!
//! 执行单次出站HTTP GET请求并对结果进行分类。所有失败都在此处被
//! 捕获并分类记录，永远不会向调用方传播。

use crate::config::PingConfig;
use crate::error::{PingError, Result};
use crate::ping::outcome::{PingOutcome, PingRecord};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// ping动作trait，定义单次ping的执行接口
#[async_trait]
pub trait PingAction: Send + Sync {
    /// 执行一次ping
    ///
    /// 从调度器的角度这是fire-and-forget操作：失败在内部被分类记录，
    /// 不会以错误形式返回。
    ///
    /// # 返回
    /// * `PingRecord` - 本次ping的记录
    async fn execute(&self) -> PingRecord;
}

/// HTTP ping动作实现
pub struct HttpPingAction {
    /// HTTP客户端
    client: Client,
    /// 目标URL
    target_url: String,
}

impl HttpPingAction {
    /// 创建新的HTTP ping动作
    ///
    /// # 参数
    /// * `config` - 保活ping配置
    ///
    /// # 返回
    /// * `Result<Self>` - 动作实例
    pub fn new(config: &PingConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()
            .map_err(PingError::ClientError)?;

        Ok(Self {
            client,
            target_url: config.target_url.clone(),
        })
    }

    /// 获取目标URL
    pub fn target_url(&self) -> &str {
        &self.target_url
    }
}

#[async_trait]
impl PingAction for HttpPingAction {
    async fn execute(&self) -> PingRecord {
        info!("尝试ping目标服务: {}", self.target_url);

        let start_time = Instant::now();
        let outcome = match self.client.get(&self.target_url).send().await {
            Ok(response) => PingOutcome::from_response(&response),
            Err(e) => PingOutcome::from_transport_error(&e),
        };
        let response_time = start_time.elapsed();

        let record = PingRecord::new(self.target_url.clone(), outcome)
            .with_response_time(response_time);

        match &record.outcome {
            PingOutcome::Success { status_code } => {
                info!(
                    "ping目标服务成功: {}, 状态码: {}, 耗时: {}ms",
                    self.target_url,
                    status_code,
                    record.response_time_ms()
                );
            }
            PingOutcome::HttpError {
                status_code,
                status_text,
            } => {
                warn!(
                    "ping目标服务失败: {}, 状态码: {} {}",
                    self.target_url, status_code, status_text
                );
            }
            PingOutcome::TransportError { message } => {
                error!("ping目标服务出错: {}, 原因: {}", self.target_url, message);
            }
        }

        if let Ok(json) = record.to_json() {
            debug!("ping记录: {}", json);
        }

        record
    }
}
