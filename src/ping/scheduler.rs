//! ping调度器模块
//!
//! 管理唯一的重复定时任务，提供启动、停止、状态查询三个幂等操作。
//! 这是进程中唯一一处可变状态（定时任务句柄是否存在）。

use crate::config::PingConfig;
use crate::ping::action::PingAction;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info};

/// 调度器状态快照
#[derive(Debug, Clone, Serialize)]
pub struct SchedulerStatus {
    /// 是否有活跃的定时任务
    pub active: bool,
    /// 目标URL
    pub target_url: String,
    /// ping间隔（分钟）
    pub interval_minutes: u64,
}

/// ping调度器
///
/// 不变量：任意时刻最多只有一个活跃的定时任务句柄。start/stop/status
/// 通过互斥锁对句柄的读写串行化。
pub struct PingScheduler {
    /// ping动作
    action: Arc<dyn PingAction>,
    /// 保活ping配置
    config: PingConfig,
    /// 活跃定时任务的句柄，存在即表示调度器处于活跃状态
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl PingScheduler {
    /// 创建新的ping调度器
    ///
    /// # 参数
    /// * `action` - ping动作
    /// * `config` - 保活ping配置
    ///
    /// # 返回
    /// * `Self` - 调度器实例，初始为非活跃状态
    pub fn new(action: Arc<dyn PingAction>, config: PingConfig) -> Self {
        Self {
            action,
            config,
            timer: Mutex::new(None),
        }
    }

    /// 获取保活ping配置
    pub fn config(&self) -> &PingConfig {
        &self.config
    }

    /// 启动定时ping
    ///
    /// 若已有活跃定时任务，先取消它再启动新任务（重启语义）。取消只
    /// 影响后续的定时触发，正在执行中的ping不会被打断。启动后立即
    /// 触发一次ping，之后按固定间隔重复。
    ///
    /// # 返回
    /// * `bool` - 是否清除了已存在的定时任务
    pub async fn start(&self) -> bool {
        let mut timer = self.timer.lock().await;

        let replaced = if let Some(handle) = timer.take() {
            handle.abort();
            info!("已清除现有的ping定时任务，重新启动");
            true
        } else {
            false
        };

        let action = Arc::clone(&self.action);
        let period = self.config.interval;
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                // 第一次tick立即完成，实现启动时的首次ping
                ticker.tick().await;
                let action = Arc::clone(&action);
                // 每次触发都作为独立任务派发，定时任务被取消时
                // 进行中的ping会继续执行到结束
                tokio::spawn(async move {
                    action.execute().await;
                });
            }
        });
        *timer = Some(handle);

        info!(
            "定时ping已启动: 目标 {}, 间隔 {} 分钟",
            self.config.target_url,
            self.config.interval_minutes()
        );
        replaced
    }

    /// 停止定时ping
    ///
    /// 若没有活跃定时任务则为无副作用的空操作。
    ///
    /// # 返回
    /// * `bool` - 是否实际停止了一个活跃的定时任务
    pub async fn stop(&self) -> bool {
        let mut timer = self.timer.lock().await;

        match timer.take() {
            Some(handle) => {
                handle.abort();
                info!("定时ping已停止: 目标 {}", self.config.target_url);
                true
            }
            None => {
                debug!("定时ping未在运行，停止操作为空操作");
                false
            }
        }
    }

    /// 查询调度器状态
    ///
    /// 只读操作，不改变调度器状态。
    ///
    /// # 返回
    /// * `SchedulerStatus` - 当前状态快照
    pub async fn status(&self) -> SchedulerStatus {
        let timer = self.timer.lock().await;
        SchedulerStatus {
            active: timer.is_some(),
            target_url: self.config.target_url.clone(),
            interval_minutes: self.config.interval_minutes(),
        }
    }
}

impl Drop for PingScheduler {
    fn drop(&mut self) {
        // 调度器销毁时取消定时任务
        if let Some(handle) = self.timer.get_mut().take() {
            handle.abort();
        }
    }
}
