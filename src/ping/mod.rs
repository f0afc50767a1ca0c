//! 保活ping模块
//!
//! 提供单次ping动作的执行、结果分类以及定时调度功能

pub mod action;
pub mod outcome;
pub mod scheduler;

pub use action::{HttpPingAction, PingAction};
pub use outcome::{PingOutcome, PingRecord};
pub use scheduler::{PingScheduler, SchedulerStatus};
