//! 命令行接口模块
//!
//! 提供命令行参数解析功能

pub mod args;

pub use args::{Args, LogLevel};
