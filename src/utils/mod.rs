//! # 工具函数模块
//!
//! 提供美化输出、日志后端、进度条等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `tb/sweep.rs` 使用
//! - 子模块: logger, output, progress

pub mod logger;
pub mod output;
pub mod progress;
