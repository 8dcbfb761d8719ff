//! # 交叉验证模块
//!
//! 将本程序的计算结果与外部参考数据（JSON）逐项比对。
//!
//! ## 子模块
//! - `ground_truth`: 参考数据文档读写
//! - `harness`: 场景定义、比较逻辑、参考数据生成
//!
//! ## 依赖关系
//! - 被 `commands/validate.rs` 使用
//! - 使用 `tb/` 进行计算

pub mod ground_truth;
pub mod harness;

pub use harness::{default_scenarios, ValidationReport, DEFAULT_TOLERANCE};
