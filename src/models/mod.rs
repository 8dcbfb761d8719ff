//! # 数据模型模块
//!
//! 定义紧束缚模型的参数与能带计算结果数据模型。
//!
//! ## 依赖关系
//! - 被 `tb/`, `validation/` 和 `commands/` 使用
//! - 子模块: species, band

pub mod band;
pub mod species;

pub use band::{BandPair, BandStats, ComputeResult, HoppingResult, KPoint, SimulationInput};
pub use species::{configure, ASiteSpecies, MetalSpecies, ModelParameters};
