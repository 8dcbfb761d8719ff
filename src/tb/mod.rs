//! # 两带紧束缚计算模块
//!
//! 提供畸变钙钛矿的两带紧束缚能带计算。
//!
//! ## 子模块
//! - `kpath`: Γ → X → M → Γ 路径采样与缓存
//! - `hopping`: 键长标度与角向重叠
//! - `hamiltonian`: 2×2 哈密顿量解析对角化
//! - `stats`: 带宽、带隙
//! - `simulator`: 完整计算流水线
//! - `sweep`: 并行键角扫描
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `validation/` 使用
//! - 使用 `models/` 的参数与结果结构

pub mod export;
pub mod hamiltonian;
pub mod hopping;
pub mod kpath;
pub mod simulator;
pub mod stats;
pub mod sweep;

pub use kpath::{generate_k_path, KPath};
pub use simulator::{SimulationReport, Simulator};
pub use sweep::{SweepPoint, SweepRunner};
