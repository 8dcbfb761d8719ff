//! # 能带计算流水线
//!
//! 将配置、跃迁模型、哈密顿量求解与能带统计串联为一次完整计算。
//!
//! ## 流程
//! 1. 按金属种类构造 ModelParameters（每次新建，不修改旧值）
//! 2. 从缓存取出对应分辨率的 k 路径
//! 3. 求解畸变结构（当前键角）与理想立方结构（180°）的能带
//! 4. 对畸变结构计算带宽、带隙
//!
//! ## 依赖关系
//! - 被 `commands/bands.rs` 调用
//! - 使用 `tb/kpath.rs`, `tb/hamiltonian.rs`, `tb/stats.rs`

use crate::error::Result;
use crate::models::{ComputeResult, ModelParameters, SimulationInput};
use crate::tb::hamiltonian;
use crate::tb::kpath::{KPath, KPathCache};
use crate::tb::stats;

use std::sync::Arc;

/// 理想立方结构的 B-O-B 键角（度）
pub const CUBIC_ANGLE_DEG: f64 = 180.0;

/// 在给定 k 路径上完成一次计算
pub fn compute(
    angle_deg: f64,
    bond_length: f64,
    k_path: &KPath,
    params: &ModelParameters,
) -> Result<ComputeResult> {
    let solution = hamiltonian::solve(angle_deg, bond_length, k_path, params)?;
    let band_stats = stats::compute_stats(solution.bands.valence(), solution.bands.conduction())?;

    Ok(ComputeResult {
        bands: solution.bands,
        overlap_factor: solution.hopping.overlap_factor,
        hopping_integral: solution.hopping.hopping_integral,
        band_width: band_stats.band_width,
        band_gap: band_stats.band_gap,
    })
}

/// 一次重新计算的完整报告
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub input: SimulationInput,
    pub params: ModelParameters,
    pub k_path: Arc<KPath>,
    /// 相同键长下的理想立方结构
    pub cubic: ComputeResult,
    /// 当前键角下的畸变结构
    pub distorted: ComputeResult,
}

/// 能带模拟器
///
/// 只持有按分辨率缓存的 k 路径，参数每次由输入重新构造。
#[derive(Debug, Default)]
pub struct Simulator {
    k_paths: KPathCache,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 对给定输入重新计算
    pub fn simulate(&mut self, input: &SimulationInput) -> Result<SimulationReport> {
        let params = ModelParameters::for_species(&input.metal);
        let k_path = self.k_paths.get(input.resolution)?;

        if !input.metal.is_known() {
            log::info!(
                "metal '{}' has no dedicated parameters, using Ed = {} eV",
                input.metal.symbol(),
                params.on_site_donor
            );
        }
        log::debug!(
            "A-site '{}' is recorded but does not enter the model",
            input.a_site
        );

        let distorted = compute(input.angle_deg, input.bond_length, &k_path, &params)?;
        let cubic = compute(CUBIC_ANGLE_DEG, input.bond_length, &k_path, &params)?;

        Ok(SimulationReport {
            input: input.clone(),
            params,
            k_path,
            cubic,
            distorted,
        })
    }
}
