//! # 两带紧束缚哈密顿量求解器
//!
//! 每个 k 点构造 2×2 实对称矩阵并解析求本征值。
//!
//! ## 算法概述
//! 1. 简立方最近邻色散 f(k) = cos kx + cos ky + cos kz
//! 2. 非对角杂化项 V(k) = 2 t f(k)
//! 3. H(k) = | Ed    V(k) |
//!           | V(k)  Ep   |
//! 4. E± = tr/2 ± sqrt(max(0, tr²/4 - det))
//!
//! 各 k 点相互独立；跃迁积分 t 对整条路径只计算一次。
//!
//! ## 依赖关系
//! - 被 `tb/simulator.rs`, `tb/sweep.rs` 调用
//! - 使用 `tb/hopping.rs` 计算 t
//! - 使用 `tb/kpath.rs` 的 KPath

use crate::error::Result;
use crate::models::{BandPair, HoppingResult, KPoint, ModelParameters};
use crate::tb::hopping;
use crate::tb::kpath::KPath;

/// 单个 k 点上的 2×2 哈密顿量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoBandHamiltonian {
    /// 金属 d 在位能
    pub donor: f64,
    /// O 2p 在位能
    pub acceptor: f64,
    /// 非对角杂化项
    pub coupling: f64,
}

impl TwoBandHamiltonian {
    pub fn new(params: &ModelParameters, coupling: f64) -> Self {
        Self {
            donor: params.on_site_donor,
            acceptor: params.on_site_acceptor,
            coupling,
        }
    }

    pub fn trace(&self) -> f64 {
        self.donor + self.acceptor
    }

    pub fn determinant(&self) -> f64 {
        self.donor * self.acceptor - self.coupling * self.coupling
    }

    /// 本征值 (低, 高)
    pub fn eigenvalues(&self) -> (f64, f64) {
        let trace = self.trace();
        let discriminant = trace * trace / 4.0 - self.determinant();

        // 浮点误差可能使判别式略小于零
        let sqrt_disc = discriminant.max(0.0).sqrt();

        (trace / 2.0 - sqrt_disc, trace / 2.0 + sqrt_disc)
    }
}

/// 简立方最近邻色散因子
pub fn dispersion(k: &KPoint) -> f64 {
    k.kx.cos() + k.ky.cos() + k.kz.cos()
}

/// 沿 k 路径求解的能带及跃迁信息
#[derive(Debug, Clone)]
pub struct BandSolution {
    pub bands: BandPair,
    pub hopping: HoppingResult,
}

/// 沿整条 k 路径求解两带哈密顿量
pub fn solve(
    angle_deg: f64,
    bond_length: f64,
    k_path: &KPath,
    params: &ModelParameters,
) -> Result<BandSolution> {
    let hopping = hopping::compute_hopping(params, bond_length, angle_deg)?;
    let t = hopping.hopping_integral;

    log::debug!(
        "solving {} k-points: angle = {:.2}°, d = {:.4} Å, t = {:.6} eV",
        k_path.len(),
        angle_deg,
        bond_length,
        t
    );

    let mut bands = BandPair::with_capacity(k_path.len());

    for k in k_path.iter() {
        let interaction = 2.0 * t * dispersion(k);
        let (low, high) = TwoBandHamiltonian::new(params, interaction).eigenvalues();
        bands.push(low, high);
    }

    Ok(BandSolution { bands, hopping })
}
