//! # 跃迁积分模型
//!
//! 有效跃迁积分 = 距离标度 × 角向重叠因子。
//!
//! ## 算法
//! 1. Harrison 标度: V(d) = V0 · (d0 / d)^3.5
//! 2. 倾角 τ = (180° - θ)，重叠因子 = |cos τ|
//! 3. t = V(d) · 重叠因子
//!
//! θ = 180° 时 B-O-B 为直线，重叠最大。θ 超出 [0°, 180°] 时公式仍有定义，
//! 结果原样返回，但已没有物理意义。
//!
//! ## 依赖关系
//! - 被 `tb/hamiltonian.rs`, `tb/sweep.rs` 调用
//! - 使用 `models/species.rs` 的 ModelParameters

use crate::error::{PerovskiteError, Result};
use crate::models::{HoppingResult, ModelParameters};

use std::f64::consts::PI;

/// Harrison d^-3.5 标度指数
pub const HARRISON_EXPONENT: f64 = 3.5;

/// 键长标度后的跃迁积分 (eV)
pub fn scaled_hopping(params: &ModelParameters, bond_length: f64) -> Result<f64> {
    // NaN 也在这里被拒绝
    if !(bond_length > 0.0) || !bond_length.is_finite() {
        return Err(PerovskiteError::InvalidBondLength(bond_length));
    }

    let v = params.reference_hopping
        * (params.reference_bond_length / bond_length).powf(HARRISON_EXPONENT);
    // 极短键长会让标度溢出为 inf
    if !v.is_finite() {
        return Err(PerovskiteError::InvalidBondLength(bond_length));
    }
    Ok(v)
}

/// 角向重叠因子 |cos(180° - θ)|
pub fn overlap_factor(angle_deg: f64) -> f64 {
    let tilt_rad = (180.0 - angle_deg) * PI / 180.0;
    tilt_rad.cos().abs()
}

/// 计算有效跃迁积分
pub fn compute_hopping(
    params: &ModelParameters,
    bond_length: f64,
    angle_deg: f64,
) -> Result<HoppingResult> {
    if !angle_deg.is_finite() {
        return Err(PerovskiteError::InvalidAngle(angle_deg));
    }

    let v_scaled = scaled_hopping(params, bond_length)?;
    let overlap = overlap_factor(angle_deg);

    if !(0.0..=180.0).contains(&angle_deg) {
        log::warn!(
            "bond angle {}° is outside [0°, 180°]; result is not physical",
            angle_deg
        );
    }

    Ok(HoppingResult {
        hopping_integral: v_scaled * overlap,
        overlap_factor: overlap,
    })
}
