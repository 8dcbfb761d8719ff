//! # 能带数据模型
//!
//! k 点、能带对、能带统计量以及一次计算的完整结果。
//!
//! ## 依赖关系
//! - 被 `tb/` 各计算模块产生
//! - 被 `tb/export.rs` 和 `validation/` 消费

use super::species::{ASiteSpecies, MetalSpecies};
use serde::{Deserialize, Serialize};

/// 倒空间采样点（晶格常数取 1）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KPoint {
    pub kx: f64,
    pub ky: f64,
    pub kz: f64,
}

impl KPoint {
    pub fn new(kx: f64, ky: f64, kz: f64) -> Self {
        KPoint { kx, ky, kz }
    }
}

/// 跃迁积分计算结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoppingResult {
    /// 有效跃迁积分 (eV)
    pub hopping_integral: f64,
    /// 归一化角向重叠因子，[0, 1]
    pub overlap_factor: f64,
}

/// 价带 / 导带能量序列，与 k 路径逐点对齐
///
/// 只能通过 `push` 追加本征值对，保证每个 k 点上 valence <= conduction。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BandPair {
    valence: Vec<f64>,
    conduction: Vec<f64>,
}

impl BandPair {
    pub fn with_capacity(capacity: usize) -> Self {
        BandPair {
            valence: Vec::with_capacity(capacity),
            conduction: Vec::with_capacity(capacity),
        }
    }

    /// 追加一个 k 点的两个本征值，较小者进入价带
    pub fn push(&mut self, a: f64, b: f64) {
        let (low, high) = if b < a { (b, a) } else { (a, b) };
        self.valence.push(low);
        self.conduction.push(high);
    }

    pub fn valence(&self) -> &[f64] {
        &self.valence
    }

    pub fn conduction(&self) -> &[f64] {
        &self.conduction
    }

    pub fn len(&self) -> usize {
        self.valence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valence.is_empty()
    }

    /// 逐点迭代 (valence, conduction)
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.valence
            .iter()
            .copied()
            .zip(self.conduction.iter().copied())
    }
}

/// 能带统计量
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandStats {
    /// 导带带宽 (eV)，>= 0
    pub band_width: f64,
    /// 带隙 (eV)，负值表示价带与导带重叠
    pub band_gap: f64,
}

/// 一次能带计算的完整结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputeResult {
    pub bands: BandPair,
    pub overlap_factor: f64,
    #[serde(skip_serializing)]
    pub hopping_integral: f64,
    pub band_width: f64,
    pub band_gap: f64,
}

/// 一次重新计算的全部输入
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInput {
    pub metal: MetalSpecies,
    /// 仅记录，不参与计算
    pub a_site: ASiteSpecies,
    /// B-O-B 键角（度）
    pub angle_deg: f64,
    /// B-O 键长 (Å)
    pub bond_length: f64,
    /// k 路径每段点数
    pub resolution: usize,
}

impl Default for SimulationInput {
    fn default() -> Self {
        SimulationInput {
            metal: MetalSpecies::Ti,
            a_site: ASiteSpecies::default(),
            angle_deg: 180.0,
            bond_length: 1.96,
            resolution: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_pair_orders_each_point() {
        let mut bands = BandPair::with_capacity(2);
        bands.push(-6.0, -2.0);
        bands.push(3.0, -9.0);

        assert_eq!(bands.len(), 2);
        assert_eq!(bands.valence(), &[-6.0, -9.0]);
        assert_eq!(bands.conduction(), &[-2.0, 3.0]);
        for (v, c) in bands.iter() {
            assert!(v <= c);
        }
    }

    #[test]
    fn test_band_pair_degenerate_point() {
        let mut bands = BandPair::default();
        assert!(bands.is_empty());
        bands.push(-4.0, -4.0);
        assert_eq!(bands.valence()[0], bands.conduction()[0]);
    }

    #[test]
    fn test_compute_result_json_fields() {
        let mut bands = BandPair::default();
        bands.push(-1.0, 1.0);
        let result = ComputeResult {
            bands,
            overlap_factor: 1.0,
            hopping_integral: 2.2,
            band_width: 0.0,
            band_gap: 2.0,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["bands"]["valence"][0], -1.0);
        assert_eq!(value["bands"]["conduction"][0], 1.0);
        assert_eq!(value["overlap_factor"], 1.0);
        assert_eq!(value["band_gap"], 2.0);
        assert!(value.get("hopping_integral").is_none());
    }

    #[test]
    fn test_default_input_is_ideal_titanate() {
        let input = SimulationInput::default();
        assert_eq!(input.metal, MetalSpecies::Ti);
        assert_eq!(input.a_site.symbol(), "Ca");
        assert_eq!(input.angle_deg, 180.0);
        assert_eq!(input.bond_length, 1.96);
        assert_eq!(input.resolution, 50);
    }
}
