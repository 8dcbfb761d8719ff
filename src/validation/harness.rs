//! # 交叉验证
//!
//! 用本程序重新计算参考文档中的每个场景，逐项比较绝对误差。
//!
//! ## 比较项
//! - 重叠因子、带宽、带隙
//! - 价带与导带在 k 路径首点、中点、末点的能量
//!
//! 全部误差小于容差（默认 1e-5）时场景通过。
//!
//! ## 依赖关系
//! - 被 `commands/validate.rs` 调用
//! - 使用 `tb/simulator.rs` 计算，`validation/ground_truth.rs` 读取参考值

use crate::error::{PerovskiteError, Result};
use crate::models::{ComputeResult, MetalSpecies, ModelParameters};
use crate::tb::kpath::{generate_k_path, KPath};
use crate::tb::simulator;
use crate::validation::ground_truth::{GroundTruth, ScenarioTruth};

/// 默认容差
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// 参考数据使用的每段 k 点数
pub const REFERENCE_RESOLUTION: usize = 50;

/// 验证场景
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub label: String,
    pub angle_deg: f64,
    pub bond_length: f64,
}

impl Scenario {
    pub fn new(label: impl Into<String>, angle_deg: f64, bond_length: f64) -> Self {
        Scenario {
            label: label.into(),
            angle_deg,
            bond_length,
        }
    }
}

/// 参考文档中的标准场景
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Cubic (Ideal)", 180.0, 1.96),
        Scenario::new("Distorted (Tilted)", 150.0, 1.96),
    ]
}

/// 单项比较
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCheck {
    pub field: String,
    pub engine: f64,
    pub reference: f64,
    pub error: f64,
    pub passed: bool,
}

impl FieldCheck {
    fn new(field: impl Into<String>, engine: f64, reference: f64, tolerance: f64) -> Self {
        let error = (engine - reference).abs();
        FieldCheck {
            field: field.into(),
            engine,
            reference,
            error,
            // NaN 误差视为失败
            passed: error < tolerance,
        }
    }
}

/// 单个场景的比较结果
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub checks: Vec<FieldCheck>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &FieldCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// 整体验证报告
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub tolerance: f64,
    pub scenarios: Vec<ScenarioReport>,
    /// 参考文档中存在但未被比较的场景标签
    pub unchecked: Vec<String>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.scenarios.iter().all(|s| s.passed())
    }

    pub fn failed_count(&self) -> usize {
        self.scenarios.iter().filter(|s| !s.passed()).count()
    }
}

/// 采样索引：首点、中点、末点
pub fn sample_indices(len: usize) -> [usize; 3] {
    [0, len / 2, len.saturating_sub(1)]
}

/// 比较一次计算结果与参考值
pub fn compare(
    scenario: &Scenario,
    result: &ComputeResult,
    truth: &ScenarioTruth,
    tolerance: f64,
) -> Result<ScenarioReport> {
    let (ref_valence, ref_conduction) = truth.band_pair(&scenario.label)?;

    let mut checks = vec![
        FieldCheck::new("overlap_factor", result.overlap_factor, truth.overlap_factor, tolerance),
        FieldCheck::new("band_width", result.band_width, truth.band_width, tolerance),
        FieldCheck::new("band_gap", result.band_gap, truth.band_gap, tolerance),
    ];

    for idx in sample_indices(result.bands.len()) {
        let (Some(&vb), Some(&cb)) = (ref_valence.get(idx), ref_conduction.get(idx)) else {
            return Err(PerovskiteError::ReferenceShape {
                label: scenario.label.clone(),
                reason: format!(
                    "k-point {} missing (reference has {} / {} points)",
                    idx,
                    ref_valence.len(),
                    ref_conduction.len()
                ),
            });
        };

        checks.push(FieldCheck::new(
            format!("valence[{}]", idx),
            result.bands.valence()[idx],
            vb,
            tolerance,
        ));
        checks.push(FieldCheck::new(
            format!("conduction[{}]", idx),
            result.bands.conduction()[idx],
            cb,
            tolerance,
        ));
    }

    Ok(ScenarioReport {
        scenario: scenario.clone(),
        checks,
    })
}

/// 对参考文档逐场景验证
pub fn validate(
    truth: &GroundTruth,
    scenarios: &[Scenario],
    k_path: &KPath,
    params: &ModelParameters,
    tolerance: f64,
) -> Result<ValidationReport> {
    let mut reports = Vec::with_capacity(scenarios.len());

    for scenario in scenarios {
        let expected = truth
            .get(&scenario.label)
            .ok_or_else(|| PerovskiteError::MissingScenario {
                label: scenario.label.clone(),
            })?;

        let result = simulator::compute(scenario.angle_deg, scenario.bond_length, k_path, params)?;
        let report = compare(scenario, &result, expected, tolerance)?;

        log::debug!(
            "scenario '{}': {}",
            scenario.label,
            if report.passed() { "pass" } else { "FAIL" }
        );
        reports.push(report);
    }

    let unchecked: Vec<String> = truth
        .keys()
        .filter(|label| !scenarios.iter().any(|s| &s.label == *label))
        .cloned()
        .collect();
    for label in &unchecked {
        log::warn!("reference scenario '{}' is not checked by this engine", label);
    }

    Ok(ValidationReport {
        tolerance,
        scenarios: reports,
        unchecked,
    })
}

/// 用本程序生成参考文档
pub fn generate_reference(
    scenarios: &[Scenario],
    metal: &MetalSpecies,
    resolution: usize,
) -> Result<GroundTruth> {
    let params = ModelParameters::for_species(metal);
    let k_path = generate_k_path(resolution)?;

    let mut truth = GroundTruth::new();
    for scenario in scenarios {
        let result = simulator::compute(scenario.angle_deg, scenario.bond_length, &k_path, &params)?;
        truth.insert(scenario.label.clone(), ScenarioTruth::from_result(&result));
    }

    Ok(truth)
}
