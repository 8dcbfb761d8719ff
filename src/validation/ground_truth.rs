//! # 参考数据文档
//!
//! 场景标签 → {overlap_factor, band_width, band_gap, bands: [[VB...], [CB...]]}
//! 的 JSON 文档，字段名与外部生成器保持一致。
//!
//! ## 依赖关系
//! - 被 `validation/harness.rs` 使用
//! - 使用 `serde_json` 读写

use crate::error::{PerovskiteError, Result};
use crate::models::ComputeResult;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// 单个场景的参考值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTruth {
    pub overlap_factor: f64,
    pub band_width: f64,
    pub band_gap: f64,
    /// [价带, 导带]
    pub bands: Vec<Vec<f64>>,
}

impl ScenarioTruth {
    pub fn from_result(result: &ComputeResult) -> Self {
        ScenarioTruth {
            overlap_factor: result.overlap_factor,
            band_width: result.band_width,
            band_gap: result.band_gap,
            bands: vec![
                result.bands.valence().to_vec(),
                result.bands.conduction().to_vec(),
            ],
        }
    }

    /// 价带与导带，检查外层数组恰好两项
    pub fn band_pair(&self, label: &str) -> Result<(&[f64], &[f64])> {
        match self.bands.as_slice() {
            [valence, conduction] => Ok((valence.as_slice(), conduction.as_slice())),
            other => Err(PerovskiteError::ReferenceShape {
                label: label.to_string(),
                reason: format!("expected 2 bands, found {}", other.len()),
            }),
        }
    }
}

/// 参考数据文档，按标签有序
pub type GroundTruth = BTreeMap<String, ScenarioTruth>;

/// 读取参考数据文档
pub fn load(path: &Path) -> Result<GroundTruth> {
    if !path.exists() {
        return Err(PerovskiteError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let text = fs::read_to_string(path).map_err(|e| PerovskiteError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse(&text)
}

/// 从 JSON 文本解析参考数据
pub fn parse(text: &str) -> Result<GroundTruth> {
    Ok(serde_json::from_str(text)?)
}

/// 写出参考数据文档
pub fn save(truth: &GroundTruth, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| PerovskiteError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, truth)?;
    writeln!(writer).map_err(|e| PerovskiteError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Cubic (Ideal)": {
            "overlap_factor": 1.0,
            "band_width": 11.350655,
            "band_gap": 4.0,
            "bands": [[-17.35, -6.0], [9.35, -2.0]]
        }
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let truth = parse(SAMPLE).unwrap();
        let cubic = &truth["Cubic (Ideal)"];
        assert_eq!(cubic.overlap_factor, 1.0);

        let (vb, cb) = cubic.band_pair("Cubic (Ideal)").unwrap();
        assert_eq!(vb, &[-17.35, -6.0]);
        assert_eq!(cb, &[9.35, -2.0]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let text = r#"{"A": {"overlap_factor": 0.5, "band_width": 1.0, "band_gap": 2.0,
                       "bands": [[0.0], [1.0]], "angle": 150.0}}"#;
        assert!(parse(text).is_ok());
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let text = r#"{"A": {"overlap_factor": 0.5, "bands": [[0.0], [1.0]]}}"#;
        assert!(matches!(parse(text), Err(PerovskiteError::JsonError(_))));
    }

    #[test]
    fn test_wrong_band_count_rejected() {
        let truth = ScenarioTruth {
            overlap_factor: 1.0,
            band_width: 0.0,
            band_gap: 0.0,
            bands: vec![vec![0.0]],
        };
        assert!(matches!(
            truth.band_pair("X"),
            Err(PerovskiteError::ReferenceShape { .. })
        ));
    }

    #[test]
    fn test_save_then_load() {
        let mut truth = GroundTruth::new();
        truth.insert(
            "Only".to_string(),
            ScenarioTruth {
                overlap_factor: 0.75,
                band_width: 3.5,
                band_gap: -0.25,
                bands: vec![vec![-1.0, -2.0], vec![1.0, 2.0]],
            },
        );

        let path = std::env::temp_dir().join(format!(
            "perovskite_{}_truth.json",
            std::process::id()
        ));
        save(&truth, &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, truth);
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("/nonexistent/ground_truth.json");
        assert!(matches!(load(path), Err(PerovskiteError::FileNotFound { .. })));
    }
}
