//! # 能带数据导出
//!
//! ## 支持格式
//! - CSV: 逐 k 点的能带表（index, kx, ky, kz, 价带, 导带）
//! - JSON: 完整计算结果（bands, overlap_factor, band_width, band_gap）
//! - 扫描 CSV: 每个键角一行的统计量
//!
//! ## 依赖关系
//! - 被 `commands/bands.rs`, `commands/scan.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件，`serde_json` 写入 JSON

use crate::error::{PerovskiteError, Result};
use crate::models::ComputeResult;
use crate::tb::kpath::KPath;
use crate::tb::sweep::SweepPoint;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// 导出能带为 CSV 格式
pub fn bands_to_csv(result: &ComputeResult, k_path: &KPath, output_path: &Path) -> Result<()> {
    if result.bands.len() != k_path.len() {
        return Err(PerovskiteError::Other(format!(
            "Band count ({}) does not match k-path length ({})",
            result.bands.len(),
            k_path.len()
        )));
    }

    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["index", "kx", "ky", "kz", "valence_ev", "conduction_ev"])?;

    for (i, (k, (valence, conduction))) in k_path.iter().zip(result.bands.iter()).enumerate() {
        wtr.write_record(&[
            i.to_string(),
            format!("{:.6}", k.kx),
            format!("{:.6}", k.ky),
            format!("{:.6}", k.kz),
            format!("{:.6}", valence),
            format!("{:.6}", conduction),
        ])?;
    }

    wtr.flush().map_err(|e| PerovskiteError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出完整结果为 JSON 格式
pub fn result_to_json(result: &ComputeResult, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|e| PerovskiteError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer).map_err(|e| PerovskiteError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出键角扫描为 CSV 格式
pub fn sweep_to_csv(points: &[SweepPoint], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "angle_deg",
        "overlap_factor",
        "hopping_ev",
        "band_width_ev",
        "band_gap_ev",
    ])?;

    for p in points {
        wtr.write_record(&[
            format!("{:.4}", p.angle_deg),
            format!("{:.6}", p.overlap_factor),
            format!("{:.6}", p.hopping_integral),
            format!("{:.6}", p.band_width),
            format!("{:.6}", p.band_gap),
        ])?;
    }

    wtr.flush().map_err(|e| PerovskiteError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::configure;
    use crate::tb::kpath::generate_k_path;
    use crate::tb::simulator::compute;

    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("perovskite_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_bands_to_csv() {
        let path = generate_k_path(4).unwrap();
        let result = compute(180.0, 1.96, &path, &configure("Ti")).unwrap();
        let out = temp_path("bands.csv");

        bands_to_csv(&result, &path, &out).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        fs::remove_file(&out).ok();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 12);
        assert_eq!(lines[0], "index,kx,ky,kz,valence_ev,conduction_ev");
        assert!(lines[1].starts_with("0,0.000000,0.000000,0.000000,-17.350655,9.350655"));
    }

    #[test]
    fn test_result_to_json_round_trip_values() {
        let path = generate_k_path(3).unwrap();
        let result = compute(150.0, 1.96, &path, &configure("Ti")).unwrap();
        let out = temp_path("result.json");

        result_to_json(&result, &out).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        fs::remove_file(&out).ok();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["bands"]["valence"].as_array().unwrap().len(), 9);
        assert_eq!(value["overlap_factor"].as_f64().unwrap(), result.overlap_factor);
        assert_eq!(value["band_gap"].as_f64().unwrap(), result.band_gap);
    }

    #[test]
    fn test_sweep_to_csv() {
        let points = vec![
            SweepPoint {
                angle_deg: 150.0,
                overlap_factor: 0.866025,
                hopping_integral: 1.905256,
                band_width: 9.605171,
                band_gap: 4.0,
            },
            SweepPoint {
                angle_deg: 180.0,
                overlap_factor: 1.0,
                hopping_integral: 2.2,
                band_width: 11.350655,
                band_gap: 4.0,
            },
        ];
        let out = temp_path("scan.csv");

        sweep_to_csv(&points, &out).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        fs::remove_file(&out).ok();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("180.0000,1.000000,2.200000"));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let short = generate_k_path(2).unwrap();
        let long = generate_k_path(3).unwrap();
        let result = compute(180.0, 1.96, &long, &configure("Ti")).unwrap();
        assert!(bands_to_csv(&result, &short, &temp_path("never.csv")).is_err());
    }
}
