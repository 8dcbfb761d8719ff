//! # 键角扫描
//!
//! 在一组键角上并行重复完整的能带计算。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果按输入顺序返回
//! - 进度条显示
//! - 所有线程只读共享同一条 k 路径
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `tb/simulator.rs` 完成单点计算
//! - 使用 `utils/progress.rs` 创建进度条

use crate::error::{PerovskiteError, Result};
use crate::models::ModelParameters;
use crate::tb::kpath::KPath;
use crate::tb::simulator;
use crate::utils::progress;

use rayon::prelude::*;
use serde::Serialize;

/// 单个键角的扫描结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub angle_deg: f64,
    pub overlap_factor: f64,
    pub hopping_integral: f64,
    pub band_width: f64,
    pub band_gap: f64,
}

/// 单次扫描允许的最大键角数
pub const MAX_SCAN_POINTS: usize = 1_000_000;

/// 生成 [start, end] 内步长为 step 的键角序列（含端点）
pub fn angle_grid(start: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    if !(step > 0.0) || !step.is_finite() {
        return Err(PerovskiteError::InvalidArgument(format!(
            "angle step must be > 0, got {}",
            step
        )));
    }
    if !start.is_finite() || !end.is_finite() || end < start {
        return Err(PerovskiteError::InvalidRange(format!(
            "{}-{} (end must not be below start)",
            start, end
        )));
    }

    // 容差避免 (end - start)/step 的舍入丢掉终点
    let count = ((end - start) / step + 1e-9).floor() + 1.0;
    if !count.is_finite() || count > MAX_SCAN_POINTS as f64 {
        return Err(PerovskiteError::InvalidArgument(format!(
            "angle step {} gives more than {} scan points",
            step, MAX_SCAN_POINTS
        )));
    }

    let count = count as usize;
    Ok((0..count).map(|i| start + i as f64 * step).collect())
}

/// 并行扫描执行器
pub struct SweepRunner {
    /// 并行作业数
    jobs: usize,
}

impl SweepRunner {
    /// 创建新的扫描执行器，jobs = 0 表示使用全部 CPU
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 对每个键角做一次完整计算，任一点失败则整体失败
    pub fn run(
        &self,
        angles: &[f64],
        bond_length: f64,
        k_path: &KPath,
        params: &ModelParameters,
    ) -> Result<Vec<SweepPoint>> {
        let pb = progress::create_progress_bar(angles.len() as u64, "Scanning");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| PerovskiteError::Other(format!("Failed to build thread pool: {}", e)))?;

        let results: Result<Vec<SweepPoint>> = pool.install(|| {
            angles
                .par_iter()
                .map(|&angle_deg| -> Result<SweepPoint> {
                    let result = simulator::compute(angle_deg, bond_length, k_path, params)?;
                    pb.inc(1);
                    Ok(SweepPoint {
                        angle_deg,
                        overlap_factor: result.overlap_factor,
                        hopping_integral: result.hopping_integral,
                        band_width: result.band_width,
                        band_gap: result.band_gap,
                    })
                })
                .collect()
        });

        pb.finish_and_clear();
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::configure;
    use crate::tb::kpath::generate_k_path;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_grid_includes_end() {
        let grid = angle_grid(120.0, 180.0, 5.0).unwrap();
        assert_eq!(grid.len(), 13);
        assert_eq!(grid[0], 120.0);
        assert_eq!(grid[12], 180.0);
    }

    #[test]
    fn test_angle_grid_fractional_step() {
        let grid = angle_grid(170.0, 180.0, 0.1).unwrap();
        assert_eq!(grid.len(), 101);
        assert_relative_eq!(grid[100], 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_grid_single_point() {
        assert_eq!(angle_grid(150.0, 150.0, 1.0).unwrap(), vec![150.0]);
    }

    #[test]
    fn test_angle_grid_rejects_bad_input() {
        assert!(angle_grid(120.0, 180.0, 0.0).is_err());
        assert!(angle_grid(120.0, 180.0, -1.0).is_err());
        assert!(angle_grid(180.0, 120.0, 5.0).is_err());
        assert!(angle_grid(120.0, 180.0, f64::NAN).is_err());
        assert!(angle_grid(120.0, 180.0, f64::INFINITY).is_err());
        assert!(angle_grid(f64::NAN, 180.0, 1.0).is_err());
    }

    #[test]
    fn test_angle_grid_caps_point_count() {
        for step in [1e-300, 1e-12, 1e-5] {
            assert!(matches!(
                angle_grid(0.0, 180.0, step),
                Err(PerovskiteError::InvalidArgument(_))
            ));
        }
        let grid = angle_grid(0.0, 180.0, 0.001).unwrap();
        assert_eq!(grid.len(), 180_001);
        assert!(grid.len() < MAX_SCAN_POINTS);
    }

    #[test]
    fn test_sweep_preserves_order_and_matches_serial() {
        let params = configure("Ti");
        let path = generate_k_path(20).unwrap();
        let angles = angle_grid(90.0, 180.0, 10.0).unwrap();

        let points = SweepRunner::new(4)
            .run(&angles, 1.96, &path, &params)
            .unwrap();

        assert_eq!(points.len(), angles.len());
        for (point, &angle) in points.iter().zip(&angles) {
            assert_eq!(point.angle_deg, angle);
            let serial = simulator::compute(angle, 1.96, &path, &params).unwrap();
            assert_eq!(point.band_width, serial.band_width);
            assert_eq!(point.band_gap, serial.band_gap);
            assert_eq!(point.overlap_factor, serial.overlap_factor);
        }
    }

    #[test]
    fn test_band_width_grows_toward_straight_bond() {
        let params = configure("Ti");
        let path = generate_k_path(20).unwrap();
        let angles = angle_grid(90.0, 180.0, 15.0).unwrap();
        let points = SweepRunner::new(2)
            .run(&angles, 1.96, &path, &params)
            .unwrap();

        for pair in points.windows(2) {
            assert!(pair[1].band_width >= pair[0].band_width);
        }
    }

    #[test]
    fn test_sweep_propagates_errors() {
        let params = configure("Ti");
        let path = generate_k_path(5).unwrap();
        let result = SweepRunner::new(1)
            .run(&[150.0, 180.0], 0.0, &path, &params);
        assert!(matches!(result, Err(PerovskiteError::InvalidBondLength(_))));
    }

    #[test]
    fn test_zero_jobs_uses_all_cpus() {
        assert_eq!(SweepRunner::new(0).jobs(), num_cpus::get());
        assert_eq!(SweepRunner::new(3).jobs(), 3);
    }
}
