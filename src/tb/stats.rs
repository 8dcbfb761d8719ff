//! # 能带统计
//!
//! 带宽 = max(CB) - min(CB)，带隙 = min(CB) - max(VB)。
//!
//! ## 依赖关系
//! - 被 `tb/simulator.rs`, `tb/sweep.rs` 调用
//! - 使用 `models/band.rs` 的 BandStats

use crate::error::{PerovskiteError, Result};
use crate::models::BandStats;

/// 计算带宽和带隙
pub fn compute_stats(valence: &[f64], conduction: &[f64]) -> Result<BandStats> {
    if valence.is_empty() || conduction.is_empty() {
        return Err(PerovskiteError::EmptyBands);
    }
    if valence.len() != conduction.len() {
        return Err(PerovskiteError::BandLengthMismatch {
            valence: valence.len(),
            conduction: conduction.len(),
        });
    }

    let cb_max = conduction.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let cb_min = conduction.iter().copied().fold(f64::INFINITY, f64::min);
    let vb_max = valence.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(BandStats {
        band_width: cb_max - cb_min,
        band_gap: cb_min - vb_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::configure;
    use crate::tb::hamiltonian::solve;
    use crate::tb::kpath::generate_k_path;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_stats() {
        let stats = compute_stats(&[-5.0, -4.0, -4.5], &[1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.band_width, 2.0);
        assert_eq!(stats.band_gap, 5.0);
    }

    #[test]
    fn test_overlapping_bands_give_negative_gap() {
        let stats = compute_stats(&[-1.0, 2.0], &[0.5, 4.0]).unwrap();
        assert!(stats.band_gap < 0.0);
        assert!(stats.band_width >= 0.0);
        assert_eq!(stats.band_gap, -1.5);
    }

    #[test]
    fn test_empty_bands_rejected() {
        assert!(matches!(
            compute_stats(&[], &[]),
            Err(PerovskiteError::EmptyBands)
        ));
        assert!(matches!(
            compute_stats(&[1.0], &[]),
            Err(PerovskiteError::EmptyBands)
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(matches!(
            compute_stats(&[1.0, 2.0], &[3.0]),
            Err(PerovskiteError::BandLengthMismatch {
                valence: 2,
                conduction: 1
            })
        ));
    }

    #[test]
    fn test_cubic_ideal_stats_match_independent_reduction() {
        let params = configure("Ti");
        let path = generate_k_path(50).unwrap();
        let bands = solve(180.0, 1.96, &path, &params).unwrap().bands;
        assert_eq!(bands.len(), 150);

        let stats = compute_stats(bands.valence(), bands.conduction()).unwrap();

        let mut cb_sorted = bands.conduction().to_vec();
        cb_sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let mut vb_sorted = bands.valence().to_vec();
        vb_sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let width = cb_sorted[cb_sorted.len() - 1] - cb_sorted[0];
        let gap = cb_sorted[0] - vb_sorted[vb_sorted.len() - 1];
        assert_eq!(stats.band_width, width);
        assert_eq!(stats.band_gap, gap);

        assert_relative_eq!(stats.band_width, 11.35065541462291, epsilon = 1e-9);
        assert_relative_eq!(stats.band_gap, 4.0, epsilon = 1e-9);

        // 重复计算结果完全一致
        let again = compute_stats(bands.valence(), bands.conduction()).unwrap();
        assert_eq!(stats, again);
    }
}
