//! # scan 子命令实现
//!
//! 在键角范围内并行计算重叠因子、带宽和带隙。
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的 ScanArgs
//! - 使用 `tb/sweep.rs` 并行计算，`tb/export.rs` 导出

use crate::cli::scan::ScanArgs;
use crate::error::{PerovskiteError, Result};
use crate::models::configure;
use crate::tb::{export, generate_k_path, sweep, SweepPoint, SweepRunner};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 扫描表行
#[derive(Tabled)]
struct ScanRow {
    #[tabled(rename = "B-O-B (°)")]
    angle: String,
    #[tabled(rename = "Overlap")]
    overlap: String,
    #[tabled(rename = "t (eV)")]
    hopping: String,
    #[tabled(rename = "Width CB (eV)")]
    band_width: String,
    #[tabled(rename = "Gap (eV)")]
    band_gap: String,
}

/// 执行键角扫描
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Bond Angle Scan");

    let (start, end) = parse_range(&args.range)?;
    let angles = sweep::angle_grid(start, end, args.step)?;

    super::warn_unknown_metal(&args.metal);
    let params = configure(&args.metal);

    // 路径与键角无关，全部扫描点共享
    let k_path = generate_k_path(args.resolution as usize)?;

    let runner = SweepRunner::new(args.jobs);
    output::print_info(&format!(
        "{} angles from {:.1}° to {:.1}° ({} k-points each, {} jobs)",
        angles.len(),
        start,
        end,
        k_path.len(),
        runner.jobs()
    ));

    let points = runner.run(&angles, args.bond_length, &k_path, &params)?;

    print_scan_table(&points);

    if let Some(ref path) = args.output {
        export::sweep_to_csv(&points, path)?;
        output::print_success(&format!("Scan saved to '{}'", path.display()));
    }

    output::print_separator();
    output::print_done(&format!("Scanned {} angles", points.len()));
    Ok(())
}

/// 解析键角范围 "min-max"
fn parse_range(range: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = range.split('-').collect();
    if parts.len() != 2 {
        return Err(PerovskiteError::InvalidRange(range.to_string()));
    }

    let min: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|_| PerovskiteError::InvalidRange(range.to_string()))?;
    let max: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| PerovskiteError::InvalidRange(range.to_string()))?;

    if min < 0.0 || max < min || max > 180.0 {
        return Err(PerovskiteError::InvalidRange(format!(
            "{} (must be 0 <= min <= max <= 180)",
            range
        )));
    }

    Ok((min, max))
}

/// 打印扫描表
fn print_scan_table(points: &[SweepPoint]) {
    let rows: Vec<ScanRow> = points
        .iter()
        .map(|p| ScanRow {
            angle: format!("{:.2}", p.angle_deg),
            overlap: format!("{:.4}", p.overlap_factor),
            hopping: format!("{:.4}", p.hopping_integral),
            band_width: format!("{:.3}", p.band_width),
            band_gap: format!("{:.3}", p.band_gap),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header("Overlap and Band Statistics vs Bond Angle");
        println!("{}", Table::new(&rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("120-180").unwrap(), (120.0, 180.0));
        assert_eq!(parse_range(" 90 - 150.5").unwrap(), (90.0, 150.5));
        assert_eq!(parse_range("150-150").unwrap(), (150.0, 150.0));
    }

    #[test]
    fn test_parse_range_rejects_bad_input() {
        for bad in ["180", "a-b", "180-120", "100-200", "1-2-3"] {
            assert!(
                matches!(parse_range(bad), Err(PerovskiteError::InvalidRange(_))),
                "{} should be rejected",
                bad
            );
        }
    }
}
