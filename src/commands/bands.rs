//! # bands 子命令实现
//!
//! 计算当前键角的能带，同时给出相同键长下理想立方结构的对照。
//!
//! ## 功能
//! - 终端汇总表（重叠因子、跃迁积分、带宽、带隙）
//! - 能带采样表或完整能带表
//! - 导出数据文件 (CSV/JSON)
//!
//! ## 依赖关系
//! - 使用 `cli/bands.rs` 定义的 BandsArgs
//! - 使用 `tb/simulator.rs` 计算，`tb/export.rs` 导出

use crate::cli::bands::{BandsArgs, ExportFormat};
use crate::error::Result;
use crate::models::{ASiteSpecies, ComputeResult, MetalSpecies, SimulationInput};
use crate::tb::{export, KPath, SimulationReport, Simulator};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Structure")]
    structure: String,
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

/// 能带表行
#[derive(Tabled)]
struct BandRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "k")]
    label: String,
    #[tabled(rename = "(kx, ky, kz)")]
    k: String,
    #[tabled(rename = "VB (eV)")]
    valence: String,
    #[tabled(rename = "CB (eV)")]
    conduction: String,
}

/// 执行能带计算
pub fn execute(args: BandsArgs) -> Result<()> {
    output::print_header("Two-Band Tight-Binding Calculation");

    let input = SimulationInput {
        metal: MetalSpecies::from_symbol(&args.metal),
        a_site: ASiteSpecies::new(args.a_site.clone()),
        angle_deg: args.angle,
        bond_length: args.bond_length,
        resolution: args.resolution as usize,
    };

    super::warn_unknown_metal(&args.metal);
    output::print_info(&format!(
        "{}{}O3: B-O-B = {:.1}°, d(B-O) = {:.4} Å, {} k-points",
        input.a_site,
        input.metal.symbol(),
        input.angle_deg,
        input.bond_length,
        3 * input.resolution
    ));

    let mut simulator = Simulator::new();
    let report = simulator.simulate(&input)?;

    output::print_info(&format!(
        "Ed = {:.2} eV, Ep = {:.2} eV, V0 = {:.2} eV at d0 = {:.2} Å",
        report.params.on_site_donor,
        report.params.on_site_acceptor,
        report.params.reference_hopping,
        report.params.reference_bond_length
    ));

    print_summary(&report);
    print_band_table(&report.distorted, &report.k_path, args.full);

    if let Some(ref path) = args.output {
        let format = args
            .format
            .unwrap_or_else(|| guess_format_from_extension(path));
        write_output(&report.distorted, &report.k_path, path, format)?;
        output::print_success(&format!(
            "Bands ({}) saved to '{}'",
            format,
            path.display()
        ));
    }

    output::print_done("Calculation complete");
    Ok(())
}

/// 写出能带数据
fn write_output(
    result: &ComputeResult,
    k_path: &KPath,
    path: &Path,
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Csv => export::bands_to_csv(result, k_path, path),
        ExportFormat::Json => export::result_to_json(result, path),
    }
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> ExportFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("json") => ExportFormat::Json,
        _ => ExportFormat::Csv,
    }
}

/// 打印立方 / 畸变对照表
fn print_summary(report: &SimulationReport) {
    let row = |structure: &str, angle: f64, r: &ComputeResult| SummaryRow {
        structure: structure.to_string(),
        angle: format!("{:.1}", angle),
        overlap: format!("{:.3}", r.overlap_factor),
        hopping: format!("{:.4}", r.hopping_integral),
        band_width: format!("{:.2}", r.band_width),
        band_gap: format!("{:.2}", r.band_gap),
    };

    let rows = vec![
        row("Cubic (ideal)", 180.0, &report.cubic),
        row("Distorted", report.input.angle_deg, &report.distorted),
    ];

    output::print_header("Orbital Overlap and Band Statistics");
    println!("{}", Table::new(&rows));

    if report.distorted.band_gap < 0.0 {
        output::print_warning("Valence and conduction bands overlap (negative gap)");
    }
}

/// 打印能带表：默认只打印高对称点附近的采样
fn print_band_table(result: &ComputeResult, k_path: &KPath, full: bool) {
    let labels = k_path.label_indices();
    let label_of = |i: usize| {
        labels
            .iter()
            .find(|(idx, _)| *idx == i)
            .map(|(_, l)| l.to_string())
            .unwrap_or_default()
    };

    let n = k_path.points_per_segment();
    let indices: Vec<usize> = if full {
        (0..k_path.len()).collect()
    } else {
        let mut idx = vec![0, n / 2, n, n + n / 2, 2 * n, 2 * n + n / 2, 3 * n - 1];
        idx.dedup();
        idx
    };

    let rows: Vec<BandRow> = indices
        .into_iter()
        .filter(|&i| i < k_path.len())
        .map(|i| {
            let k = k_path.points()[i];
            BandRow {
                index: i,
                label: label_of(i),
                k: format!("({:.3}, {:.3}, {:.3})", k.kx, k.ky, k.kz),
                valence: format!("{:.4}", result.bands.valence()[i]),
                conduction: format!("{:.4}", result.bands.conduction()[i]),
            }
        })
        .collect();

    output::print_header("Band Energies along Γ-X-M-Γ");
    println!("{}", Table::new(&rows));
}
