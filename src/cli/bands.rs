//! # bands 子命令 CLI 定义
//!
//! 计算单个键角下的价带 / 导带，并与理想立方结构对比。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/bands.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 能带数据导出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSV table: index, kx, ky, kz, valence, conduction
    Csv,
    /// JSON document with bands and statistics
    Json,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// bands 子命令参数
#[derive(Args, Debug)]
pub struct BandsArgs {
    /// B-site metal symbol (Ti, Mn; others use default parameters)
    #[arg(short, long, default_value = "Ti")]
    pub metal: String,

    /// A-site cation symbol (recorded only; does not change the bands)
    #[arg(long, default_value = "Ca")]
    pub a_site: String,

    /// B-O-B bond angle in degrees (180 = ideal cubic)
    #[arg(short, long, default_value_t = 180.0, allow_negative_numbers = true)]
    pub angle: f64,

    /// B-O bond length in Å
    #[arg(short, long, default_value_t = 1.96)]
    pub bond_length: f64,

    /// k-points per segment of the Γ-X-M-Γ path
    #[arg(
        short,
        long,
        default_value_t = 50,
        env = "PEROVSKITE_RESOLUTION",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub resolution: u32,

    /// Write bands to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Print every k-point instead of a sampled table
    #[arg(long, default_value_t = false)]
    pub full: bool,
}
