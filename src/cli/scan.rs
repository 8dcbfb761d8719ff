//! # scan 子命令 CLI 定义
//!
//! 在一段键角范围内重复能带计算。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// B-site metal symbol (Ti, Mn; others use default parameters)
    #[arg(short, long, default_value = "Ti")]
    pub metal: String,

    /// B-O bond length in Å
    #[arg(short, long, default_value_t = 1.96)]
    pub bond_length: f64,

    /// Bond angle range in degrees (e.g., "120-180")
    #[arg(long, default_value = "120-180")]
    pub range: String,

    /// Angle step in degrees
    #[arg(long, default_value_t = 5.0)]
    pub step: f64,

    /// k-points per segment of the Γ-X-M-Γ path
    #[arg(
        short,
        long,
        default_value_t = 50,
        env = "PEROVSKITE_RESOLUTION",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub resolution: u32,

    /// Write the scan table to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
