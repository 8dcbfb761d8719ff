//! # validate / reference 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/validate.rs`

use crate::validation::harness::REFERENCE_RESOLUTION;
use crate::validation::DEFAULT_TOLERANCE;

use clap::Args;
use std::path::PathBuf;

/// validate 子命令参数
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Reference JSON document (label -> overlap_factor, band_width, band_gap, bands)
    #[arg(default_value = "ground_truth.json")]
    pub reference: PathBuf,

    /// Absolute tolerance for every compared value
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE, env = "PEROVSKITE_TOLERANCE")]
    pub tolerance: f64,

    /// B-site metal symbol used for the engine side
    #[arg(short, long, default_value = "Ti")]
    pub metal: String,

    /// k-points per segment (must match the reference document)
    #[arg(
        short,
        long,
        default_value_t = REFERENCE_RESOLUTION as u32,
        env = "PEROVSKITE_RESOLUTION",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub resolution: u32,
}

/// reference 子命令参数
#[derive(Args, Debug)]
pub struct ReferenceArgs {
    /// Output JSON file
    #[arg(short, long, default_value = "ground_truth.json")]
    pub output: PathBuf,

    /// B-site metal symbol
    #[arg(short, long, default_value = "Ti")]
    pub metal: String,

    /// k-points per segment
    #[arg(
        short,
        long,
        default_value_t = REFERENCE_RESOLUTION as u32,
        env = "PEROVSKITE_RESOLUTION",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub resolution: u32,

    /// Overwrite an existing output file
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
