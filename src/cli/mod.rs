//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `bands`: 单个键角的能带计算
//! - `scan`: 键角扫描
//! - `validate`: 与参考数据交叉验证
//! - `reference`: 生成参考数据
//! - `species`: 列出金属参数
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: bands, scan, validate

pub mod bands;
pub mod scan;
pub mod validate;

use clap::{ArgAction, Parser, Subcommand};

/// perovskite - 畸变钙钛矿两带紧束缚能带计算
#[derive(Parser)]
#[command(name = "perovskite")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Two-band tight-binding band structure of distorted perovskites",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute valence/conduction bands for one B-O-B bond angle
    Bands(bands::BandsArgs),

    /// Sweep the bond angle and tabulate overlap, band width and band gap
    Scan(scan::ScanArgs),

    /// Cross-validate the engine against a reference JSON document
    Validate(validate::ValidateArgs),

    /// Write a reference JSON document computed by this engine
    Reference(validate::ReferenceArgs),

    /// List metal species and their model parameters
    Species,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_bands_defaults() {
        let cli = Cli::try_parse_from(["perovskite", "bands"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Bands(args) => {
                assert_eq!(args.metal, "Ti");
                assert_eq!(args.a_site, "Ca");
                assert_eq!(args.angle, 180.0);
                assert_eq!(args.bond_length, 1.96);
                assert!(args.output.is_none());
            }
            _ => panic!("expected bands"),
        }
    }

    #[test]
    fn test_parse_verbose_and_scan() {
        let cli = Cli::try_parse_from([
            "perovskite", "scan", "-vv", "--range", "90-180", "--step", "2.5", "-j", "4",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.range, "90-180");
                assert_eq!(args.step, 2.5);
                assert_eq!(args.jobs, 4);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_zero_resolution_rejected_by_parser() {
        assert!(Cli::try_parse_from(["perovskite", "bands", "--resolution", "0"]).is_err());
    }
}
