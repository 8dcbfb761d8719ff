//! # perovskite - 畸变钙钛矿两带紧束缚能带计算
//!
//! 研究 B-O-B 键角弯曲如何改变 B d / O 2p 轨道重叠，以及由此产生的
//! 价带、导带、带宽与带隙。
//!
//! ## 子命令
//! - `bands`     - 单个键角的能带计算（附理想立方对照）
//! - `scan`      - 键角扫描
//! - `validate`  - 与参考数据交叉验证
//! - `reference` - 生成参考数据
//! - `species`   - 列出金属参数
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── tb/          (紧束缚计算)
//!   │     ├── validation/  (交叉验证)
//!   │     └── models/      (数据模型)
//!   ├── utils/      (输出、日志、进度条)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod tb;
mod utils;
mod validation;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logger::init(cli.verbose);

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
