//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `tb/`, `validation/`, `utils/`
//! - 子模块: bands, scan, species, validate

pub mod bands;
pub mod scan;
pub mod species;
pub mod validate;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::MetalSpecies;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Bands(args) => bands::execute(args),
        Commands::Scan(args) => scan::execute(args),
        Commands::Validate(args) => validate::execute(args),
        Commands::Reference(args) => validate::execute_reference(args),
        Commands::Species => species::execute(),
    }
}

/// 未知金属使用默认 d 能级时给出提示，返回是否已提示
pub(crate) fn warn_unknown_metal(symbol: &str) -> bool {
    let unknown = !MetalSpecies::from_symbol(symbol).is_known();
    if unknown {
        output::print_warning(&format!(
            "Unknown metal '{}', using default d-level",
            symbol
        ));
    }
    unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_unknown_metal() {
        assert!(!warn_unknown_metal("Ti"));
        assert!(!warn_unknown_metal("Mn"));
        assert!(warn_unknown_metal("Zr"));
        assert!(warn_unknown_metal("mn"));
    }
}
