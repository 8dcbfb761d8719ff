//! # 日志后端
//!
//! 为 `log` 门面提供终端输出实现，样式与 `utils/output.rs` 一致，写到 stderr。
//!
//! ## 日志级别
//! - 默认 `warn`
//! - `-v` 为 `debug`，`-vv` 及以上为 `trace`
//! - 环境变量 `PEROVSKITE_LOG` 优先（error / warn / info / debug / trace）
//!
//! ## 依赖关系
//! - 被 `main.rs` 初始化
//! - 使用 `log`, `colored` crate

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// 日志级别环境变量
pub const LOG_ENV: &str = "PEROVSKITE_LOG";

struct TerminalLogger;

static LOGGER: TerminalLogger = TerminalLogger;

impl Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let tag = match record.level() {
            Level::Error => "[ERR]".red().bold(),
            Level::Warn => "[WARN]".yellow().bold(),
            Level::Info => "[*]".blue().bold(),
            Level::Debug => "[DBG]".cyan(),
            Level::Trace => "[TRC]".dimmed(),
        };
        eprintln!("{} {}", tag, record.args());
    }

    fn flush(&self) {}
}

/// 由 `-v` 次数得到日志级别
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// 解析级别名称
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    match name.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// 安装日志后端，重复调用无副作用
pub fn init(verbose: u8) {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or_else(|| level_from_verbosity(verbose));

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_from_verbosity(1), LevelFilter::Debug);
        assert_eq!(level_from_verbosity(5), LevelFilter::Trace);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" warning "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("loud"), None);
    }
}
