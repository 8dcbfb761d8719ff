//! # 统一错误处理模块
//!
//! 定义 perovskite 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// perovskite 统一错误类型
#[derive(Error, Debug)]
pub enum PerovskiteError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 物理参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid bond length: {0} Å (must be > 0)")]
    InvalidBondLength(f64),

    #[error("Invalid bond angle: {0}° (must be finite)")]
    InvalidAngle(f64),

    #[error("Invalid k-path resolution: {0} (must be >= 1 point per segment)")]
    InvalidResolution(usize),

    #[error("Band statistics require at least one k-point")]
    EmptyBands,

    #[error("Band length mismatch: valence has {valence} points, conduction has {conduction}")]
    BandLengthMismatch { valence: usize, conduction: usize },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid range format: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 数据格式错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // 交叉验证错误
    // ─────────────────────────────────────────────────────────────
    #[error("Scenario '{label}' not found in reference document")]
    MissingScenario { label: String },

    #[error("Reference data for '{label}' is malformed: {reason}")]
    ReferenceShape { label: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PerovskiteError>;
