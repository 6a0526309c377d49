//! # 统一错误处理模块
//!
//! 定义 dftkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// dftkit 统一错误类型
#[derive(Error, Debug)]
pub enum DftKitError {
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

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 对称性分析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Symmetry analysis failed: {reason}")]
    SymmetryAnalysis { reason: String },

    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),

    #[error("No element with atomic number {0}")]
    InvalidAtomicNumber(usize),

    // ─────────────────────────────────────────────────────────────
    // 结构生成错误
    // ─────────────────────────────────────────────────────────────
    #[error("Sublattice configuration mismatch: expected {expected} candidate lists, found {found}")]
    ConfigMismatch { expected: usize, found: usize },

    #[error("Empty candidate list for sublattice {index} ('{placeholder}')")]
    EmptyCandidateList { index: usize, placeholder: String },

    #[error("Substitution failed: placeholder '{placeholder}' matches no site in the template")]
    Substitution { placeholder: String },

    // ─────────────────────────────────────────────────────────────
    // QHA 聚合错误
    // ─────────────────────────────────────────────────────────────
    #[error("No adopted static calculations found for tag '{tag}'")]
    NoStaticResults { tag: String },

    #[error("EOS fit failed: {reason}")]
    EosFit { reason: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Plot error: {0}")]
    PlotError(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, DftKitError>;
