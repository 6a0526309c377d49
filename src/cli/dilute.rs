//! # dilute 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/dilute.rs`

use clap::Args;
use std::path::PathBuf;

/// dilute 子命令参数
#[derive(Args, Debug)]
pub struct DiluteArgs {
    /// Input endmember structure file or directory
    pub input: PathBuf,

    /// Filename patterns when input is a directory (comma-separated)
    #[arg(long, default_value = "POSCAR*,CONTCAR*,*.vasp")]
    pub pattern: String,

    /// Search directories recursively
    #[arg(long, short = 'r')]
    pub recursive: bool,

    /// Candidate elements for substitution, comma-separated (e.g. Na,K,Mg)
    #[arg(long, required = true)]
    pub elements: String,

    /// Symmetry tolerance in Angstrom
    #[arg(long, default_value_t = 1e-4)]
    pub symprec: f64,

    /// Number of parallel jobs (0 = all logical cores)
    #[arg(long, short = 'j', default_value_t = 0)]
    pub jobs: usize,

    /// Output directory for dilute POSCAR files
    #[arg(long, default_value = "dilute")]
    pub output_dir: PathBuf,
}
