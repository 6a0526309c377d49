//! # endmember 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/endmember.rs`

use clap::Args;
use std::path::PathBuf;

/// endmember 子命令参数
#[derive(Args, Debug)]
pub struct EndmemberArgs {
    /// Input structure file (POSCAR/CONTCAR/.vasp)
    pub structure: PathBuf,

    /// Candidate elements for one sublattice, comma-separated;
    /// repeat once per sublattice in sorted Wyckoff-letter order
    /// (e.g. --sublattice Na,K --sublattice Cl)
    #[arg(long = "sublattice", required = true)]
    pub sublattices: Vec<String>,

    /// Merge Wyckoff letters into one sublattice (e.g. --merge b=f)
    #[arg(long = "merge")]
    pub merges: Vec<String>,

    /// Symmetry tolerance in Angstrom
    #[arg(long, default_value_t = 1e-4)]
    pub symprec: f64,

    /// Output directory for endmember POSCAR files
    #[arg(long, default_value = "endmembers")]
    pub output_dir: PathBuf,
}
