//! # qha 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/qha.rs`

use clap::Args;
use std::path::PathBuf;

/// qha 子命令参数
#[derive(Args, Debug)]
pub struct QhaArgs {
    /// JSON results store holding static/phonon calculation records
    pub store: PathBuf,

    /// Tag identifying the calculations to aggregate
    #[arg(long)]
    pub tag: String,

    /// Minimum temperature (K)
    #[arg(long, default_value_t = 5.0)]
    pub t_min: f64,

    /// Maximum temperature (K), inclusive
    #[arg(long, default_value_t = 1000.0)]
    pub t_max: f64,

    /// Temperature step (K)
    #[arg(long, default_value_t = 5.0)]
    pub t_step: f64,

    /// Path for the JSON summary written next to the store
    #[arg(long, default_value = "qha_summary.json")]
    pub summary: PathBuf,

    /// Optional CSV export of the sorted E-V table
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Optional PNG plot of the E-V curve
    #[arg(long)]
    pub plot: Option<PathBuf>,
}
