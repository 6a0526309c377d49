//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `endmember`: 从模板结构枚举端元
//! - `dilute`: 从端元生成稀释点缺陷结构
//! - `qha`: 聚合静态/声子计算并拟合 EOS
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: endmember, dilute, qha

pub mod dilute;
pub mod endmember;
pub mod qha;

use clap::{Parser, Subcommand};

/// dftkit - DFT 工作流便捷工具箱
#[derive(Parser)]
#[command(name = "dftkit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Convenience toolkit for DFT workflows", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate endmember structures from a template structure
    Endmember(endmember::EndmemberArgs),

    /// Generate dilute point-defect structures from endmembers
    Dilute(dilute::DiluteArgs),

    /// Aggregate finished DFT results, fit an EOS and persist a QHA summary
    Qha(qha::QhaArgs),
}
