//! # dftkit - DFT 工作流便捷工具箱
//!
//! 为 DFT 工作流提供结构生成与结果聚合的便捷功能：
//! - 子格模型：按 Wyckoff 位置把位点划分到子格并生成取代模板
//! - 端元枚举：每个子格一种元素的全部组合
//! - 稀释取代：每个等价原子组一个代表位点的单点缺陷结构
//! - QHA 聚合：汇总静态/声子计算、拟合 EOS、写出摘要
//!
//! ## 模块结构
//! ```text
//! lib.rs
//!   ├── builders/   (结构生成核心)
//!   ├── symmetry/   (对称性分析能力接口 + moyo 实现)
//!   ├── qha/        (QHA 聚合任务)
//!   ├── models/     (数据模型)
//!   ├── parsers/    (格式解析器)
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── batch/      (批量文件收集)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

pub mod batch;
pub mod builders;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod parsers;
pub mod qha;
pub mod symmetry;
pub mod utils;

pub use builders::{
    dilute_substitution, get_endmembers_with_templates, get_sublattice_information,
    get_templates, substitute_configuration,
};
pub use error::{DftKitError, Result};
pub use models::{Lattice, Site, Structure};
pub use symmetry::{MoyoAnalyzer, SymmetryAnalyzer, SymmetryDataset};
