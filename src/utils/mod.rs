//! # 工具函数模块
//!
//! 提供美化输出、进度条、协同排序等工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `qha/` 模块使用
//! - 子模块: output, progress, sort

pub mod output;
pub mod progress;
pub mod sort;
