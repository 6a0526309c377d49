//! # 批量处理模块
//!
//! 收集批量输入文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: collector

pub mod collector;

pub use collector::FileCollector;
