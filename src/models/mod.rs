//! # 数据模型模块
//!
//! 定义统一的晶体结构、元素与 QHA 聚合数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `builders/`, `symmetry/`, `qha/` 使用
//! - 子模块: structure, elements, qha

pub mod elements;
pub mod qha;
pub mod structure;

pub use qha::{EosFitError, EosSummary, PhononRecord, QhaSummary, StaticRecord, TemperatureGrid};
pub use structure::{Lattice, Site, Structure};
