//! # 结构生成模块
//!
//! 从模板结构派生取代结构：子格模型、端元枚举、稀释点缺陷。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `symmetry/`
//! - 子模块: sublattice, substitution, endmember, dilute

pub mod dilute;
pub mod endmember;
pub mod sublattice;
pub mod substitution;

pub use dilute::dilute_substitution;
pub use endmember::get_endmembers_with_templates;
pub use sublattice::{get_sublattice_information, get_templates};
pub use substitution::substitute_configuration;
