//! # 解析器模块
//!
//! 提供结构文件格式的解析与写出。目前支持 VASP POSCAR/CONTCAR。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: poscar

pub mod poscar;

use crate::error::{DftKitError, Result};
use crate::models::Structure;
use std::path::Path;

/// 从文件路径推断格式并解析
///
/// 无扩展名的文件（POSCAR、CONTCAR）按文件名判断。
pub fn parse_structure_file(path: &Path) -> Result<Structure> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_uppercase())
        .unwrap_or_default();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    if ext == "vasp" || stem.starts_with("POSCAR") || stem.starts_with("CONTCAR") {
        return poscar::parse_poscar_file(path);
    }

    Err(DftKitError::UnsupportedFormat(
        path.display().to_string(),
    ))
}
