//! # 取代引擎
//!
//! 把模板结构中的占位元素整体替换为具体元素。
//! 位点数量、坐标与属性包保持不变，只改物种。
//!
//! ## 依赖关系
//! - 被 `builders/endmember.rs` 使用
//! - 使用 `models/structure.rs`

use crate::error::{DftKitError, Result};
use crate::models::Structure;

use std::collections::BTreeMap;

/// 按配置取代占位元素
///
/// `assignment` 与 `template_configuration` 逐位对应：占位元素
/// `template_configuration[i]` 的所有位点替换为 `assignment[i]`。
///
/// 失败：
/// - 两个列表长度不一致 → `ConfigMismatch`
/// - 某个占位元素在模板中没有任何位点 → `Substitution`
pub fn substitute_configuration(
    template: &Structure,
    template_configuration: &[String],
    assignment: &[String],
) -> Result<Structure> {
    if template_configuration.len() != assignment.len() {
        return Err(DftKitError::ConfigMismatch {
            expected: template_configuration.len(),
            found: assignment.len(),
        });
    }

    for placeholder in template_configuration {
        if !template.sites.iter().any(|s| &s.element == placeholder) {
            return Err(DftKitError::Substitution {
                placeholder: placeholder.clone(),
            });
        }
    }

    let mapping: BTreeMap<&str, &str> = template_configuration
        .iter()
        .map(String::as_str)
        .zip(assignment.iter().map(String::as_str))
        .collect();

    let mut out = template.clone();
    for site in &mut out.sites {
        if let Some(&replacement) = mapping.get(site.element.as_str()) {
            site.element = replacement.to_string();
        }
    }

    Ok(out)
}
