//! # 子格模型
//!
//! 根据 Wyckoff 位置把位点划分到子格，并生成端元取代所需的
//! 模板结构与模板配置。
//!
//! 子格划分只由几何决定：分析前把所有位点替换为同一哑元素，
//! 已有的化学有序对划分没有影响。
//!
//! ## 依赖关系
//! - 被 `builders/endmember.rs` 与 `commands/endmember.rs` 使用
//! - 使用 `symmetry/` 能力接口与 `models/elements.rs`

use crate::error::Result;
use crate::models::elements::symbol_from_z;
use crate::models::Structure;
use crate::symmetry::SymmetryAnalyzer;

use std::collections::BTreeMap;

/// 几何探针所用的哑元素
const PROBE_ELEMENT: &str = "H";

/// 位点属性键：所属子格名称
pub const SUBLATTICE_SITES_KEY: &str = "sublattice_sites";

/// 求结构的子格划分
///
/// 返回 `(site_labels, sublattice_names)`：
/// - `site_labels` 与位点列表逐位对应，给出每个位点的（合并后）Wyckoff 字母；
/// - `sublattice_names` 是去重后按字典序排列的子格名称，
///   该顺序决定与模板配置及候选元素列表的位置对应关系。
///
/// `equivalent_wyckoff_sites` 可把若干 Wyckoff 字母合并为同一子格，
/// 例如 `{"b": "f"}` 把所有 "b" 位点并入 "f" 子格；不在映射中的
/// 字母原样通过。
pub fn get_sublattice_information(
    analyzer: &dyn SymmetryAnalyzer,
    structure: &Structure,
    equivalent_wyckoff_sites: Option<&BTreeMap<String, String>>,
) -> Result<(Vec<String>, Vec<String>)> {
    // 几何探针：统一物种后再做对称性分析
    let probe = structure.with_uniform_species(PROBE_ELEMENT);
    let dataset = analyzer.analyze(&probe)?;

    let site_labels: Vec<String> = dataset
        .wyckoffs
        .iter()
        .map(|w| match equivalent_wyckoff_sites {
            Some(map) => map.get(w).unwrap_or(w).clone(),
            None => w.clone(),
        })
        .collect();

    let mut sublattice_names: Vec<String> = site_labels.clone();
    sublattice_names.sort();
    sublattice_names.dedup();

    Ok((site_labels, sublattice_names))
}

/// 生成模板结构与模板配置
///
/// 第 `i` 个子格（排序后）的所有位点被替换为原子序数 `i+1` 的
/// 占位元素；占位元素按同一顺序收集为模板配置。每个位点的属性包
/// 额外记录 `sublattice_sites`（合并后的 Wyckoff 字母）。
///
/// 不变式：模板配置长度等于子格数量，模板结构中每个位点的物种都
/// 是前 N 个原子序数对应的占位元素之一。
pub fn get_templates(
    analyzer: &dyn SymmetryAnalyzer,
    structure: &Structure,
    equivalent_wyckoff_sites: Option<&BTreeMap<String, String>>,
) -> Result<(Structure, Vec<String>)> {
    let (site_labels, sublattice_names) =
        get_sublattice_information(analyzer, structure, equivalent_wyckoff_sites)?;

    let mut template = structure.clone();
    for (site, label) in template.sites.iter_mut().zip(site_labels.iter()) {
        site.properties
            .insert(SUBLATTICE_SITES_KEY.to_string(), label.clone());
    }

    let mut template_configuration = Vec::with_capacity(sublattice_names.len());
    for (i, name) in sublattice_names.iter().enumerate() {
        let placeholder = symbol_from_z(i + 1)?;
        for (site, label) in template.sites.iter_mut().zip(site_labels.iter()) {
            if label == name {
                site.element = placeholder.to_string();
            }
        }
        template_configuration.push(placeholder.to_string());
    }

    Ok((template, template_configuration))
}
