//! # 稀释取代
//!
//! 对每个端元结构，在每个等价原子组取一个代表位点，
//! 逐一换成候选元素，得到单点缺陷结构。
//!
//! ## 依赖关系
//! - 被 `commands/dilute.rs` 使用
//! - 使用 `symmetry/` 能力接口

use crate::error::Result;
use crate::models::Structure;
use crate::symmetry::SymmetryAnalyzer;

/// 生成稀释取代结构
///
/// 对每个输入结构做对称性分析（这里使用真实化学，不做哑元素
/// 归一化：缺陷位点的等价性依赖实际占据），按首见顺序在每个
/// 等价原子组取代表位点，再对每个候选元素生成一个仅该位点被
/// 替换的新结构；候选与当前元素相同时跳过。
///
/// 输出为平铺列表，顺序：输入结构 → 代表位点（首见序）→
/// 候选元素（调用方顺序）。任一结构的对称性分析失败将中止
/// 整个调用，不产生部分结果。
pub fn dilute_substitution(
    analyzer: &dyn SymmetryAnalyzer,
    structures: &[Structure],
    candidate_elements: &[String],
) -> Result<Vec<Structure>> {
    let mut dilute = Vec::new();

    for structure in structures {
        let dataset = analyzer.analyze(structure)?;

        // 每个等价原子组的代表位点：equivalent_atoms 值的首见序去重
        let mut representatives: Vec<usize> = Vec::new();
        for &rep in &dataset.equivalent_atoms {
            if !representatives.contains(&rep) {
                representatives.push(rep);
            }
        }

        for &site_index in &representatives {
            let current = structure.sites[site_index].element.clone();
            for candidate in candidate_elements {
                if *candidate != current {
                    dilute.push(structure.with_site_species(site_index, candidate));
                }
            }
        }
    }

    Ok(dilute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lattice, Site};
    use crate::symmetry::FakeAnalyzer;

    fn endmember(elements: &[&str]) -> Structure {
        let lattice = Lattice::from_parameters(4.0, 4.0, 4.0, 90.0, 90.0, 90.0);
        let sites = elements
            .iter()
            .enumerate()
            .map(|(i, el)| Site::new(*el, [0.25 * i as f64, 0.0, 0.0]))
            .collect();
        Structure::new("endmember", lattice, sites)
    }

    fn pool(elements: &[&str]) -> Vec<String> {
        elements.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_three_groups_candidate_pool_of_three() {
        // 3 个等价原子组，代表位点全是 Na，候选 ["Na","K","Mg"]
        // → 每个代表位点 2 个取代，共 6 个结构
        let s = endmember(&["Na", "Na", "Na", "Na", "Na", "Na"]);
        let analyzer = FakeAnalyzer::new(
            &["a", "a", "b", "b", "c", "c"],
            &[0, 0, 2, 2, 4, 4],
        );

        let out = dilute_substitution(&analyzer, &[s], &pool(&["Na", "K", "Mg"])).unwrap();
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_self_substitution_is_skipped() {
        let s = endmember(&["Na", "Cl"]);
        let analyzer = FakeAnalyzer::new(&["a", "b"], &[0, 1]);

        let out = dilute_substitution(&analyzer, &[s.clone()], &pool(&["Na", "Cl"])).unwrap();

        // 每个位点只有一个异种候选
        assert_eq!(out.len(), 2);
        for d in &out {
            assert_ne!(*d, s);
            let diffs = d
                .sites
                .iter()
                .zip(s.sites.iter())
                .filter(|(a, b)| a.element != b.element)
                .count();
            assert_eq!(diffs, 1);
        }
    }

    #[test]
    fn test_output_order_sites_then_candidates() {
        let s = endmember(&["Na", "Cl"]);
        let analyzer = FakeAnalyzer::new(&["a", "b"], &[0, 1]);

        let out = dilute_substitution(&analyzer, &[s], &pool(&["K", "Br"])).unwrap();

        assert_eq!(out.len(), 4);
        // 位点 0：K, Br；位点 1：K, Br
        assert_eq!(out[0].sites[0].element, "K");
        assert_eq!(out[1].sites[0].element, "Br");
        assert_eq!(out[2].sites[1].element, "K");
        assert_eq!(out[3].sites[1].element, "Br");
    }

    #[test]
    fn test_representative_is_first_of_each_group() {
        // 组代表由分析器给出（组的最小位点索引），去重按首见序
        let s = endmember(&["Na", "Na", "Cl", "Cl"]);
        let analyzer = FakeAnalyzer::new(&["a", "a", "b", "b"], &[0, 0, 2, 2]);

        let out = dilute_substitution(&analyzer, &[s.clone()], &pool(&["K"])).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].sites[0].element, "K");
        assert_eq!(out[0].sites[1].element, "Na");
        assert_eq!(out[1].sites[2].element, "K");
        assert_eq!(out[1].sites[3].element, "Cl");
    }

    #[test]
    fn test_multiple_structures_accumulate_in_order() {
        let a = endmember(&["Na"]);
        let b = endmember(&["K"]);
        let analyzer = FakeAnalyzer::new(&["a"], &[0]);

        let out = dilute_substitution(&analyzer, &[a, b], &pool(&["Na", "K"])).unwrap();

        // 结构 a：Na→K；结构 b：K→Na
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].sites[0].element, "K");
        assert_eq!(out[1].sites[0].element, "Na");
    }

    #[test]
    fn test_analysis_failure_aborts_whole_call() {
        let a = endmember(&["Na"]);
        let analyzer = FakeAnalyzer::failing();

        assert!(dilute_substitution(&analyzer, &[a], &pool(&["K"])).is_err());
    }
}
