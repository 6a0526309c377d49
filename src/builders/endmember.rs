//! # 端元生成
//!
//! 枚举每个子格一种元素的全部组合，逐一做占位取代，
//! 得到配置空间的所有端元结构。
//!
//! ## 依赖关系
//! - 被 `commands/endmember.rs` 使用
//! - 使用 `builders/substitution.rs`

use crate::builders::substitution::substitute_configuration;
use crate::error::{DftKitError, Result};
use crate::models::Structure;

/// 枚举端元结构
///
/// `sublattice_configuration[i]` 是子格 `i` 上允许的候选元素列表，
/// 与 `template_configuration` 逐位对应。输出按笛卡尔积标准顺序
/// （最右轴变化最快），轴顺序即模板配置顺序（原子序数顺序），
/// 共 `n1 * n2 * ... * nk` 个结构。
///
/// 失败（快速失败）：
/// - 候选列表数量与模板配置长度不符 → `ConfigMismatch`
/// - 某个候选列表为空 → `EmptyCandidateList`
/// - 取代引擎错误原样传播
pub fn get_endmembers_with_templates(
    template_structure: &Structure,
    template_configuration: &[String],
    sublattice_configuration: &[Vec<String>],
) -> Result<Vec<Structure>> {
    if sublattice_configuration.len() != template_configuration.len() {
        return Err(DftKitError::ConfigMismatch {
            expected: template_configuration.len(),
            found: sublattice_configuration.len(),
        });
    }
    for (index, candidates) in sublattice_configuration.iter().enumerate() {
        if candidates.is_empty() {
            return Err(DftKitError::EmptyCandidateList {
                index,
                placeholder: template_configuration[index].clone(),
            });
        }
    }

    let axes = sublattice_configuration.len();
    if axes == 0 {
        return Ok(vec![template_structure.clone()]);
    }

    let mut endmembers = Vec::new();
    let mut indices = vec![0usize; axes];
    loop {
        let assignment: Vec<String> = indices
            .iter()
            .zip(sublattice_configuration.iter())
            .map(|(&i, candidates)| candidates[i].clone())
            .collect();
        endmembers.push(substitute_configuration(
            template_structure,
            template_configuration,
            &assignment,
        )?);

        // 进位：最右轴变化最快
        let mut axis = axes;
        loop {
            if axis == 0 {
                return Ok(endmembers);
            }
            axis -= 1;
            indices[axis] += 1;
            if indices[axis] < sublattice_configuration[axis].len() {
                break;
            }
            indices[axis] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lattice, Site};

    fn template() -> (Structure, Vec<String>) {
        let lattice = Lattice::from_parameters(5.64, 5.64, 5.64, 90.0, 90.0, 90.0);
        let sites = vec![
            Site::new("H", [0.0, 0.0, 0.0]),
            Site::new("H", [0.5, 0.5, 0.0]),
            Site::new("He", [0.5, 0.0, 0.5]),
            Site::new("He", [0.0, 0.5, 0.5]),
        ];
        (
            Structure::new("template", lattice, sites),
            vec!["H".to_string(), "He".to_string()],
        )
    }

    fn lists(lists: &[&[&str]]) -> Vec<Vec<String>> {
        lists
            .iter()
            .map(|l| l.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_rocksalt_two_endmembers() {
        let (t, config) = template();
        let subl = lists(&[&["Na", "K"], &["Cl"]]);

        let endmembers = get_endmembers_with_templates(&t, &config, &subl).unwrap();

        assert_eq!(endmembers.len(), 2);
        assert_eq!(endmembers[0].formula(), "Cl2Na2");
        assert_eq!(endmembers[1].formula(), "Cl2K2");
    }

    #[test]
    fn test_endmember_count_is_product_of_list_sizes() {
        let (t, config) = template();
        let subl = lists(&[&["Na", "K", "Li"], &["Cl", "Br"]]);

        let endmembers = get_endmembers_with_templates(&t, &config, &subl).unwrap();
        assert_eq!(endmembers.len(), 6);
    }

    #[test]
    fn test_product_order_rightmost_axis_fastest() {
        let (t, config) = template();
        let subl = lists(&[&["Na", "K"], &["Cl", "Br"]]);

        let endmembers = get_endmembers_with_templates(&t, &config, &subl).unwrap();
        let anions: Vec<&str> = endmembers
            .iter()
            .map(|e| e.sites[2].element.as_str())
            .collect();
        let cations: Vec<&str> = endmembers
            .iter()
            .map(|e| e.sites[0].element.as_str())
            .collect();

        assert_eq!(anions, vec!["Cl", "Br", "Cl", "Br"]);
        assert_eq!(cations, vec!["Na", "Na", "K", "K"]);
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let (t, config) = template();
        let subl = lists(&[&["Na", "K"]]);

        let err = get_endmembers_with_templates(&t, &config, &subl).unwrap_err();
        assert!(matches!(err, DftKitError::ConfigMismatch { .. }));
    }

    #[test]
    fn test_empty_candidate_list_fails_fast() {
        let (t, config) = template();
        let subl = vec![vec!["Na".to_string()], Vec::new()];

        let err = get_endmembers_with_templates(&t, &config, &subl).unwrap_err();
        assert!(matches!(
            err,
            DftKitError::EmptyCandidateList { index: 1, .. }
        ));
    }

    #[test]
    fn test_substitution_failure_propagates() {
        let (t, _) = template();
        // 配置声称存在第三个占位元素 Li，但模板里没有
        let config = vec!["H".to_string(), "He".to_string(), "Li".to_string()];
        let subl = lists(&[&["Na"], &["Cl"], &["Mg"]]);

        let err = get_endmembers_with_templates(&t, &config, &subl).unwrap_err();
        assert!(matches!(err, DftKitError::Substitution { .. }));
    }
}
