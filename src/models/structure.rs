//! # 晶体结构数据模型
//!
//! 定义统一的晶体结构表示。结构是值类型：所有变换返回新结构，
//! 不修改调用方持有的数据（写时复制语义）。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `builders/`, `symmetry/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 晶格参数表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建晶格
    /// 角度单位：度
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let alpha_rad = alpha.to_radians();
        let beta_rad = beta.to_radians();
        let gamma_rad = gamma.to_radians();

        let cos_alpha = alpha_rad.cos();
        let cos_beta = beta_rad.cos();
        let cos_gamma = gamma_rad.cos();
        let sin_gamma = gamma_rad.sin();

        let a_vec = [a, 0.0, 0.0];
        let b_vec = [b * cos_gamma, b * sin_gamma, 0.0];

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();
        let c_vec = [c1, c2, c3];

        Lattice {
            matrix: [a_vec, b_vec, c_vec],
        }
    }

    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let a_vec = self.matrix[0];
        let b_vec = self.matrix[1];
        let c_vec = self.matrix[2];

        let a = (a_vec[0].powi(2) + a_vec[1].powi(2) + a_vec[2].powi(2)).sqrt();
        let b = (b_vec[0].powi(2) + b_vec[1].powi(2) + b_vec[2].powi(2)).sqrt();
        let c = (c_vec[0].powi(2) + c_vec[1].powi(2) + c_vec[2].powi(2)).sqrt();

        let dot_bc: f64 = b_vec.iter().zip(c_vec.iter()).map(|(x, y)| x * y).sum();
        let dot_ac: f64 = a_vec.iter().zip(c_vec.iter()).map(|(x, y)| x * y).sum();
        let dot_ab: f64 = a_vec.iter().zip(b_vec.iter()).map(|(x, y)| x * y).sum();

        let alpha = (dot_bc / (b * c)).acos().to_degrees();
        let beta = (dot_ac / (a * c)).acos().to_degrees();
        let gamma = (dot_ab / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积
    pub fn volume(&self) -> f64 {
        let a = self.matrix[0];
        let b = self.matrix[1];
        let c = self.matrix[2];

        a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
            + a[2] * (b[0] * c[1] - b[1] * c[0])
    }
}

/// 原子位点
///
/// 每个位点携带元素符号、分数坐标和任意键值属性包。
/// 属性包用于标注子格归属（`sublattice_sites`）等派生信息。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// 元素符号
    pub element: String,

    /// 分数坐标 [x, y, z]
    pub position: [f64; 3],

    /// 位点属性包
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl Site {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Site {
            element: element.into(),
            position,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// 晶体结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    /// 结构名称
    pub name: String,

    /// 晶格
    pub lattice: Lattice,

    /// 位点列表
    pub sites: Vec<Site>,
}

impl Structure {
    pub fn new(name: impl Into<String>, lattice: Lattice, sites: Vec<Site>) -> Self {
        Structure {
            name: name.into(),
            lattice,
            sites,
        }
    }

    /// 位点数量
    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    /// 计算化学式
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

        for site in &self.sites {
            *counts.entry(site.element.as_str()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(el, count)| {
                if count == 1 {
                    el.to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// 按首次出现顺序列出出现的元素符号
    pub fn species(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for site in &self.sites {
            if !seen.contains(&site.element) {
                seen.push(site.element.clone());
            }
        }
        seen
    }

    /// 返回所有位点替换为同一元素的新结构（几何探针）
    ///
    /// 属性包与坐标保持不变，仅覆盖元素符号。
    pub fn with_uniform_species(&self, element: &str) -> Structure {
        let mut out = self.clone();
        for site in &mut out.sites {
            site.element = element.to_string();
        }
        out
    }

    /// 返回单一位点替换为指定元素的新结构
    ///
    /// `index` 越界时 panic；调用方负责传入合法位点索引。
    pub fn with_site_species(&self, index: usize, element: &str) -> Structure {
        let mut out = self.clone();
        out.sites[index].element = element.to_string();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rocksalt() -> Structure {
        let lattice = Lattice::from_parameters(5.64, 5.64, 5.64, 90.0, 90.0, 90.0);
        let sites = vec![
            Site::new("Na", [0.0, 0.0, 0.0]),
            Site::new("Na", [0.5, 0.5, 0.0]),
            Site::new("Na", [0.5, 0.0, 0.5]),
            Site::new("Na", [0.0, 0.5, 0.5]),
            Site::new("Cl", [0.5, 0.0, 0.0]),
            Site::new("Cl", [0.0, 0.5, 0.0]),
            Site::new("Cl", [0.0, 0.0, 0.5]),
            Site::new("Cl", [0.5, 0.5, 0.5]),
        ];
        Structure::new("NaCl", lattice, sites)
    }

    #[test]
    fn test_lattice_from_parameters_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let (a, b, c, alpha, beta, gamma) = lattice.parameters();

        assert!((a - 5.0).abs() < 1e-6);
        assert!((b - 5.0).abs() < 1e-6);
        assert!((c - 5.0).abs() < 1e-6);
        assert!((alpha - 90.0).abs() < 1e-6);
        assert!((beta - 90.0).abs() < 1e-6);
        assert!((gamma - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_lattice_volume_cubic() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        let vol = lattice.volume().abs();

        // 5^3 = 125
        assert!((vol - 125.0).abs() < 1e-6);
    }

    #[test]
    fn test_structure_formula() {
        let formula = rocksalt().formula();
        assert_eq!(formula, "Cl4Na4");
    }

    #[test]
    fn test_species_first_seen_order() {
        assert_eq!(rocksalt().species(), vec!["Na".to_string(), "Cl".to_string()]);
    }

    #[test]
    fn test_with_uniform_species_does_not_touch_geometry() {
        let s = rocksalt();
        let probe = s.with_uniform_species("H");

        assert_eq!(probe.num_sites(), s.num_sites());
        assert!(probe.sites.iter().all(|site| site.element == "H"));
        for (a, b) in probe.sites.iter().zip(s.sites.iter()) {
            assert_eq!(a.position, b.position);
        }
        // 原结构不受影响
        assert_eq!(s.sites[0].element, "Na");
    }

    #[test]
    fn test_with_site_species_changes_exactly_one_site() {
        let s = rocksalt();
        let swapped = s.with_site_species(4, "Br");

        assert_eq!(swapped.sites[4].element, "Br");
        let diffs = s
            .sites
            .iter()
            .zip(swapped.sites.iter())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(diffs, 1);
    }

    #[test]
    fn test_site_property_bag() {
        let site = Site::new("Fe", [0.0, 0.0, 0.0]).with_property("sublattice_sites", "a");
        assert_eq!(
            site.properties.get("sublattice_sites").map(String::as_str),
            Some("a")
        );
    }
}
