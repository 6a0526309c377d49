//! # moyo 对称性分析器
//!
//! `SymmetryAnalyzer` 的生产实现，调用 `moyo` 计算空间群数据集，
//! 提取逐位点 Wyckoff 字母与等价原子轨道。
//!
//! ## 依赖关系
//! - 实现 `symmetry::SymmetryAnalyzer`
//! - 使用 `moyo`, `nalgebra`
//! - 使用 `models/elements.rs` 做符号 → Z 映射

use crate::error::{DftKitError, Result};
use crate::models::elements::atomic_number;
use crate::models::Structure;
use crate::symmetry::{SymmetryAnalyzer, SymmetryDataset};

use moyo::base::{AngleTolerance, Cell, Lattice};
use moyo::data::Setting;
use moyo::MoyoDataset;
use nalgebra::{Matrix3, Vector3};

/// 基于 moyo 的空间群分析器
pub struct MoyoAnalyzer {
    /// 位置容差 (Å)
    symprec: f64,
}

impl MoyoAnalyzer {
    pub fn new(symprec: f64) -> Self {
        MoyoAnalyzer { symprec }
    }
}

impl Default for MoyoAnalyzer {
    fn default() -> Self {
        MoyoAnalyzer::new(1e-4)
    }
}

impl SymmetryAnalyzer for MoyoAnalyzer {
    fn analyze(&self, structure: &Structure) -> Result<SymmetryDataset> {
        let m = structure.lattice.matrix;
        let lattice_mat = Matrix3::new(
            m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
        );

        // 退化晶格直接报错，不交给 moyo
        if lattice_mat.determinant().abs() < 1e-10 {
            return Err(DftKitError::SymmetryAnalysis {
                reason: "lattice determinant is zero".to_string(),
            });
        }

        let mut positions = Vec::with_capacity(structure.num_sites());
        let mut numbers = Vec::with_capacity(structure.num_sites());
        for site in &structure.sites {
            positions.push(Vector3::new(
                site.position[0],
                site.position[1],
                site.position[2],
            ));
            numbers.push(atomic_number(&site.element)? as i32);
        }

        let cell = Cell::new(Lattice::new(lattice_mat), positions, numbers);

        let dataset = MoyoDataset::new(
            &cell,
            self.symprec,
            AngleTolerance::Default,
            Setting::Spglib,
            true,
        )
        .map_err(|e| DftKitError::SymmetryAnalysis {
            reason: format!("moyo symmetry search failed: {:?}", e),
        })?;

        Ok(SymmetryDataset {
            wyckoffs: dataset.wyckoffs.iter().map(|w| w.to_string()).collect(),
            equivalent_atoms: dataset.orbits.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lattice as ModelLattice, Site};

    #[test]
    fn test_degenerate_lattice_is_rejected() {
        let lattice = ModelLattice::from_vectors([
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let structure = Structure::new("bad", lattice, vec![Site::new("H", [0.0, 0.0, 0.0])]);

        let result = MoyoAnalyzer::default().analyze(&structure);
        assert!(matches!(
            result,
            Err(DftKitError::SymmetryAnalysis { .. })
        ));
    }

    #[test]
    fn test_simple_cubic_single_orbit() {
        let lattice = ModelLattice::from_parameters(3.0, 3.0, 3.0, 90.0, 90.0, 90.0);
        let structure = Structure::new("Po", lattice, vec![Site::new("Po", [0.0, 0.0, 0.0])]);

        let dataset = MoyoAnalyzer::default().analyze(&structure).unwrap();
        assert_eq!(dataset.wyckoffs.len(), 1);
        assert_eq!(dataset.equivalent_atoms, vec![0]);
    }

    #[test]
    fn test_rocksalt_two_orbits() {
        let lattice = ModelLattice::from_parameters(5.64, 5.64, 5.64, 90.0, 90.0, 90.0);
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
        let structure = Structure::new("NaCl", lattice, sites);

        let dataset = MoyoAnalyzer::default().analyze(&structure).unwrap();
        assert_eq!(dataset.wyckoffs.len(), 8);

        let mut reps: Vec<usize> = dataset.equivalent_atoms.clone();
        reps.sort_unstable();
        reps.dedup();
        assert_eq!(reps.len(), 2);
    }
}
