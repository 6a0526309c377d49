//! # 对称性分析接口
//!
//! 将空间群/Wyckoff 分解抽象为可注入的能力接口，
//! 使结构生成逻辑可以用确定性假实现进行测试。
//!
//! ## 依赖关系
//! - 被 `builders/` 使用
//! - 子模块: moyo (生产实现)

pub mod moyo;

use crate::error::Result;
use crate::models::Structure;

pub use self::moyo::MoyoAnalyzer;

/// 一次对称性分析的结果
///
/// 两个序列都与结构的位点列表逐位对应。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetryDataset {
    /// 每个位点的 Wyckoff 字母
    pub wyckoffs: Vec<String>,

    /// 每个位点所属等价原子组的代表位点索引
    pub equivalent_atoms: Vec<usize>,
}

/// 对称性分析能力
///
/// 对固定结构必须是确定性的；几何退化时返回错误。
pub trait SymmetryAnalyzer {
    fn analyze(&self, structure: &Structure) -> Result<SymmetryDataset>;
}

/// 测试用假分析器：返回固定数据集，或在 `fail` 时固定失败
#[cfg(test)]
pub(crate) struct FakeAnalyzer {
    pub dataset: SymmetryDataset,
    pub fail: bool,
}

#[cfg(test)]
impl FakeAnalyzer {
    pub fn new(wyckoffs: &[&str], equivalent_atoms: &[usize]) -> Self {
        FakeAnalyzer {
            dataset: SymmetryDataset {
                wyckoffs: wyckoffs.iter().map(|s| s.to_string()).collect(),
                equivalent_atoms: equivalent_atoms.to_vec(),
            },
            fail: false,
        }
    }

    pub fn failing() -> Self {
        FakeAnalyzer {
            dataset: SymmetryDataset {
                wyckoffs: Vec::new(),
                equivalent_atoms: Vec::new(),
            },
            fail: true,
        }
    }
}

#[cfg(test)]
impl SymmetryAnalyzer for FakeAnalyzer {
    fn analyze(&self, _structure: &Structure) -> Result<SymmetryDataset> {
        if self.fail {
            return Err(crate::error::DftKitError::SymmetryAnalysis {
                reason: "degenerate lattice".to_string(),
            });
        }
        Ok(self.dataset.clone())
    }
}
