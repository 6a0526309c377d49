//! # 元素周期表查询
//!
//! 提供元素符号与原子序数之间的双向查询。
//! 子格模板只用它合成可区分的占位元素（Z=1..N），不涉及真实化学。
//!
//! ## 依赖关系
//! - 被 `builders/`, `symmetry/` 使用
//! - 纯静态数据，无外部依赖

use crate::error::{DftKitError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

/// 元素符号表，按原子序数排列（索引 0 对应 Z=1）
pub const ELEMENT_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn",
    "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// 符号 → 原子序数反查表
static ATOMIC_NUMBERS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    ELEMENT_SYMBOLS
        .iter()
        .enumerate()
        .map(|(i, &sym)| (sym, i + 1))
        .collect()
});

/// 按原子序数查询元素符号（Z=1..=118）
pub fn symbol_from_z(z: usize) -> Result<&'static str> {
    if z == 0 || z > ELEMENT_SYMBOLS.len() {
        return Err(DftKitError::InvalidAtomicNumber(z));
    }
    Ok(ELEMENT_SYMBOLS[z - 1])
}

/// 按元素符号查询原子序数
pub fn atomic_number(symbol: &str) -> Result<usize> {
    ATOMIC_NUMBERS
        .get(symbol)
        .copied()
        .ok_or_else(|| DftKitError::UnknownElement(symbol.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_from_z() {
        assert_eq!(symbol_from_z(1).unwrap(), "H");
        assert_eq!(symbol_from_z(2).unwrap(), "He");
        assert_eq!(symbol_from_z(26).unwrap(), "Fe");
        assert_eq!(symbol_from_z(118).unwrap(), "Og");
    }

    #[test]
    fn test_symbol_from_z_out_of_range() {
        assert!(symbol_from_z(0).is_err());
        assert!(symbol_from_z(119).is_err());
    }

    #[test]
    fn test_atomic_number() {
        assert_eq!(atomic_number("H").unwrap(), 1);
        assert_eq!(atomic_number("Na").unwrap(), 11);
        assert_eq!(atomic_number("U").unwrap(), 92);
    }

    #[test]
    fn test_atomic_number_unknown() {
        assert!(atomic_number("Xx").is_err());
    }

    #[test]
    fn test_round_trip() {
        for z in 1..=118 {
            let sym = symbol_from_z(z).unwrap();
            assert_eq!(atomic_number(sym).unwrap(), z);
        }
    }
}
