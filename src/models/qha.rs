//! # QHA 聚合数据模型
//!
//! 存储静态/声子计算记录与准谐聚合结果。
//!
//! ## 依赖关系
//! - 被 `qha/` 与 `commands/qha.rs` 使用
//! - 使用 `serde` 序列化为 JSON

use crate::models::Structure;
use serde::{Deserialize, Serialize};

/// 单个静态计算记录（一个体积点）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticRecord {
    /// 计算标签（用于按作业检索）
    pub tag: String,

    /// 单胞体积 (Å³)
    pub volume: f64,

    /// 总能量 (eV)
    pub energy: f64,

    /// 是否通过筛选被采纳进入拟合
    pub adopted: bool,

    /// 计算所用结构（仅需一个用于化学式/元素信息）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<Structure>,
}

/// 单个声子计算记录（一个体积点的振动自由能）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhononRecord {
    /// 计算标签
    pub tag: String,

    /// 单胞体积 (Å³)
    pub volume: f64,

    /// 各温度点的振动自由能 F_vib (eV)
    pub f_vib: Vec<f64>,

    /// 是否采纳
    pub adopted: bool,
}

/// 0 K 状态方程拟合结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EosSummary {
    /// 状态方程名称
    pub name: String,

    /// 体模量 (GPa)
    #[serde(rename = "b0_GPa")]
    pub b0_gpa: f64,

    /// 体模量 (eV/Å³)
    pub b0: f64,

    /// 体模量压力导数
    pub b1: f64,

    /// 平衡体积 (Å³)
    pub eq_volume: f64,

    /// 平衡能量 (eV)
    pub eq_energy: f64,

    /// 参与拟合的能量（按体积升序）
    pub energies: Vec<f64>,

    /// 参与拟合的体积（升序）
    pub volumes: Vec<f64>,

    /// 拟合误差
    pub error: EosFitError,
}

/// EOS 拟合误差统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EosFitError {
    /// 逐体积点的残差 (fit - data)
    pub difference: Vec<f64>,

    /// 残差平方和
    pub sum_square_error: f64,
}

/// 温度网格设置
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TemperatureGrid {
    /// 最低温度 (K)
    pub t_min: f64,

    /// 最高温度 (K)，含端点
    pub t_max: f64,

    /// 温度步长 (K)
    pub t_step: f64,
}

impl TemperatureGrid {
    /// 展开为温度点列表
    pub fn points(&self) -> Vec<f64> {
        if self.t_step <= 0.0 {
            return vec![self.t_min];
        }
        let mut ts = Vec::new();
        let mut t = self.t_min;
        while t <= self.t_max + 1e-9 {
            ts.push(t);
            t += self.t_step;
        }
        ts
    }
}

/// QHA 聚合结果，落库/落盘的最终形态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QhaSummary {
    /// 检索标签
    pub tag: String,

    /// 约化化学式
    pub formula_pretty: String,

    /// 出现的元素（排序）
    pub elements: Vec<String>,

    /// 代表结构
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<Structure>,

    /// 是否存在足量声子计算
    pub has_phonon: bool,

    /// 温度网格
    pub temperatures: Vec<f64>,

    /// 0 K EOS 拟合
    pub eos: EosSummary,

    /// 按体积升序排列的 F_vib 矩阵（行=体积点），仅声子路径存在
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub f_vib: Option<Vec<Vec<f64>>>,

    /// 未采纳点的体积
    #[serde(rename = "Volumes_fitting_false")]
    pub volumes_fitting_false: Vec<f64>,

    /// 未采纳点的能量
    #[serde(rename = "Energies_fitting_false")]
    pub energies_fitting_false: Vec<f64>,

    /// 工具版本
    pub version_dftkit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_grid_points() {
        let grid = TemperatureGrid {
            t_min: 0.0,
            t_max: 100.0,
            t_step: 25.0,
        };
        assert_eq!(grid.points(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_temperature_grid_inclusive_end() {
        let grid = TemperatureGrid {
            t_min: 5.0,
            t_max: 15.0,
            t_step: 5.0,
        };
        assert_eq!(grid.points().len(), 3);
    }

    #[test]
    fn test_static_record_json_round_trip() {
        let rec = StaticRecord {
            tag: "abc".to_string(),
            volume: 11.2,
            energy: -3.5,
            adopted: true,
            structure: None,
        };
        let json = serde_json::to_string(&rec).unwrap();
        let back: StaticRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tag, "abc");
        assert!((back.volume - 11.2).abs() < 1e-12);
        assert!(back.adopted);
    }
}
