//! # QHA 聚合任务
//!
//! 汇总已完成的静态/声子 DFT 计算：按体积升序对齐、拟合 0 K
//! 状态方程、组装摘要并写入数据库对应集合。准谐自由能本身不在
//! 此处计算，F_vib 仅做聚合搬运。
//!
//! ## 依赖关系
//! - 被 `commands/qha.rs` 调用
//! - 使用 `qha/eos.rs`, `qha/store.rs`, `utils/sort.rs`
//! - 子模块: eos, store, plot

pub mod eos;
pub mod plot;
pub mod store;

pub use eos::{BirchMurnaghan, EosFitter};
pub use store::{CalcDatabase, JsonStore};

use crate::error::{DftKitError, Result};
use crate::models::{QhaSummary, TemperatureGrid};
use crate::utils::sort::sort_x_by_y;

/// 声子路径的最小采纳记录数
const MIN_PHONON_CALCULATIONS: usize = 5;

/// QHA 聚合任务参数
pub struct QhaAnalysis {
    /// 检索标签
    pub tag: String,

    /// 温度网格
    pub temperatures: TemperatureGrid,
}

impl QhaAnalysis {
    /// 执行聚合
    ///
    /// 流程与失败语义：
    /// 1. 检索已采纳的静态计算；没有任何记录 → `NoStaticResults`。
    /// 2. 能量按体积升序协同排序后拟合 EOS，拟合失败原样传播。
    /// 3. 已采纳声子记录 ≥ 5 条时走声子路径（F_vib 行按体积排序
    ///    并入摘要），否则仅保留 EOS 结果。
    /// 4. 未采纳静态点的体积/能量原样记录，便于人工复查。
    /// 5. 摘要写入 `qha_phonon`（声子路径）或 `qha` 集合。
    pub fn run(
        &self,
        db: &mut dyn CalcDatabase,
        fitter: &dyn EosFitter,
    ) -> Result<QhaSummary> {
        let statics = db.static_calculations(&self.tag, true)?;
        if statics.is_empty() {
            return Err(DftKitError::NoStaticResults {
                tag: self.tag.clone(),
            });
        }

        let volumes: Vec<f64> = statics.iter().map(|r| r.volume).collect();
        let energies: Vec<f64> = statics.iter().map(|r| r.energy).collect();
        // 结构只取一个，用于化学式与元素表
        let structure = statics.iter().find_map(|r| r.structure.clone());

        // 全部按体积升序对齐；体积最后排，它是排序键
        let energies = sort_x_by_y(&energies, &volumes);
        let mut volumes = volumes;
        volumes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let eos = fitter.fit(&volumes, &energies)?;

        let phonons = db.phonon_calculations(&self.tag)?;
        let has_phonon = phonons.len() >= MIN_PHONON_CALCULATIONS;
        let f_vib = if has_phonon {
            let phonon_volumes: Vec<f64> = phonons.iter().map(|r| r.volume).collect();
            let rows: Vec<Vec<f64>> = phonons.iter().map(|r| r.f_vib.clone()).collect();
            Some(sort_x_by_y(&rows, &phonon_volumes))
        } else {
            None
        };

        let rejected = db.static_calculations(&self.tag, false)?;

        let (formula_pretty, elements) = match &structure {
            Some(s) => {
                let mut elements = s.species();
                elements.sort();
                (s.formula(), elements)
            }
            None => (String::new(), Vec::new()),
        };

        let summary = QhaSummary {
            tag: self.tag.clone(),
            formula_pretty,
            elements,
            structure,
            has_phonon,
            temperatures: self.temperatures.points(),
            eos,
            f_vib,
            volumes_fitting_false: rejected.iter().map(|r| r.volume).collect(),
            energies_fitting_false: rejected.iter().map(|r| r.energy).collect(),
            version_dftkit: env!("CARGO_PKG_VERSION").to_string(),
        };

        let collection = if has_phonon { "qha_phonon" } else { "qha" };
        db.insert_summary(collection, &summary)?;

        Ok(summary)
    }
}
