//! # 计算结果存储
//!
//! 定义 `CalcDatabase` 能力接口与 JSON 文件实现。
//! 真正的数据库后端由工作流引擎提供，这里的 JSON 存储服务于
//! CLI 与测试：单文件即一个按集合组织的文档。
//!
//! ## 依赖关系
//! - 被 `qha/mod.rs` 与 `commands/qha.rs` 使用
//! - 使用 `serde_json` 读写文档

use crate::error::{DftKitError, Result};
use crate::models::{PhononRecord, QhaSummary, StaticRecord};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 计算结果数据库能力
pub trait CalcDatabase {
    /// 按标签检索静态计算记录（按 `adopted` 过滤）
    fn static_calculations(&self, tag: &str, adopted: bool) -> Result<Vec<StaticRecord>>;

    /// 按标签检索已采纳的声子计算记录
    fn phonon_calculations(&self, tag: &str) -> Result<Vec<PhononRecord>>;

    /// 把聚合结果写入指定集合（"qha" 或 "qha_phonon"）
    fn insert_summary(&mut self, collection: &str, summary: &QhaSummary) -> Result<()>;
}

/// JSON 文档：顶层即各集合
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default, rename = "static")]
    statics: Vec<StaticRecord>,

    #[serde(default)]
    phonon: Vec<PhononRecord>,

    #[serde(default)]
    qha: Vec<QhaSummary>,

    #[serde(default)]
    qha_phonon: Vec<QhaSummary>,
}

/// 单文件 JSON 存储
pub struct JsonStore {
    path: PathBuf,
    document: StoreDocument,
}

impl JsonStore {
    /// 打开（或新建）存储文件
    pub fn open(path: &Path) -> Result<Self> {
        let document = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| DftKitError::FileReadError {
                path: path.display().to_string(),
                source: e,
            })?;
            serde_json::from_str(&content)?
        } else {
            StoreDocument::default()
        };
        Ok(JsonStore {
            path: path.to_path_buf(),
            document,
        })
    }

    fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.document)?;
        fs::write(&self.path, content).map_err(|e| DftKitError::FileWriteError {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

impl CalcDatabase for JsonStore {
    fn static_calculations(&self, tag: &str, adopted: bool) -> Result<Vec<StaticRecord>> {
        Ok(self
            .document
            .statics
            .iter()
            .filter(|r| r.tag == tag && r.adopted == adopted)
            .cloned()
            .collect())
    }

    fn phonon_calculations(&self, tag: &str) -> Result<Vec<PhononRecord>> {
        Ok(self
            .document
            .phonon
            .iter()
            .filter(|r| r.tag == tag && r.adopted)
            .cloned()
            .collect())
    }

    fn insert_summary(&mut self, collection: &str, summary: &QhaSummary) -> Result<()> {
        match collection {
            "qha" => self.document.qha.push(summary.clone()),
            "qha_phonon" => self.document.qha_phonon.push(summary.clone()),
            other => {
                return Err(DftKitError::InvalidArgument(format!(
                    "unknown collection: {}",
                    other
                )))
            }
        }
        self.save()
    }
}
