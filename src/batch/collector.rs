//! # 文件收集器
//!
//! 根据输入路径和模式收集待处理结构文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配
//! - 递归目录搜索
//!
//! ## 依赖关系
//! - 被 `commands/dilute.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 做模式匹配

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            patterns: vec!["*".to_string()],
            recursive: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.patterns = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if self.patterns.is_empty() {
            self.patterns = vec!["*".to_string()];
        }
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件，按路径排序保证确定性
    pub fn collect(&self) -> Vec<PathBuf> {
        if self.input.is_file() {
            return vec![self.input.clone()];
        }

        if !self.input.is_dir() {
            return vec![];
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_patterns(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, name: &str) -> bool {
        FileCollector::new(PathBuf::from("."))
            .with_pattern(pattern)
            .matches_patterns(Path::new(name))
    }

    #[test]
    fn test_pattern_matching() {
        assert!(matches("POSCAR*", "POSCAR"));
        assert!(matches("POSCAR*", "POSCAR_001"));
        assert!(matches("*.vasp", "endmember-0.vasp"));
        assert!(!matches("*.vasp", "endmember-0.cif"));
        assert!(matches("CONTCAR,POSCAR*", "CONTCAR"));
    }

    #[test]
    fn test_empty_pattern_falls_back_to_wildcard() {
        assert!(matches(" , ", "anything.vasp"));
    }

    #[test]
    fn test_missing_input_collects_nothing() {
        let collector = FileCollector::new(PathBuf::from("/nonexistent/path"));
        assert!(collector.collect().is_empty());
    }
}
