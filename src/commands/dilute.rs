//! # dilute 命令实现
//!
//! 收集端元 POSCAR，逐个生成稀释点缺陷结构并写出。
//! 各输入结构相互独立，用 rayon 并行处理，输出保持输入顺序。
//!
//! ## 依赖关系
//! - 使用 `cli/dilute.rs` 定义的参数
//! - 使用 `builders/dilute.rs`, `batch/collector.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`
//! - 使用 `rayon` 进行并行计算

use crate::batch::FileCollector;
use crate::builders::dilute_substitution;
use crate::cli::dilute::DiluteArgs;
use crate::error::{DftKitError, Result};
use crate::models::Structure;
use crate::parsers;
use crate::parsers::poscar::write_poscar_file;
use crate::symmetry::MoyoAnalyzer;
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// 执行 dilute 命令
pub fn execute(args: DiluteArgs) -> Result<()> {
    output::print_header("Generating Dilute Structures");

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect();
    if files.is_empty() {
        return Err(DftKitError::NoFilesFound {
            pattern: format!("{} ({})", args.input.display(), args.pattern),
        });
    }
    output::print_info(&format!("Found {} input structure(s)", files.len()));

    let elements: Vec<String> = args
        .elements
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if elements.is_empty() {
        return Err(DftKitError::InvalidArgument(
            "no candidate elements given".to_string(),
        ));
    }

    // 设置并行度
    let num_threads = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();

    let analyzer = MoyoAnalyzer::new(args.symprec);
    let pb = progress::create_progress_bar(files.len() as u64, "Substituting");

    // 并行处理，collect 保持输入顺序
    let results: Vec<(PathBuf, Result<Vec<Structure>>)> = files
        .par_iter()
        .map(|path| {
            let result = parsers::parse_structure_file(path)
                .and_then(|s| dilute_substitution(&analyzer, &[s], &elements));
            pb.inc(1);
            (path.clone(), result)
        })
        .collect();
    pb.finish_and_clear();

    fs::create_dir_all(&args.output_dir).map_err(|e| DftKitError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let mut written = 0usize;
    let mut failed = 0usize;
    for (path, result) in results {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("structure")
            .to_string();

        match result {
            Ok(dilute) => {
                for (j, structure) in dilute.iter().enumerate() {
                    let mut named = structure.clone();
                    named.name = named.formula();
                    let filename = format!("{}_dilute{:03}_{}.vasp", stem, j, named.name);
                    write_poscar_file(&named, &args.output_dir.join(filename))?;
                    written += 1;
                }
            }
            Err(e) => {
                failed += 1;
                output::print_error(&format!("{}: {}", path.display(), e));
            }
        }
    }

    if failed > 0 {
        output::print_warning(&format!("{} input(s) failed", failed));
    }
    output::print_done(&format!(
        "{} dilute structures written to '{}'",
        written,
        args.output_dir.display()
    ));

    Ok(())
}
