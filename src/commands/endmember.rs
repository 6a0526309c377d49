//! # endmember 命令实现
//!
//! 从输入结构建立子格模板并枚举全部端元，逐个写出 POSCAR。
//!
//! ## 依赖关系
//! - 使用 `cli/endmember.rs` 定义的参数
//! - 使用 `builders/sublattice.rs`, `builders/endmember.rs`
//! - 使用 `parsers/poscar.rs`, `utils/output.rs`

use crate::builders::{get_endmembers_with_templates, get_templates};
use crate::cli::endmember::EndmemberArgs;
use crate::error::{DftKitError, Result};
use crate::parsers;
use crate::parsers::poscar::write_poscar_file;
use crate::symmetry::MoyoAnalyzer;
use crate::utils::output;

use std::collections::BTreeMap;
use std::fs;
use tabled::{Table, Tabled};

/// 端元摘要行
#[derive(Debug, Tabled)]
struct EndmemberRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "File")]
    file: String,
}

/// 执行 endmember 命令
pub fn execute(args: EndmemberArgs) -> Result<()> {
    output::print_header("Enumerating Endmembers");

    let structure = parsers::parse_structure_file(&args.structure)?;
    output::print_info(&format!(
        "Input: {} ({}, {} sites)",
        args.structure.display(),
        structure.formula(),
        structure.num_sites()
    ));

    let merge_map = parse_merge_pairs(&args.merges)?;
    let analyzer = MoyoAnalyzer::new(args.symprec);

    let (template, template_configuration) =
        get_templates(&analyzer, &structure, merge_map.as_ref())?;
    output::print_info(&format!(
        "Detected {} sublattices (placeholders: {})",
        template_configuration.len(),
        template_configuration.join(", ")
    ));

    let sublattice_configuration: Vec<Vec<String>> = args
        .sublattices
        .iter()
        .map(|list| {
            list.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .collect();

    let endmembers = get_endmembers_with_templates(
        &template,
        &template_configuration,
        &sublattice_configuration,
    )?;

    fs::create_dir_all(&args.output_dir).map_err(|e| DftKitError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let mut rows = Vec::new();
    for (i, endmember) in endmembers.iter().enumerate() {
        let mut named = endmember.clone();
        named.name = named.formula();
        let filename = format!("EM{:03}_{}.vasp", i, named.name);
        let path = args.output_dir.join(&filename);
        write_poscar_file(&named, &path)?;

        rows.push(EndmemberRow {
            index: i,
            formula: named.name.clone(),
            file: filename,
        });
    }

    println!("{}", Table::new(&rows));
    output::print_done(&format!(
        "{} endmembers written to '{}'",
        endmembers.len(),
        args.output_dir.display()
    ));

    Ok(())
}

/// 解析 "b=f" 形式的合并映射
fn parse_merge_pairs(merges: &[String]) -> Result<Option<BTreeMap<String, String>>> {
    if merges.is_empty() {
        return Ok(None);
    }

    let mut map = BTreeMap::new();
    for pair in merges {
        let (from, to) = pair.split_once('=').ok_or_else(|| {
            DftKitError::InvalidArgument(format!(
                "merge pair '{}' is not of the form FROM=TO",
                pair
            ))
        })?;
        map.insert(from.trim().to_string(), to.trim().to_string());
    }
    Ok(Some(map))
}
