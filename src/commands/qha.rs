//! # qha 命令实现
//!
//! 从 JSON 结果存储聚合静态/声子计算，拟合 EOS，写出摘要，
//! 可选导出 E-V 表与曲线图。
//!
//! ## 依赖关系
//! - 使用 `cli/qha.rs` 定义的参数
//! - 使用 `qha/` 聚合任务与 `qha/plot.rs`
//! - 使用 `utils/output.rs`

use crate::cli::qha::QhaArgs;
use crate::error::{DftKitError, Result};
use crate::models::{QhaSummary, TemperatureGrid};
use crate::qha::{plot, BirchMurnaghan, JsonStore, QhaAnalysis};
use crate::utils::output;

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// EOS 摘要行
#[derive(Debug, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 qha 命令
pub fn execute(args: QhaArgs) -> Result<()> {
    output::print_header("QHA Aggregation");

    let mut store = JsonStore::open(&args.store)?;
    let task = QhaAnalysis {
        tag: args.tag.clone(),
        temperatures: TemperatureGrid {
            t_min: args.t_min,
            t_max: args.t_max,
            t_step: args.t_step,
        },
    };

    output::print_info(&format!("Aggregating results for tag '{}'", args.tag));
    let summary = task.run(&mut store, &BirchMurnaghan)?;

    let rows = vec![
        SummaryRow {
            quantity: "Formula".to_string(),
            value: summary.formula_pretty.clone(),
        },
        SummaryRow {
            quantity: "E-V points".to_string(),
            value: summary.eos.volumes.len().to_string(),
        },
        SummaryRow {
            quantity: "V0 (Å³)".to_string(),
            value: format!("{:.4}", summary.eos.eq_volume),
        },
        SummaryRow {
            quantity: "E0 (eV)".to_string(),
            value: format!("{:.6}", summary.eos.eq_energy),
        },
        SummaryRow {
            quantity: "B0 (GPa)".to_string(),
            value: format!("{:.2}", summary.eos.b0_gpa),
        },
        SummaryRow {
            quantity: "B'".to_string(),
            value: format!("{:.3}", summary.eos.b1),
        },
        SummaryRow {
            quantity: "Sum square error".to_string(),
            value: format!("{:.3e}", summary.eos.error.sum_square_error),
        },
        SummaryRow {
            quantity: "Phonon path".to_string(),
            value: summary.has_phonon.to_string(),
        },
    ];
    println!("{}", Table::new(&rows));

    if !summary.volumes_fitting_false.is_empty() {
        output::print_warning(&format!(
            "{} static calculation(s) were rejected from the fit",
            summary.volumes_fitting_false.len()
        ));
    }

    write_summary(&summary, &args.summary)?;
    output::print_success(&format!("Summary written to '{}'", args.summary.display()));

    if let Some(csv_path) = &args.csv {
        write_ev_csv(&summary, csv_path)?;
        output::print_success(&format!("E-V table written to '{}'", csv_path.display()));
    }

    if let Some(plot_path) = &args.plot {
        let title = format!("{} ({})", summary.formula_pretty, summary.eos.name);
        plot::generate_ev_plot(&summary.eos, plot_path, &title, 1000, 750)?;
        output::print_success(&format!("E-V plot written to '{}'", plot_path.display()));
    }

    output::print_done("QHA aggregation finished");
    Ok(())
}

/// 写出 JSON 摘要
fn write_summary(summary: &QhaSummary, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(summary)?;
    fs::write(path, content).map_err(|e| DftKitError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 导出按体积升序的 E-V 表
fn write_ev_csv(summary: &QhaSummary, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["volume_A3", "energy_eV", "residual_eV"])?;
    for ((v, e), r) in summary
        .eos
        .volumes
        .iter()
        .zip(summary.eos.energies.iter())
        .zip(summary.eos.error.difference.iter())
    {
        writer.write_record([v.to_string(), e.to_string(), r.to_string()])?;
    }
    writer.flush().map_err(|e| DftKitError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
