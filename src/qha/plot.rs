//! # E–V 曲线图
//!
//! 使用 `plotters` 绘制能量–体积散点与拟合的状态方程曲线。
//!
//! ## 依赖关系
//! - 被 `commands/qha.rs` 调用
//! - 使用 `qha/eos.rs` 的闭式 BM 能量
//! - 使用 `plotters` 渲染图表

use crate::error::{DftKitError, Result};
use crate::models::EosSummary;
use crate::qha::eos::birch_murnaghan_energy;

use plotters::prelude::*;
use std::path::Path;

/// 拟合曲线的采样点数
const CURVE_SAMPLES: usize = 200;

/// 生成 E–V 图 (PNG)
pub fn generate_ev_plot(
    eos: &EosSummary,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    if eos.volumes.is_empty() {
        return Err(DftKitError::PlotError("no E-V points to plot".to_string()));
    }

    let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| DftKitError::PlotError(format!("{:?}", e)))?;

    let v_min = eos.volumes.iter().cloned().fold(f64::INFINITY, f64::min);
    let v_max = eos.volumes.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let margin_v = 0.05 * (v_max - v_min).max(1e-6);

    let curve: Vec<(f64, f64)> = (0..=CURVE_SAMPLES)
        .map(|i| {
            let v = (v_min - margin_v)
                + (v_max - v_min + 2.0 * margin_v) * i as f64 / CURVE_SAMPLES as f64;
            (
                v,
                birch_murnaghan_energy(v, eos.eq_energy, eos.eq_volume, eos.b0, eos.b1),
            )
        })
        .collect();

    let e_min = curve
        .iter()
        .map(|(_, e)| *e)
        .chain(eos.energies.iter().cloned())
        .fold(f64::INFINITY, f64::min);
    let e_max = curve
        .iter()
        .map(|(_, e)| *e)
        .chain(eos.energies.iter().cloned())
        .fold(f64::NEG_INFINITY, f64::max);
    let margin_e = 0.05 * (e_max - e_min).max(1e-6);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (v_min - margin_v)..(v_max + margin_v),
            (e_min - margin_e)..(e_max + margin_e),
        )
        .map_err(|e| DftKitError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Volume (Å³)")
        .y_desc("Energy (eV)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| DftKitError::PlotError(format!("{:?}", e)))?;

    // 拟合曲线
    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            curve.into_iter(),
            line_color.stroke_width(2),
        ))
        .map_err(|e| DftKitError::PlotError(format!("{:?}", e)))?
        .label(eos.name.as_str())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], line_color.stroke_width(2))
        });

    // 数据点
    chart
        .draw_series(
            eos.volumes
                .iter()
                .zip(eos.energies.iter())
                .map(|(&v, &e)| Circle::new((v, e), 4, RED.filled())),
        )
        .map_err(|e| DftKitError::PlotError(format!("{:?}", e)))?
        .label("static calculations")
        .legend(|(x, y)| Circle::new((x + 9, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| DftKitError::PlotError(format!("{:?}", e)))?;

    root.present()
        .map_err(|e| DftKitError::PlotError(e.to_string()))?;

    Ok(())
}
