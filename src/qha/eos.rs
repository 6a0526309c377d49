//! # 状态方程拟合
//!
//! 定义 `EosFitter` 能力接口，并提供 Birch–Murnaghan 实现。
//! BM 能量在 x = V^(-2/3) 下是三次多项式，可用线性最小二乘
//! 一次求解，无需迭代优化器。
//!
//! ## 依赖关系
//! - 被 `qha/mod.rs` 调用
//! - 使用 `nalgebra` 求解最小二乘
//! - 使用 `models/qha.rs` 的 EosSummary

use crate::error::{DftKitError, Result};
use crate::models::{EosFitError, EosSummary};

use nalgebra::{DMatrix, DVector};

/// eV/Å³ → GPa
pub const EV_PER_A3_TO_GPA: f64 = 160.21766208;

/// 0 K 状态方程拟合能力
pub trait EosFitter {
    /// 拟合 E(V)，`volumes` 与 `energies` 逐位对应
    fn fit(&self, volumes: &[f64], energies: &[f64]) -> Result<EosSummary>;
}

/// 三阶 Birch–Murnaghan 状态方程
pub struct BirchMurnaghan;

impl EosFitter for BirchMurnaghan {
    fn fit(&self, volumes: &[f64], energies: &[f64]) -> Result<EosSummary> {
        if volumes.len() != energies.len() {
            return Err(DftKitError::EosFit {
                reason: format!(
                    "{} volumes but {} energies",
                    volumes.len(),
                    energies.len()
                ),
            });
        }
        if volumes.len() < 4 {
            return Err(DftKitError::EosFit {
                reason: format!("need at least 4 E-V points, got {}", volumes.len()),
            });
        }
        if volumes.iter().any(|&v| v <= 0.0) {
            return Err(DftKitError::EosFit {
                reason: "non-positive volume in input".to_string(),
            });
        }

        // E(x) = a + b x + c x^2 + d x^3,  x = V^(-2/3)
        let xs: Vec<f64> = volumes.iter().map(|v| v.powf(-2.0 / 3.0)).collect();
        let design = DMatrix::from_fn(xs.len(), 4, |i, j| xs[i].powi(j as i32));
        let rhs = DVector::from_column_slice(energies);

        let svd = design.svd(true, true);
        let coeffs = svd
            .solve(&rhs, 1e-12)
            .map_err(|e| DftKitError::EosFit {
                reason: e.to_string(),
            })?;
        let (a, b, c, d) = (coeffs[0], coeffs[1], coeffs[2], coeffs[3]);

        // 平衡点：dE/dx = b + 2c x + 3d x^2 = 0，取 E_xx > 0 的根
        let x0 = if d.abs() < 1e-14 {
            if c.abs() < 1e-14 {
                return Err(DftKitError::EosFit {
                    reason: "degenerate fit: no curvature".to_string(),
                });
            }
            -b / (2.0 * c)
        } else {
            let disc = c * c - 3.0 * b * d;
            if disc < 0.0 {
                return Err(DftKitError::EosFit {
                    reason: "no real equilibrium volume".to_string(),
                });
            }
            let r1 = (-c + disc.sqrt()) / (3.0 * d);
            let r2 = (-c - disc.sqrt()) / (3.0 * d);
            // E_xx = 2c + 6d x
            let curvature = |x: f64| 2.0 * c + 6.0 * d * x;
            if r1 > 0.0 && curvature(r1) > 0.0 {
                r1
            } else {
                r2
            }
        };
        if x0 <= 0.0 {
            return Err(DftKitError::EosFit {
                reason: "equilibrium outside the physical branch".to_string(),
            });
        }

        let v0 = x0.powf(-1.5);
        let e0 = a + b * x0 + c * x0 * x0 + d * x0 * x0 * x0;
        let e_xx = 2.0 * c + 6.0 * d * x0;
        if e_xx <= 0.0 {
            return Err(DftKitError::EosFit {
                reason: "equilibrium is not a minimum".to_string(),
            });
        }

        // B0 = V0 E''(V0) = (4/9) E_xx V0^(-7/3)
        let b0 = (4.0 / 9.0) * e_xx * v0.powf(-7.0 / 3.0);
        // B' = 4 + 4 d x0 / E_xx（纯二次拟合时退化为 4）
        let b1 = 4.0 + 4.0 * d * x0 / e_xx;

        let predicted: Vec<f64> = xs
            .iter()
            .map(|&x| a + b * x + c * x * x + d * x * x * x)
            .collect();
        let difference: Vec<f64> = predicted
            .iter()
            .zip(energies.iter())
            .map(|(fit, e)| fit - e)
            .collect();
        let sum_square_error = difference.iter().map(|r| r * r).sum();

        Ok(EosSummary {
            name: "BirchMurnaghan".to_string(),
            b0_gpa: b0 * EV_PER_A3_TO_GPA,
            b0,
            b1,
            eq_volume: v0,
            eq_energy: e0,
            energies: energies.to_vec(),
            volumes: volumes.to_vec(),
            error: EosFitError {
                difference,
                sum_square_error,
            },
        })
    }
}

/// 按拟合参数求 Birch–Murnaghan 能量（用于绘图）
pub fn birch_murnaghan_energy(v: f64, e0: f64, v0: f64, b0: f64, b1: f64) -> f64 {
    let eta = (v0 / v).powf(2.0 / 3.0);
    e0 + 9.0 * v0 * b0 / 16.0
        * ((eta - 1.0).powi(3) * b1 + (eta - 1.0).powi(2) * (6.0 - 4.0 * eta))
}
