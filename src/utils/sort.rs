//! # 协同排序工具
//!
//! QHA 聚合要求能量、F_vib 等序列按体积升序对齐，
//! 这里提供按另一序列排序的通用函数。
//!
//! ## 依赖关系
//! - 被 `qha/` 使用
//! - 无外部依赖

/// 按 `y` 的升序重排 `x`
///
/// `y` 中出现 NaN 视为相等处理（不会 panic），调用方应保证
/// 体积等物理量是有限值。两序列长度必须一致。
pub fn sort_x_by_y<T: Clone>(x: &[T], y: &[f64]) -> Vec<T> {
    debug_assert_eq!(x.len(), y.len());

    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&a, &b| y[a].partial_cmp(&y[b]).unwrap_or(std::cmp::Ordering::Equal));
    order.iter().map(|&i| x[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_x_by_y() {
        let energies = vec![-1.0, -3.0, -2.0];
        let volumes = vec![12.0, 10.0, 11.0];

        assert_eq!(sort_x_by_y(&energies, &volumes), vec![-3.0, -2.0, -1.0]);
    }

    #[test]
    fn test_sort_preserves_ties_stably() {
        let labels = vec!["a", "b", "c"];
        let keys = vec![1.0, 1.0, 0.0];

        assert_eq!(sort_x_by_y(&labels, &keys), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_empty() {
        let x: Vec<f64> = Vec::new();
        assert!(sort_x_by_y(&x, &[]).is_empty());
    }
}
