//! # VASP POSCAR 格式解析器
//!
//! 解析与写出 VASP POSCAR/CONTCAR 文件格式。
//!
//! ## POSCAR 格式说明
//! ```text
//! Comment line (structure name)
//! 1.0                    # scaling factor
//! a1 a2 a3               # lattice vector a
//! b1 b2 b3               # lattice vector b
//! c1 c2 c3               # lattice vector c
//! Element1 Element2 ...  # element symbols (VASP 5+)
//! n1 n2 ...              # number of atoms per element
//! Direct/Cartesian       # coordinate type
//! x1 y1 z1               # site positions
//! ...
//! ```
//!
//! 位点属性包是模型层概念，不进入 POSCAR；写出时按物种分组，
//! 组内保持位点原有顺序。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 与 `commands/` 使用
//! - 使用 `models/structure.rs`

use crate::error::{DftKitError, Result};
use crate::models::{Lattice, Site, Structure};
use std::fs;
use std::path::Path;

/// 解析 POSCAR/CONTCAR 文件
pub fn parse_poscar_file(path: &Path) -> Result<Structure> {
    let content = fs::read_to_string(path).map_err(|e| DftKitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_poscar_content(
        &content,
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown"),
    )
}

/// 从字符串内容解析 POSCAR 格式
pub fn parse_poscar_content(content: &str, default_name: &str) -> Result<Structure> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() < 8 {
        return Err(DftKitError::ParseError {
            format: "poscar".to_string(),
            path: default_name.to_string(),
            reason: "File too short".to_string(),
        });
    }

    // Line 0: Comment/name
    let name = lines[0].trim().to_string();
    let name = if name.is_empty() {
        default_name.to_string()
    } else {
        name
    };

    // Line 1: Scaling factor
    let scale: f64 = lines[1].trim().parse().unwrap_or(1.0);

    // Lines 2-4: Lattice vectors
    let mut matrix = [[0.0; 3]; 3];
    for i in 0..3 {
        let parts: Vec<f64> = lines[2 + i]
            .split_whitespace()
            .filter_map(|s| s.parse().ok())
            .collect();
        if parts.len() < 3 {
            return Err(DftKitError::ParseError {
                format: "poscar".to_string(),
                path: name.clone(),
                reason: format!("Invalid lattice vector at line {}", 3 + i),
            });
        }
        matrix[i] = [parts[0] * scale, parts[1] * scale, parts[2] * scale];
    }
    let lattice = Lattice::from_vectors(matrix);

    // Line 5: Element symbols (VASP 5+) or atom counts (VASP 4)
    let line5_parts: Vec<&str> = lines[5].split_whitespace().collect();
    if line5_parts.is_empty() {
        return Err(DftKitError::ParseError {
            format: "poscar".to_string(),
            path: name.clone(),
            reason: "Missing element/count line".to_string(),
        });
    }
    let (elements, counts, atom_line_start) = if line5_parts[0].parse::<i32>().is_ok() {
        // VASP 4 format: no element line, only counts
        let counts: Vec<usize> = line5_parts.iter().filter_map(|s| s.parse().ok()).collect();
        let elements: Vec<String> = (0..counts.len()).map(|i| format!("X{}", i + 1)).collect();
        (elements, counts, 6)
    } else {
        // VASP 5+ format: element symbols on line 5, counts on line 6
        let elements: Vec<String> = line5_parts.iter().map(|s| s.to_string()).collect();
        let counts: Vec<usize> = lines[6]
            .split_whitespace()
            .filter_map(|s| s.parse().ok())
            .collect();
        (elements, counts, 7)
    };

    // Check for "Selective dynamics" line
    let mut coord_line = atom_line_start;
    if lines.len() > coord_line
        && lines[coord_line]
            .trim()
            .to_lowercase()
            .starts_with("selective")
    {
        coord_line += 1;
    }

    if lines.len() <= coord_line {
        return Err(DftKitError::ParseError {
            format: "poscar".to_string(),
            path: name.clone(),
            reason: "Missing coordinate type line".to_string(),
        });
    }

    let coord_type = lines[coord_line].trim().to_lowercase();
    let is_cartesian = coord_type.starts_with('c') || coord_type.starts_with('k');

    // Parse site positions
    let mut sites: Vec<Site> = Vec::new();
    let mut line_idx = coord_line + 1;

    for (elem, &count) in elements.iter().zip(counts.iter()) {
        for _ in 0..count {
            if line_idx >= lines.len() {
                break;
            }
            let parts: Vec<f64> = lines[line_idx]
                .split_whitespace()
                .take(3)
                .filter_map(|s| s.parse().ok())
                .collect();

            if parts.len() >= 3 {
                let position = if is_cartesian {
                    cart_to_frac([parts[0], parts[1], parts[2]], &lattice)
                } else {
                    [parts[0], parts[1], parts[2]]
                };
                sites.push(Site::new(elem.clone(), position));
            }
            line_idx += 1;
        }
    }

    Ok(Structure::new(name, lattice, sites))
}

/// 笛卡尔坐标转分数坐标
fn cart_to_frac(cart: [f64; 3], lattice: &Lattice) -> [f64; 3] {
    let m = lattice.matrix;
    let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);

    if det.abs() < 1e-10 {
        return cart;
    }

    let inv = [
        [
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
        ],
        [
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
        ],
        [
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
        ],
    ];

    [
        inv[0][0] * cart[0] + inv[0][1] * cart[1] + inv[0][2] * cart[2],
        inv[1][0] * cart[0] + inv[1][1] * cart[1] + inv[1][2] * cart[2],
        inv[2][0] * cart[0] + inv[2][1] * cart[1] + inv[2][2] * cart[2],
    ]
}

/// 将 Structure 转换为 POSCAR 格式字符串
pub fn to_poscar_string(structure: &Structure) -> String {
    // 按物种分组，组内保持位点顺序
    let mut elem_order: Vec<&str> = Vec::new();
    for site in &structure.sites {
        if !elem_order.contains(&site.element.as_str()) {
            elem_order.push(&site.element);
        }
    }

    let mut result = String::new();

    // Line 0: Comment
    result.push_str(&format!("{}\n", structure.name));

    // Line 1: Scale
    result.push_str("1.0\n");

    // Lines 2-4: Lattice
    for row in &structure.lattice.matrix {
        result.push_str(&format!(
            "  {:16.10}  {:16.10}  {:16.10}\n",
            row[0], row[1], row[2]
        ));
    }

    // Line 5: Elements
    result.push_str(&format!("   {}\n", elem_order.join("   ")));

    // Line 6: Counts
    let counts: Vec<String> = elem_order
        .iter()
        .map(|e| {
            structure
                .sites
                .iter()
                .filter(|s| s.element == *e)
                .count()
                .to_string()
        })
        .collect();
    result.push_str(&format!("   {}\n", counts.join("   ")));

    // Coordinate type
    result.push_str("Direct\n");

    // Site positions
    for elem in &elem_order {
        for site in structure.sites.iter().filter(|s| s.element == *elem) {
            result.push_str(&format!(
                "  {:16.10}  {:16.10}  {:16.10}\n",
                site.position[0], site.position[1], site.position[2]
            ));
        }
    }

    result
}

/// 写出 POSCAR 文件
pub fn write_poscar_file(structure: &Structure, path: &Path) -> Result<()> {
    fs::write(path, to_poscar_string(structure)).map_err(|e| DftKitError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NACL_POSCAR: &str = "\
NaCl
1.0
  5.64 0.0 0.0
  0.0 5.64 0.0
  0.0 0.0 5.64
   Na   Cl
   2   2
Direct
  0.0 0.0 0.0
  0.5 0.5 0.0
  0.5 0.0 0.0
  0.5 0.5 0.5
";

    #[test]
    fn test_parse_poscar_basic() {
        let s = parse_poscar_content(NACL_POSCAR, "fallback").unwrap();

        assert_eq!(s.name, "NaCl");
        assert_eq!(s.num_sites(), 4);
        assert_eq!(s.sites[0].element, "Na");
        assert_eq!(s.sites[2].element, "Cl");
        assert!((s.lattice.matrix[0][0] - 5.64).abs() < 1e-10);
    }

    #[test]
    fn test_parse_poscar_with_scale() {
        let content = NACL_POSCAR.replacen("1.0", "2.0", 1);
        let s = parse_poscar_content(&content, "x").unwrap();
        assert!((s.lattice.matrix[0][0] - 11.28).abs() < 1e-10);
    }

    #[test]
    fn test_parse_poscar_too_short() {
        assert!(parse_poscar_content("NaCl\n1.0\n", "x").is_err());
    }

    #[test]
    fn test_poscar_round_trip() {
        let s = parse_poscar_content(NACL_POSCAR, "x").unwrap();
        let text = to_poscar_string(&s);
        let back = parse_poscar_content(&text, "x").unwrap();

        assert_eq!(back.name, s.name);
        assert_eq!(back.num_sites(), s.num_sites());
        for (a, b) in back.sites.iter().zip(s.sites.iter()) {
            assert_eq!(a.element, b.element);
            for k in 0..3 {
                assert!((a.position[k] - b.position[k]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_write_groups_interleaved_species() {
        // 端元/稀释结构的物种可能交错出现，写出时要按物种分组
        let mut s = parse_poscar_content(NACL_POSCAR, "x").unwrap();
        s.sites[1].element = "Cl".to_string();
        s.sites[2].element = "Na".to_string();

        let text = to_poscar_string(&s);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[5].split_whitespace().collect::<Vec<_>>(), vec!["Na", "Cl"]);
        assert_eq!(lines[6].split_whitespace().collect::<Vec<_>>(), vec!["2", "2"]);
    }
}
