//! Writer für die C-Hindernistabelle (`build_complex_map`).

use crate::core::ObstacleGrid;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Anzahl der Records pro Zeile im Array-Literal.
pub const RECORDS_PER_LINE: usize = 8;

/// Ein exportierter Hinderniseintrag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExportRecord {
    /// Spalte
    pub x: u16,
    /// Zeile
    pub y: u16,
}

/// Fehler beim Erzeugen des Exports.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExportError {
    /// Es sind keine Hindernisse gesetzt.
    #[error("keine Hindernisse zum Exportieren")]
    Empty,
}

/// Sammelt alle Hindernisse aufsteigend sortiert nach `(x, y)`.
pub fn collect_records(grid: &ObstacleGrid) -> Vec<ExportRecord> {
    let records: Vec<ExportRecord> = grid
        .iter()
        .map(|cell| ExportRecord {
            x: cell.x,
            y: cell.y,
        })
        .collect();
    debug_assert!(records.windows(2).all(|w| w[0] < w[1]));
    records
}

/// Formatiert sortierte Records als C-Quelltext.
pub fn format_barrier_source(records: &[ExportRecord]) -> String {
    let num = records.len();
    let mut output = String::new();

    output.push_str("#include \"astar.h\"\n\n");
    output.push_str("typedef struct { uint16_t x, y; } Point;\n\n");
    output.push_str(&format!("static const Point BARRIERS[{}] = {{\n", num));

    let line_count = records.chunks(RECORDS_PER_LINE).len();
    for (index, chunk) in records.chunks(RECORDS_PER_LINE).enumerate() {
        let line = chunk
            .iter()
            .map(|r| format!("{{ {}, {} }}", r.x, r.y))
            .collect::<Vec<String>>()
            .join(", ");
        output.push_str("    ");
        output.push_str(&line);
        if index + 1 < line_count {
            output.push(',');
        }
        output.push('\n');
    }

    output.push_str("};\n\n");
    output.push_str(&format!(
        "static const uint16_t BARRIER_NUM = {};\n\n",
        num
    ));

    output.push_str("void build_complex_map(void)\n");
    output.push_str("{\n");
    output.push_str("    for (uint16_t i = 0; i < BARRIER_NUM; ++i)\n");
    output.push_str("        astar_set_barrier(BARRIERS[i].x, BARRIERS[i].y, 1);\n");
    output.push_str("}\n");

    output
}

/// Erzeugt den vollständigen Export-Text für ein Raster.
pub fn export_barrier_source(grid: &ObstacleGrid) -> Result<String, ExportError> {
    if grid.is_empty() {
        return Err(ExportError::Empty);
    }
    Ok(format_barrier_source(&collect_records(grid)))
}

/// Schreibt den Export-Text als Ganzes: erst in eine temporäre Nachbardatei,
/// danach Umbenennen über das Ziel.
pub fn write_barrier_file(path: &Path, content: &str) -> anyhow::Result<()> {
    let tmp_path = temp_sibling(path);
    std::fs::write(&tmp_path, content)
        .with_context(|| format!("Schreiben von {} fehlgeschlagen", tmp_path.display()))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e).with_context(|| format!("Ersetzen von {} fehlgeschlagen", path.display()));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "map_barrier.cpp".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(cells: &[(i32, i32)]) -> ObstacleGrid {
        let mut grid = ObstacleGrid::new();
        for &(x, y) in cells {
            grid.set_cell(x, y, true);
        }
        grid
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        assert_eq!(
            export_barrier_source(&ObstacleGrid::new()),
            Err(ExportError::Empty)
        );
    }

    #[test]
    fn test_records_are_sorted_x_major() {
        let grid = grid_from(&[(0, 0), (1, 0), (0, 1)]);
        let records = collect_records(&grid);
        let pairs: Vec<(u16, u16)> = records.iter().map(|r| (r.x, r.y)).collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_three_records_on_one_line() {
        let grid = grid_from(&[(0, 0), (1, 0), (0, 1)]);
        let text = export_barrier_source(&grid).unwrap();
        assert!(text.contains("static const Point BARRIERS[3] = {\n    { 0, 0 }, { 0, 1 }, { 1, 0 }\n};\n"));
        assert!(text.contains("static const uint16_t BARRIER_NUM = 3;\n"));
    }

    #[test]
    fn test_wrapping_after_eight_records() {
        let cells: Vec<(i32, i32)> = (0..9).map(|y| (2, y)).collect();
        let text = export_barrier_source(&grid_from(&cells)).unwrap();
        let expected = "static const Point BARRIERS[9] = {\n    \
            { 2, 0 }, { 2, 1 }, { 2, 2 }, { 2, 3 }, { 2, 4 }, { 2, 5 }, { 2, 6 }, { 2, 7 },\n    \
            { 2, 8 }\n};\n";
        assert!(text.contains(expected), "got:\n{text}");
    }

    #[test]
    fn test_full_line_has_no_trailing_comma_when_last() {
        let cells: Vec<(i32, i32)> = (0..16).map(|i| (i / 8, i % 8)).collect();
        let text = export_barrier_source(&grid_from(&cells)).unwrap();
        let array_lines: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("static const Point"))
            .skip(1)
            .take_while(|l| *l != "};")
            .collect();
        assert_eq!(array_lines.len(), 2);
        assert!(array_lines[0].ends_with("{ 0, 7 },"));
        assert!(array_lines[1].ends_with("{ 1, 7 }"));
    }

    #[test]
    fn test_temp_sibling_stays_in_same_directory() {
        let target = Path::new("/tmp/out/map_barrier.cpp");
        assert_eq!(
            temp_sibling(target),
            PathBuf::from("/tmp/out/.map_barrier.cpp.tmp")
        );
    }
}
