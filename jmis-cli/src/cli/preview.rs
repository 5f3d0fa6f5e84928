//! Plain-text table previews of raw and cleaned rows

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use jmis_cleaner::cleaning::types::{RawDataset, TARGET_COLUMNS, TargetRecord};

/// Widest a preview cell may be, in terminal columns
const MAX_CELL_WIDTH: usize = 24;

/// Preview the first `limit` rows of an upload
pub fn preview_raw(dataset: &RawDataset, limit: usize) -> String {
    let headers: Vec<&str> = dataset.headers.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = dataset
        .rows
        .iter()
        .take(limit)
        .map(|row| {
            headers
                .iter()
                .map(|h| row.text(h).unwrap_or_default())
                .collect()
        })
        .collect();
    render_table(&headers, &rows)
}

/// Preview the first `limit` cleaned rows
pub fn preview_cleaned(records: &[TargetRecord], limit: usize) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .take(limit)
        .map(|r| r.values().to_vec())
        .collect();
    render_table(&TARGET_COLUMNS, &rows)
}

/// Render rows under headers as an aligned, `|`-separated table
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let cells = |row: &[String]| -> Vec<String> {
        row.iter().map(|c| truncate(c, MAX_CELL_WIDTH)).collect()
    };
    let header_cells: Vec<String> = headers.iter().map(|h| truncate(h, MAX_CELL_WIDTH)).collect();
    let body: Vec<Vec<String>> = rows.iter().map(|r| cells(r)).collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            body.iter()
                .filter_map(|r| r.get(col))
                .chain(std::iter::once(&header_cells[col]))
                .map(|c| c.width())
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::new();
    out.push_str(&render_row(&header_cells, &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &body {
        out.push_str(&render_row(row, &widths));
        out.push('\n');
    }
    out
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(col, width)| {
            let cell = cells.get(col).map(String::as_str).unwrap_or_default();
            format!("{}{}", cell, " ".repeat(width - cell.width()))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Cut a string to `max` display columns, marking the cut with an ellipsis
fn truncate(s: &str, max: usize) -> String {
    let s = s.replace(['\n', '\r'], " ");
    if s.width() <= max {
        return s;
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
