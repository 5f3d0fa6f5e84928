//! Read an uploaded roster (CSV or spreadsheet) into a RawDataset

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use chrono::{Duration, NaiveDate};

use crate::cleaning::types::{RawDataset, RawRecord, RawValue};

/// Supported input formats, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Workbook,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(InputFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(InputFormat::Workbook),
            _ => None,
        }
    }
}

/// Read an upload, dispatching on the file extension
pub fn read_dataset(path: &Path) -> Result<RawDataset> {
    let format = InputFormat::from_path(path).with_context(|| {
        format!(
            "Unsupported file type: {} (expected .csv, .xlsx, .xls or .ods)",
            path.display()
        )
    })?;

    let dataset = match format {
        InputFormat::Csv => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
            read_csv(file).with_context(|| format!("Failed to read CSV file: {}", path.display()))?
        }
        InputFormat::Workbook => read_workbook(path)?,
    };

    log::info!(
        "Read {} row(s) and {} column(s) from {}",
        dataset.len(),
        dataset.headers.len(),
        path.display()
    );
    Ok(dataset)
}

/// Read comma-separated text with a header row
pub fn read_csv<R: Read>(input: R) -> Result<RawDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = header_names(reader.headers().context("Failed to read CSV header")?.iter());
    if headers.is_empty() {
        bail!("File has no header row");
    }

    let mut rows = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        // +2: 1-based, after the header line
        let record = record.with_context(|| format!("Row {}: malformed CSV", row_idx + 2))?;
        if record.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let mut row = RawRecord::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            row.insert(header.as_str(), RawValue::from_text(cell));
        }
        rows.push(row);
    }

    Ok(RawDataset::new(headers, rows))
}

/// Read the first worksheet of an xlsx/xls/ods workbook
pub fn read_workbook(path: &Path) -> Result<RawDataset> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .context("Spreadsheet has no sheets")?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let mut row_iter = range.rows();
    let header_row = row_iter.next().context("Sheet has no header row")?;
    let header_cells: Vec<String> = header_row.iter().map(cell_to_string).collect();
    let headers = header_names(header_cells.iter().map(String::as_str));
    if headers.iter().all(|h| h.starts_with(UNNAMED_PREFIX)) {
        bail!("Sheet '{}' has an empty header row", sheet_name);
    }

    let mut rows = Vec::new();
    for row in row_iter {
        // Skip empty rows
        if row.iter().all(|c| cell_to_value(c).is_empty()) {
            continue;
        }

        let mut record = RawRecord::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            record.insert(header.as_str(), cell_to_value(cell));
        }
        rows.push(record);
    }

    Ok(RawDataset::new(headers, rows))
}

const UNNAMED_PREFIX: &str = "Unnamed: ";

/// Clean up header names: strip a UTF-8 BOM and name blank headers by position
fn header_names<'a>(cells: impl Iterator<Item = &'a str>) -> Vec<String> {
    cells
        .enumerate()
        .map(|(idx, name)| {
            let name = name.trim_start_matches('\u{feff}');
            if name.trim().is_empty() {
                format!("{}{}", UNNAMED_PREFIX, idx)
            } else {
                name.to_string()
            }
        })
        .collect()
}

fn cell_to_value(cell: &Data) -> RawValue {
    match cell {
        Data::Empty | Data::Error(_) => RawValue::Empty,
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Float(f) => RawValue::Number(*f),
        _ => RawValue::from_text(&cell_to_string(cell)),
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => RawValue::Number(*f).to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => excel_serial_to_string(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

/// Render an Excel serial date (days since 1899-12-30) as `YYYY-MM-DD HH:MM:SS`
fn excel_serial_to_string(serial: f64) -> String {
    let Some(epoch) = NaiveDate::from_ymd_opt(1899, 12, 30).and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return String::new();
    };
    let millis = (serial * 86_400_000.0).round() as i64;
    match epoch.checked_add_signed(Duration::milliseconds(millis)) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}
