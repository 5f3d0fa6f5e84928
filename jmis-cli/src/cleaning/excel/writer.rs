//! Write cleaned records in the JMIS upload layout

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::cleaning::types::{TARGET_COLUMNS, TargetRecord};

/// File name the JMIS upload is offered under
pub const DEFAULT_OUTPUT_NAME: &str = "JMIS_CLEANED_UPLOAD.xlsx";

/// Worksheet name used for the cleaned data
pub const SHEET_NAME: &str = "JMIS Upload";

/// Widest column set on the sheet, in characters
const MAX_COLUMN_WIDTH: usize = 40;

/// Write cleaned records to an xlsx file
pub fn write_xlsx(records: &[TargetRecord], path: &Path) -> Result<()> {
    let mut workbook = build_workbook(records)?;
    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Wrote {} row(s) to {}", records.len(), path.display());
    Ok(())
}

/// Render cleaned records as xlsx bytes
pub fn write_xlsx_to_buffer(records: &[TargetRecord]) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(records)?;
    workbook
        .save_to_buffer()
        .context("Failed to render Excel workbook")
}

/// Write cleaned records to a CSV file with the same columns
pub fn write_csv(records: &[TargetRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    wtr.write_record(TARGET_COLUMNS)
        .context("Failed to write CSV header")?;

    for (idx, record) in records.iter().enumerate() {
        wtr.write_record(record.values())
            .with_context(|| format!("Failed to write row {}", idx + 1))?;
    }

    wtr.flush().context("Failed to flush CSV writer")?;

    log::info!("Wrote {} row(s) to {}", records.len(), path.display());
    Ok(())
}

fn build_workbook(records: &[TargetRecord]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(SHEET_NAME)?;
    write_header(worksheet)?;

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, value) in record.values().iter().enumerate() {
            // Leave empty cells blank
            if !value.is_empty() {
                worksheet.write_string(row, col as u16, value)?;
            }
        }
    }

    set_column_widths(worksheet, records)?;
    Ok(workbook)
}

fn write_header(ws: &mut Worksheet) -> Result<()> {
    let bold = Format::new().set_bold();
    for (col, name) in TARGET_COLUMNS.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *name, &bold)?;
    }
    ws.set_freeze_panes(1, 0)?;
    Ok(())
}

fn set_column_widths(ws: &mut Worksheet, records: &[TargetRecord]) -> Result<()> {
    for (col, name) in TARGET_COLUMNS.iter().enumerate() {
        let widest = records
            .iter()
            .map(|r| r.values()[col].chars().count())
            .chain(std::iter::once(name.chars().count()))
            .max()
            .unwrap_or_default()
            .min(MAX_COLUMN_WIDTH);
        ws.set_column_width(col as u16, (widest + 2) as f64)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::excel::read_dataset;
    use crate::cleaning::types::schema::{GENDER, PARTICIPANT_NAME, PHONE};

    fn sample_records() -> Vec<TargetRecord> {
        let mut first = TargetRecord::new();
        first.set(PARTICIPANT_NAME, "Jane Doe");
        first.set(GENDER, "Female");
        first.set(PHONE, "+254700000000");
        let mut second = TargetRecord::new();
        second.set(PARTICIPANT_NAME, "John Smith");
        vec![first, second]
    }

    #[test]
    fn test_xlsx_output_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT_NAME);

        write_xlsx(&sample_records(), &path).unwrap();
        let dataset = read_dataset(&path).unwrap();

        assert_eq!(dataset.headers, TARGET_COLUMNS.to_vec());
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rows[0].text(PARTICIPANT_NAME), Some("Jane Doe".to_string()));
        assert_eq!(dataset.rows[0].text(PHONE), Some("+254700000000".to_string()));
        assert_eq!(dataset.rows[1].text(GENDER), None);
    }

    #[test]
    fn test_csv_output_has_every_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned.csv");

        write_csv(&sample_records(), &path).unwrap();
        let dataset = read_dataset(&path).unwrap();

        assert_eq!(dataset.headers.len(), TARGET_COLUMNS.len());
        assert_eq!(dataset.rows[1].text(PARTICIPANT_NAME), Some("John Smith".to_string()));
    }

    #[test]
    fn test_buffer_is_a_zip_archive() {
        let bytes = write_xlsx_to_buffer(&sample_records()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
