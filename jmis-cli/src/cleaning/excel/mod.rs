//! Spreadsheet import/export for uploads and cleaned output

mod reader;
mod writer;

pub use reader::{InputFormat, read_csv, read_dataset, read_workbook};
pub use writer::{DEFAULT_OUTPUT_NAME, SHEET_NAME, write_csv, write_xlsx, write_xlsx_to_buffer};
