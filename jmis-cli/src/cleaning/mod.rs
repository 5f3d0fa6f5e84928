//! Cleaning of raw training-attendance exports into the JMIS upload template
//!
//! Rows flow through the record mapper (rename, derive, default-fill, with
//! the field normalizers applied per column) and then the vocabulary
//! validator. Spreadsheet decoding and encoding live in [`excel`].

pub mod excel;
pub mod mapper;
pub mod normalize;
pub mod pipeline;
pub mod types;
pub mod validate;
pub mod vocab;

pub use mapper::{MapperOptions, ProgramDefaults, RecordMapper, map_records};
pub use pipeline::{CleanedDataset, clean_dataset};
pub use types::*;
pub use validate::{ValidationReport, Violation, validate_records};
