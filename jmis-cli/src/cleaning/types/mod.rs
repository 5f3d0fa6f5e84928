//! Core types for the cleaning pipeline

pub mod record;
pub mod schema;
pub mod value;

pub use record::{RawDataset, RawRecord, TargetRecord};
pub use schema::{TARGET_COLUMNS, column_index};
pub use value::RawValue;
