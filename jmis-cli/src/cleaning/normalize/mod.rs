//! Field normalizers
//!
//! Pure functions from a raw cell to its canonical text. None of them fail:
//! anything that cannot be cleaned degrades to an empty string or is dropped.

mod date;
mod phone;
mod text;

pub use date::{DATE_FORMAT, normalize_date, parse_date};
pub use phone::{DEFAULT_PHONE_PREFIX, SUBSCRIBER_DIGITS, normalize_phone};
pub use text::{
    LIST_SEPARATOR, normalize_full_name, normalize_list, normalize_sample_records,
    normalize_single, title_case, title_case_name,
};
