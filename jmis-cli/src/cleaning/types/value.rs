//! Raw cell values as they come out of an uploaded sheet

use serde::{Deserialize, Serialize};

/// A single cell from the uploaded file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum RawValue {
    /// Blank cell or missing column
    #[default]
    Empty,
    /// Text cell
    Text(String),
    /// Numeric cell (spreadsheets store every number as a float)
    Number(f64),
}

impl RawValue {
    /// Build a value from CSV text; blank text is treated as empty
    pub fn from_text(s: &str) -> Self {
        if s.trim().is_empty() {
            RawValue::Empty
        } else {
            RawValue::Text(s.to_string())
        }
    }

    /// Check if this value carries no data
    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(s) => s.trim().is_empty(),
            RawValue::Number(f) => f.is_nan(),
        }
    }

    /// Text form of the cell, `None` when empty
    ///
    /// Whole numbers render without a fractional part so that phone numbers
    /// and IDs typed into numeric cells keep their digits.
    pub fn as_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        match self {
            RawValue::Empty => None,
            RawValue::Text(s) => Some(s.clone()),
            RawValue::Number(f) => Some(format_number(*f)),
        }
    }
}

fn format_number(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text().unwrap_or_default())
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::from_text(s)
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Number(f)
    }
}
