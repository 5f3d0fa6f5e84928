//! Raw and cleaned record types

use serde::{Deserialize, Serialize};

use super::schema::{TARGET_COLUMNS, column_index};
use super::value::RawValue;

/// One uploaded row, keyed by the header names of the source file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRecord {
    cells: Vec<(String, RawValue)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell, replacing an existing one with the same column name
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<RawValue>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Builder-style insert, mostly for tests
    pub fn with(mut self, column: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Get a cell by exact column name
    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.cells.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }

    /// Text of a cell; `None` when the column is missing or the cell is blank
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column).and_then(RawValue::as_text)
    }

    /// Check if the record has a column (even a blank one)
    pub fn contains(&self, column: &str) -> bool {
        self.cells.iter().any(|(c, _)| c == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.cells.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A parsed upload: header row plus data rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDataset {
    pub headers: Vec<String>,
    pub rows: Vec<RawRecord>,
}

impl RawDataset {
    pub fn new(headers: Vec<String>, rows: Vec<RawRecord>) -> Self {
        RawDataset { headers, rows }
    }

    /// Build a dataset from records alone, collecting headers in first-seen order
    pub fn from_records(rows: Vec<RawRecord>) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for row in &rows {
            for (column, _) in row.iter() {
                if !headers.iter().any(|h| h == column) {
                    headers.push(column.to_string());
                }
            }
        }
        RawDataset { headers, rows }
    }

    /// Check if a column exists anywhere in the upload
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One cleaned row, holding exactly the JMIS schema columns in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRecord {
    values: Vec<String>,
}

impl Default for TargetRecord {
    fn default() -> Self {
        TargetRecord {
            values: vec![String::new(); TARGET_COLUMNS.len()],
        }
    }
}

impl TargetRecord {
    /// Create a record with every column empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a schema column; `None` only for names outside the schema
    pub fn get(&self, column: &str) -> Option<&str> {
        column_index(column).map(|idx| self.values[idx].as_str())
    }

    /// Set a schema column. Names outside the schema are ignored with a debug log.
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        match column_index(column) {
            Some(idx) => self.values[idx] = value.into(),
            None => log::debug!("Ignoring value for unknown target column '{}'", column),
        }
    }

    /// Values in schema order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// (column, value) pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        TARGET_COLUMNS
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Convert back into a raw record keyed by target column names
    pub fn to_raw(&self) -> RawRecord {
        let mut raw = RawRecord::new();
        for (column, value) in self.iter() {
            raw.insert(column, RawValue::from_text(value));
        }
        raw
    }
}

impl Serialize for TargetRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::types::schema::{GENDER, PARTICIPANT_NAME};

    #[test]
    fn test_raw_record_insert_replaces() {
        let mut record = RawRecord::new();
        record.insert("Gender", "male");
        record.insert("Gender", "female");
        assert_eq!(record.len(), 1);
        assert_eq!(record.text("Gender"), Some("female".to_string()));
        assert_eq!(record.text("Missing"), None);
    }

    #[test]
    fn test_dataset_headers_from_records() {
        let dataset = RawDataset::from_records(vec![
            RawRecord::new().with("A", "1").with("B", "2"),
            RawRecord::new().with("B", "3").with("C", "4"),
        ]);
        assert_eq!(dataset.headers, vec!["A", "B", "C"]);
        assert!(dataset.has_column("C"));
        assert!(!dataset.has_column("D"));
    }

    #[test]
    fn test_target_record_has_every_column() {
        let mut record = TargetRecord::new();
        record.set(GENDER, "Female");
        record.set("Not A Column", "ignored");

        assert_eq!(record.values().len(), TARGET_COLUMNS.len());
        assert_eq!(record.get(GENDER), Some("Female"));
        assert_eq!(record.get(PARTICIPANT_NAME), Some(""));
        assert_eq!(record.get("Not A Column"), None);
    }

    #[test]
    fn test_target_record_serializes_in_schema_order() {
        let mut record = TargetRecord::new();
        record.set(PARTICIPANT_NAME, "Jane Doe");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with("{\"Participant Name*\":\"Jane Doe\""));
    }
}
