//! Vocabulary validation for cleaned records
//!
//! Validation is advisory: a report with violations is shown to the operator
//! but never stops the cleaned file from being written.

use serde::Serialize;

use crate::cleaning::normalize::LIST_SEPARATOR;
use crate::cleaning::types::TargetRecord;
use crate::cleaning::vocab::{VOCABULARIES, Vocabulary};

/// Row numbers shown in a violation message before it is cut short
const MAX_ROWS_SHOWN: usize = 10;

/// All invalid values found in one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Target column name
    pub column: String,
    /// Short name of the vocabulary that was checked
    pub vocabulary: String,
    /// Distinct invalid values, in first-seen order
    pub invalid_values: Vec<String>,
    /// 1-based data row numbers holding an invalid value
    pub rows: Vec<usize>,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self
            .invalid_values
            .iter()
            .map(|v| format!("'{}'", v))
            .collect::<Vec<_>>()
            .join(", ");
        let mut rows = self
            .rows
            .iter()
            .take(MAX_ROWS_SHOWN)
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        if self.rows.len() > MAX_ROWS_SHOWN {
            rows.push_str(&format!(" and {} more", self.rows.len() - MAX_ROWS_SHOWN));
        }
        write!(
            f,
            "{}: {} row(s) outside the {} vocabulary: {} (rows {})",
            self.column,
            self.rows.len(),
            self.vocabulary,
            values,
            rows
        )
    }
}

/// Outcome of validating a cleaned dataset; empty means upload-ready
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable messages, one per failing column
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    /// Violation for a column, if it failed
    pub fn for_column(&self, column: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.column == column)
    }
}

/// Check every vocabulary-constrained column of every record
pub fn validate_records(records: &[TargetRecord]) -> ValidationReport {
    let violations = VOCABULARIES
        .iter()
        .filter_map(|vocab| check_column(records, vocab))
        .collect();

    ValidationReport { violations }
}

fn check_column(records: &[TargetRecord], vocab: &Vocabulary) -> Option<Violation> {
    let mut invalid_values: Vec<String> = Vec::new();
    let mut rows = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let value = record.get(vocab.column).unwrap_or_default();
        let bad = invalid_tokens(value, vocab);
        if bad.is_empty() {
            continue;
        }
        rows.push(idx + 1);
        for token in bad {
            if !invalid_values.iter().any(|v| v == token) {
                invalid_values.push(token.to_string());
            }
        }
    }

    if rows.is_empty() {
        return None;
    }

    log::debug!(
        "Column '{}' has {} invalid row(s)",
        vocab.column,
        rows.len()
    );

    Some(Violation {
        column: vocab.column.to_string(),
        vocabulary: vocab.name.to_string(),
        invalid_values,
        rows,
    })
}

/// Tokens of a cell that are not in the vocabulary; empty cells are valid
fn invalid_tokens<'v>(value: &'v str, vocab: &Vocabulary) -> Vec<&'v str> {
    if value.is_empty() {
        return Vec::new();
    }
    if vocab.multi {
        value
            .split(LIST_SEPARATOR)
            .filter(|token| !vocab.contains(token))
            .collect()
    } else if vocab.contains(value) {
        Vec::new()
    } else {
        vec![value]
    }
}
