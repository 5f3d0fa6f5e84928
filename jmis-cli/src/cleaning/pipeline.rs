//! Whole-upload cleaning pass

use crate::cleaning::mapper::{MapperOptions, map_records};
use crate::cleaning::types::{RawDataset, TargetRecord};
use crate::cleaning::validate::{ValidationReport, validate_records};

/// Cleaned rows plus the advisory validation report
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedDataset {
    pub records: Vec<TargetRecord>,
    pub report: ValidationReport,
}

impl CleanedDataset {
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }
}

/// Map, normalize and validate every row of an upload
pub fn clean_dataset(dataset: &RawDataset, options: &MapperOptions) -> CleanedDataset {
    log::info!(
        "Cleaning {} row(s) with {} source column(s)",
        dataset.len(),
        dataset.headers.len()
    );

    let records = map_records(dataset, options);
    let report = validate_records(&records);

    if report.is_valid() {
        log::info!("All {} row(s) passed vocabulary validation", records.len());
    } else {
        log::warn!(
            "{} column(s) contain values outside their vocabulary",
            report.len()
        );
    }

    CleanedDataset { records, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::types::RawRecord;
    use crate::cleaning::types::schema::*;

    #[test]
    fn test_clean_dataset_keeps_rows_with_violations() {
        let dataset = RawDataset::from_records(vec![
            RawRecord::new().with("Gender", "female").with(COUNTY, "Nairobi"),
            RawRecord::new().with("Gender", "alien").with(COUNTY, "Nairobi"),
        ]);

        let cleaned = clean_dataset(&dataset, &MapperOptions::default());

        assert_eq!(cleaned.records.len(), 2);
        assert!(!cleaned.is_valid());
        assert_eq!(cleaned.records[1].get(GENDER), Some("Alien"));
        assert_eq!(cleaned.report.for_column(GENDER).unwrap().rows, vec![2]);
    }

    #[test]
    fn test_rows_without_known_columns_are_vacuously_valid() {
        let dataset = RawDataset::from_records(vec![RawRecord::new().with("Notes", "hello")]);

        let cleaned = clean_dataset(&dataset, &MapperOptions::default());

        assert!(cleaned.is_valid());
        assert_eq!(cleaned.records[0].values().len(), TARGET_COLUMNS.len());
    }

    #[test]
    fn test_empty_dataset() {
        let cleaned = clean_dataset(&RawDataset::default(), &MapperOptions::default());
        assert!(cleaned.records.is_empty());
        assert!(cleaned.is_valid());
    }
}
