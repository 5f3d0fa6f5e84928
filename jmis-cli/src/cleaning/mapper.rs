//! Record mapper: raw upload rows to JMIS template rows
//!
//! The mapper renames known source columns, derives name/phone/date columns,
//! normalizes the controlled-vocabulary columns and fills program constants.
//! It never fails on missing columns; they simply come out empty.

use serde::{Deserialize, Serialize};

use crate::cleaning::normalize::{
    DEFAULT_PHONE_PREFIX, normalize_date, normalize_full_name, normalize_list, normalize_phone,
    normalize_sample_records, normalize_single,
};
use crate::cleaning::types::schema::*;
use crate::cleaning::types::{RawDataset, RawRecord, TargetRecord};
use crate::cleaning::vocab;

/// Source columns that are not renamed but feed derived columns
pub mod source {
    pub const FIRST_NAME: &str = "First Name";
    pub const LAST_NAME: &str = "Last Name";
    pub const NATIONAL_ID: &str = "WHAT IS YOUR NATIONAL ID?";
    pub const PHONE: &str = "Business Phone Number";
    pub const GENDER: &str = "Gender";
    pub const SECTOR: &str = "WHAT IS THE MAIN INDUSTRY SECTOR IN WHICH YOU OPERATE IN?";
    pub const AGE: &str = "Age";
    pub const TA_TYPE: &str = "TYPE OF TA ACCESSED";
    pub const TIMESTAMP: &str = "Timestamp";
    pub const REVENUE_BEST: &str =
        "WHAT WAS YOUR ESTIMATED MONTHLY REVENUE (KES) IN A PARTICULARLY GOOD MONTH";
    pub const REVENUE_WORST: &str =
        "WHAT WAS YOUR ESTIMATED MONTHLY REVENUE (KES) IN A PARTICULARLY BAD MONTH?";
    pub const REGULAR_EMPLOYEES: &str =
        "WHAT IS THE NUMBER OF YOUR REGULAR EMPLOYEES INCLUDING BUSINESS OWNER?";
    pub const YOUTH_EMPLOYEES: &str = "OF THESE, HOW MANY ARE YOUTH? (18 -35 YEARS OLD)";
    pub const CASUAL_EMPLOYEES: &str = "WHAT IS THE NUMBER OF CASUAL EMPLOYEES";
    pub const RECORDS_KEPT: &str = "DO YOU KEEP ANY OF THE FOLLOWING RECORDS IN YOUR BUSINESS OPERATIONS? [ PLEASE SELECT ALL THAT APPLY]";
    pub const TA_NEEDS: &str = "WHAT ARE THE MOST PRESSING TECHNICAL ASSISTANCE NEEDS TO IMPROVE YOUR BUSINESS OPERATIONS? [PLEASE SELECT UP TO TWO]";
    pub const DISABILITY: &str = "DO YOU IDENTIFY AS A PERSON WITH A DISABILITY? (THIS QUESTION IS OPTIONAL AND YOUR RESPONSE WILL NOT AFFECT YOUR ELIGIBILITY FOR THE PROGRAM.)";
}

/// Known raw column → target column
///
/// Matching is exact and case-sensitive. A target column also accepts its own
/// name as a source, which lets a cleaned file be cleaned again.
pub const RENAME_TABLE: &[(&str, &str)] = &[
    (source::NATIONAL_ID, NATIONAL_ID),
    (source::PHONE, PHONE),
    (source::GENDER, GENDER),
    (source::SECTOR, SECTOR),
    (source::AGE, AGE),
    (source::TA_TYPE, TA_TYPE),
    (source::TIMESTAMP, TRAINING_DATE),
    (source::REVENUE_BEST, REVENUE_BEST),
    (source::REVENUE_WORST, REVENUE_WORST),
    (source::REGULAR_EMPLOYEES, REGULAR_EMPLOYEES),
    (source::YOUTH_EMPLOYEES, REGULAR_YOUTH),
    (source::CASUAL_EMPLOYEES, CASUAL_EMPLOYEES),
    // The intake form has no separate casual-youth question; the upload
    // template has always been filled from the regular-youth answer.
    (source::YOUTH_EMPLOYEES, CASUAL_YOUTH),
    (source::RECORDS_KEPT, SAMPLE_RECORDS),
    (source::TA_NEEDS, TA_NEEDS),
    (source::DISABILITY, DISABILITY),
];

/// Target columns copied as text without any normalization
const PASS_THROUGH: &[&str] = &[
    NATIONAL_ID,
    AGE,
    REVENUE_BEST,
    REVENUE_WORST,
    REGULAR_EMPLOYEES,
    REGULAR_YOUTH,
    CASUAL_EMPLOYEES,
    CASUAL_YOUTH,
];

/// Single-valued controlled columns, canonicalized by title case
const SINGLE_VALUED: &[&str] = &[GENDER, SECTOR, TA_TYPE, DISABILITY];

/// Program-wide constants written to every row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramDefaults {
    pub training_partner: String,
    pub business_segment: String,
    pub delivery_mode: String,
    pub refugee_status: String,
    pub eligible: String,
    pub referred_to: String,
}

impl Default for ProgramDefaults {
    fn default() -> Self {
        Self {
            training_partner: "KNCCI".to_string(),
            business_segment: "Micro".to_string(),
            delivery_mode: "In Person".to_string(),
            refugee_status: "No".to_string(),
            eligible: "Yes".to_string(),
            referred_to: "KNCCI".to_string(),
        }
    }
}

impl ProgramDefaults {
    /// (target column, value) pairs
    pub fn columns(&self) -> [(&'static str, &str); 6] {
        [
            (TRAINING_PARTNER, self.training_partner.as_str()),
            (SEGMENT, self.business_segment.as_str()),
            (DELIVERY_MODE, self.delivery_mode.as_str()),
            (REFUGEE, self.refugee_status.as_str()),
            (ELIGIBLE, self.eligible.as_str()),
            (REFERRED_TO, self.referred_to.as_str()),
        ]
    }
}

/// Options for mapping one upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperOptions {
    /// County applied to every row when the upload has no county column
    pub default_county: Option<String>,
    /// Calling code prepended to normalized phone numbers
    pub phone_prefix: String,
    pub defaults: ProgramDefaults,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            default_county: None,
            phone_prefix: DEFAULT_PHONE_PREFIX.to_string(),
            defaults: ProgramDefaults::default(),
        }
    }
}

impl MapperOptions {
    pub fn with_default_county(mut self, county: impl Into<String>) -> Self {
        self.default_county = Some(county.into());
        self
    }

    pub fn with_phone_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.phone_prefix = prefix.into();
        self
    }
}

/// Maps the rows of one dataset
///
/// Whether the county column exists is a property of the whole upload, so the
/// mapper is built per dataset.
#[derive(Debug)]
pub struct RecordMapper<'a> {
    options: &'a MapperOptions,
    /// Set when the upload has no county column
    county_fallback: Option<String>,
}

impl<'a> RecordMapper<'a> {
    pub fn for_dataset(dataset: &RawDataset, options: &'a MapperOptions) -> Self {
        let county_fallback = if dataset.has_column(COUNTY) {
            None
        } else {
            let county = normalize_single(options.default_county.as_deref());
            if county.is_empty() {
                log::warn!(
                    "Upload has no '{}' column and no default county was given; county will be empty",
                    COUNTY
                );
            } else {
                log::info!("Applying county '{}' to every row", county);
            }
            Some(county)
        };

        RecordMapper {
            options,
            county_fallback,
        }
    }

    /// Map one raw row to a full template row
    pub fn map_record(&self, raw: &RawRecord) -> TargetRecord {
        let mut record = TargetRecord::new();

        for column in PASS_THROUGH {
            if let Some(value) = source_text(raw, column) {
                record.set(column, value.trim());
            }
        }

        record.set(PARTICIPANT_NAME, participant_name(raw));
        record.set(
            PHONE,
            normalize_phone(source_text(raw, PHONE).as_deref(), &self.options.phone_prefix),
        );
        record.set(
            TRAINING_DATE,
            normalize_date(source_text(raw, TRAINING_DATE).as_deref()),
        );

        for column in SINGLE_VALUED {
            record.set(column, normalize_single(source_text(raw, column).as_deref()));
        }

        record.set(
            SAMPLE_RECORDS,
            normalize_sample_records(source_text(raw, SAMPLE_RECORDS).as_deref()),
        );
        record.set(
            TA_NEEDS,
            normalize_list(source_text(raw, TA_NEEDS).as_deref(), vocab::TA_NEEDS),
        );

        let county = match &self.county_fallback {
            Some(county) => county.clone(),
            None => normalize_single(raw.text(COUNTY).as_deref()),
        };
        record.set(COUNTY, county);

        for (column, value) in self.options.defaults.columns() {
            record.set(column, value);
        }

        record
    }
}

/// Map every row of a dataset, one output row per input row
pub fn map_records(dataset: &RawDataset, options: &MapperOptions) -> Vec<TargetRecord> {
    let mapper = RecordMapper::for_dataset(dataset, options);
    dataset.rows.iter().map(|raw| mapper.map_record(raw)).collect()
}

/// First non-blank source for a target column, in rename table order, then
/// the target column name itself
fn source_text(raw: &RawRecord, target: &str) -> Option<String> {
    RENAME_TABLE
        .iter()
        .filter(|(_, t)| *t == target)
        .find_map(|(s, _)| raw.text(s))
        .or_else(|| raw.text(target))
}

fn participant_name(raw: &RawRecord) -> String {
    let first = raw.text(source::FIRST_NAME);
    let last = raw.text(source::LAST_NAME);
    if first.is_none() && last.is_none() {
        return normalize_full_name(raw.text(PARTICIPANT_NAME).as_deref(), None);
    }
    normalize_full_name(first.as_deref(), last.as_deref())
}
