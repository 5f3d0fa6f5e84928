//! Controlled vocabularies for the JMIS template
//!
//! Values are stored in the casing the title-case normalizer produces, so a
//! cleaned value validates by plain string equality.

use crate::cleaning::types::schema;

/// Allowed values for one target column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    /// Short name used on the command line (`gender`, `county`, ...)
    pub name: &'static str,
    /// Target column this vocabulary constrains
    pub column: &'static str,
    /// Canonical values
    pub values: &'static [&'static str],
    /// Whether the column holds a comma-joined list of values
    pub multi: bool,
}

impl Vocabulary {
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

pub const GENDERS: &[&str] = &["Male", "Female", "Intersex"];

pub const DELIVERY_MODES: &[&str] = &["In Person", "Virtual", "Mixed"];

pub const SEGMENTS: &[&str] = &["Micro", "SME"];

pub const TA_TYPES: &[&str] = &[
    "Post-Lending",
    "Pre-Lending",
    "Non-Lending",
    "Mentorship",
    "Voucher Scheme",
];

pub const YES_NO: &[&str] = &["Yes", "No"];

pub const SECTORS: &[&str] = &[
    "Agriculture",
    "Artists/Artisans",
    "Manufacturing",
    "Trading & Retail",
    "Other",
];

pub const COUNTIES: &[&str] = &[
    "Baringo",
    "Bomet",
    "Bungoma",
    "Busia",
    "Elgeyo-Marakwet",
    "Embu",
    "Garissa",
    "Homa Bay",
    "Isiolo",
    "Kajiado",
    "Kakamega",
    "Kericho",
    "Kiambu",
    "Kilifi",
    "Kirinyaga",
    "Kisii",
    "Kisumu",
    "Kitui",
    "Kwale",
    "Laikipia",
    "Lamu",
    "Machakos",
    "Makueni",
    "Mandera",
    "Marsabit",
    "Meru",
    "Migori",
    "Mombasa",
    "Murang'a",
    "Nairobi",
    "Nakuru",
    "Nandi",
    "Narok",
    "Nyamira",
    "Nyandarua",
    "Nyeri",
    "Samburu",
    "Siaya",
    "Taita-Taveta",
    "Tana River",
    "Tharaka-Nithi",
    "Trans Nzoia",
    "Turkana",
    "Uasin Gishu",
    "Vihiga",
    "Wajir",
    "West Pokot",
];

pub const TA_NEEDS: &[&str] = &[
    "Financial Literacy",
    "Record Keeping",
    "Digitization",
    "Market Access",
    "Other",
];

pub const SAMPLE_RECORDS: &[&str] = &[
    "Purchase Record",
    "Record of Sales",
    "Delivery Records",
    "Record of Expenses",
    "Receipts",
    "Other",
];

/// Lower-cased free text → sample record category
const SAMPLE_RECORD_SYNONYMS: &[(&str, &str)] = &[
    ("purchase record", "Purchase Record"),
    ("purchase records", "Purchase Record"),
    ("purchases record", "Purchase Record"),
    ("record of purchases", "Purchase Record"),
    ("record of sales", "Record of Sales"),
    ("records of sales", "Record of Sales"),
    ("sales record", "Record of Sales"),
    ("sales records", "Record of Sales"),
    ("delivery records", "Delivery Records"),
    ("delivery record", "Delivery Records"),
    ("record of expenses", "Record of Expenses"),
    ("records of expenses", "Record of Expenses"),
    ("record of expense", "Record of Expenses"),
    ("expenses", "Record of Expenses"),
    ("expense records", "Record of Expenses"),
    ("receipts", "Receipts"),
    ("receipt", "Receipts"),
    ("other", "Other"),
    ("others", "Other"),
];

/// Map a lower-cased token to its sample record category
pub fn sample_record_category(token: &str) -> Option<&'static str> {
    SAMPLE_RECORD_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == token)
        .map(|(_, category)| *category)
}

/// Every column-constraining vocabulary, in schema order
pub const VOCABULARIES: &[Vocabulary] = &[
    Vocabulary {
        name: "gender",
        column: schema::GENDER,
        values: GENDERS,
        multi: false,
    },
    Vocabulary {
        name: "county",
        column: schema::COUNTY,
        values: COUNTIES,
        multi: false,
    },
    Vocabulary {
        name: "sector",
        column: schema::SECTOR,
        values: SECTORS,
        multi: false,
    },
    Vocabulary {
        name: "segment",
        column: schema::SEGMENT,
        values: SEGMENTS,
        multi: false,
    },
    Vocabulary {
        name: "delivery-mode",
        column: schema::DELIVERY_MODE,
        values: DELIVERY_MODES,
        multi: false,
    },
    Vocabulary {
        name: "sample-records",
        column: schema::SAMPLE_RECORDS,
        values: SAMPLE_RECORDS,
        multi: true,
    },
    Vocabulary {
        name: "ta-needs",
        column: schema::TA_NEEDS,
        values: TA_NEEDS,
        multi: true,
    },
    Vocabulary {
        name: "ta-type",
        column: schema::TA_TYPE,
        values: TA_TYPES,
        multi: false,
    },
    Vocabulary {
        name: "disability",
        column: schema::DISABILITY,
        values: YES_NO,
        multi: false,
    },
    Vocabulary {
        name: "refugee",
        column: schema::REFUGEE,
        values: YES_NO,
        multi: false,
    },
    Vocabulary {
        name: "eligible",
        column: schema::ELIGIBLE,
        values: YES_NO,
        multi: false,
    },
    Vocabulary {
        name: "recommended-for-finance",
        column: schema::RECOMMENDED_FOR_FINANCE,
        values: YES_NO,
        multi: false,
    },
];

/// Vocabulary constraining a target column, if any
pub fn vocabulary_for(column: &str) -> Option<&'static Vocabulary> {
    VOCABULARIES.iter().find(|v| v.column == column)
}

/// Look up a vocabulary by its short name, case-insensitively
pub fn vocabulary_named(name: &str) -> Option<&'static Vocabulary> {
    VOCABULARIES
        .iter()
        .find(|v| v.name.eq_ignore_ascii_case(name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::normalize::title_case;

    #[test]
    fn test_county_count() {
        assert_eq!(COUNTIES.len(), 47);
    }

    #[test]
    fn test_single_value_vocabularies_are_title_case_fixed_points() {
        // Segment holds "SME", which is filled as a constant and never title-cased
        for vocab in VOCABULARIES.iter().filter(|v| !v.multi && v.name != "segment") {
            for value in vocab.values {
                assert_eq!(&title_case(value), value, "vocabulary {}", vocab.name);
            }
        }
        for value in TA_NEEDS {
            assert_eq!(&title_case(value), value);
        }
    }

    #[test]
    fn test_synonyms_map_into_vocabulary() {
        for (synonym, category) in SAMPLE_RECORD_SYNONYMS {
            assert_eq!(synonym.to_lowercase(), *synonym);
            assert!(SAMPLE_RECORDS.contains(category), "{}", category);
        }
        for category in SAMPLE_RECORDS {
            assert_eq!(
                sample_record_category(&category.to_lowercase()),
                Some(*category)
            );
        }
    }

    #[test]
    fn test_sample_record_category_unknown() {
        assert_eq!(sample_record_category("receipts"), Some("Receipts"));
        assert_eq!(sample_record_category("nonsense"), None);
        assert_eq!(sample_record_category("Receipts"), None);
    }

    #[test]
    fn test_vocabulary_lookup() {
        assert_eq!(vocabulary_for(schema::GENDER).map(|v| v.name), Some("gender"));
        assert!(vocabulary_for(schema::PARTICIPANT_NAME).is_none());
        assert_eq!(
            vocabulary_named("TA-Needs").map(|v| v.column),
            Some(schema::TA_NEEDS)
        );
        assert!(vocabulary_named("nope").is_none());
    }
}
