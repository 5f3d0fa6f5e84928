//! The fixed JMIS upload schema
//!
//! Column names are the exact header strings of the JMIS upload template,
//! including the asterisks and the inline hints in parentheses.

pub const PARTICIPANT_NAME: &str = "Participant Name*";
pub const NATIONAL_ID: &str = "Unique JGP ID (National ID)*";
pub const TRAINING_PARTNER: &str = "Training Partner*";
pub const PHONE: &str = "Business phone number";
pub const GENDER: &str = "Gender of owner* (Male/Female/Intersex)";
pub const AGE: &str = "Age of owner (full years)*";
pub const PASSPORT: &str = "Passport";
pub const COUNTY: &str = "Business Location (County)*";
pub const SECTOR: &str =
    "Industry sector(Agriculture, Artists/artisans, Manufacturing, Trading & Retail, Other)";
pub const SEGMENT: &str = "Business segment*(Micro/SME)";
pub const DELIVERY_MODE: &str = "TA delivery mode*(In person/Virtual/Mixed)";
pub const REGISTRATION_NUMBER: &str = "Business Registration Number";
pub const REVENUE_BEST: &str = "Monthly revenues in best month (KES)";
pub const REVENUE_WORST: &str = "Monthly revenues in worst month (KES)";
pub const REGULAR_EMPLOYEES: &str = "Total number of regular employees including owner*";
pub const REGULAR_YOUTH: &str = "Regular, of which are youth (18-35)*";
pub const CASUAL_EMPLOYEES: &str = "Total number of casual employees excluding owner*";
pub const CASUAL_YOUTH: &str = "Casual, of which are youth (18-35)*";
pub const SAMPLE_RECORDS: &str = "Sample records kept*(Purchase record/Record of sales/Delivery records/Record of expenses/Receipts/Other)";
pub const TA_NEEDS: &str =
    "TA needs*(Financial Literacy/Record Keeping/Digitization/Market Access/Other)";
pub const OTHER_TA_NEEDS: &str = "Other TA Needs";
pub const TA_TYPE: &str = "Type of TA*";
pub const DISABILITY: &str = "Person with Disability*(Yes/No)";
pub const REFUGEE: &str = "Refugee status*(Yes/No)";
pub const ELIGIBLE: &str = "Is applicant eligible?(Yes/No)";
pub const RECOMMENDED_FOR_FINANCE: &str = "Recommended for finance (Yes/No)";
pub const PIPELINE_DECISION_DATE: &str = "Pipeline Decision Date (yyyy-MM-dd)";
pub const REFERRED_TO: &str = "FI business is referred to*";
pub const TRAINING_DATE: &str = "Training date(yyyy-MM-dd)*";

/// Every output column, in template order
pub const TARGET_COLUMNS: [&str; 29] = [
    PARTICIPANT_NAME,
    NATIONAL_ID,
    TRAINING_PARTNER,
    PHONE,
    GENDER,
    AGE,
    PASSPORT,
    COUNTY,
    SECTOR,
    SEGMENT,
    DELIVERY_MODE,
    REGISTRATION_NUMBER,
    REVENUE_BEST,
    REVENUE_WORST,
    REGULAR_EMPLOYEES,
    REGULAR_YOUTH,
    CASUAL_EMPLOYEES,
    CASUAL_YOUTH,
    SAMPLE_RECORDS,
    TA_NEEDS,
    OTHER_TA_NEEDS,
    TA_TYPE,
    DISABILITY,
    REFUGEE,
    ELIGIBLE,
    RECOMMENDED_FOR_FINANCE,
    PIPELINE_DECISION_DATE,
    REFERRED_TO,
    TRAINING_DATE,
];

/// Position of a column in the schema
pub fn column_index(column: &str) -> Option<usize> {
    TARGET_COLUMNS.iter().position(|c| *c == column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_columns_are_unique() {
        let unique: HashSet<_> = TARGET_COLUMNS.iter().collect();
        assert_eq!(unique.len(), TARGET_COLUMNS.len());
    }

    #[test]
    fn test_column_index() {
        assert_eq!(column_index(PARTICIPANT_NAME), Some(0));
        assert_eq!(column_index(TRAINING_DATE), Some(TARGET_COLUMNS.len() - 1));
        assert_eq!(column_index("First Name"), None);
    }
}
