//! Text normalizers for controlled-vocabulary and name columns

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cleaning::vocab::sample_record_category;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Separator used when joining multi-select values
pub const LIST_SEPARATOR: &str = ", ";

/// Title-case a string
///
/// Every word gets an upper-case first letter and lower-case remainder. A word
/// starts after any character that is neither alphanumeric nor an apostrophe,
/// so "trading & retail" becomes "Trading & Retail", "post-lending" becomes
/// "Post-Lending" and "murang'a" stays "Murang'a".
pub fn title_case(s: &str) -> String {
    capitalize_words(s, false)
}

/// Title-case a personal name, where an apostrophe also starts a word
///
/// "o'neil" becomes "O'Neil" and "d'souza" becomes "D'Souza".
pub fn title_case_name(s: &str) -> String {
    capitalize_words(s, true)
}

fn capitalize_words(s: &str, apostrophe_breaks: bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            let apostrophe = ch == '\'' || ch == '\u{2019}';
            in_word = ch.is_alphanumeric() || (apostrophe && !apostrophe_breaks);
        }
    }

    out
}

/// Canonicalize a single-valued controlled field: trim, then title-case
///
/// No membership check happens here; values outside the vocabulary pass
/// through and are reported by the validator.
pub fn normalize_single(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => title_case(v),
        _ => String::new(),
    }
}

/// Canonicalize a comma-separated multi-select field against a vocabulary
///
/// Tokens are trimmed and title-cased; tokens outside `vocabulary` are dropped
/// and the rest keep their original order.
pub fn normalize_list(value: Option<&str>, vocabulary: &[&str]) -> String {
    let Some(value) = value else {
        return String::new();
    };

    value
        .split(',')
        .map(|token| title_case(token.trim()))
        .filter(|token| vocabulary.contains(&token.as_str()))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Map free-text "records kept" answers onto the sample record categories
pub fn normalize_sample_records(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    value
        .split(',')
        .filter_map(|token| sample_record_category(&token.trim().to_lowercase()))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Build a participant name from first and last name parts
pub fn normalize_full_name(first: Option<&str>, last: Option<&str>) -> String {
    let joined = format!(
        "{} {}",
        title_case_name(first.unwrap_or_default()),
        title_case_name(last.unwrap_or_default())
    );
    WHITESPACE_RUN.replace_all(&joined, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::vocab::{GENDERS, TA_NEEDS};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("IN PERSON"), "In Person");
        assert_eq!(title_case("trading & retail"), "Trading & Retail");
        assert_eq!(title_case("artists/artisans"), "Artists/Artisans");
        assert_eq!(title_case("pre-lending"), "Pre-Lending");
        assert_eq!(title_case("murang'a"), "Murang'a");
        assert_eq!(title_case("homa  bay"), "Homa  Bay");
        assert_eq!(title_case("2nd floor"), "2nd Floor");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_normalize_single() {
        assert_eq!(normalize_single(Some(" male ")), "Male");
        assert_eq!(normalize_single(Some("")), "");
        assert_eq!(normalize_single(Some("   ")), "");
        assert_eq!(normalize_single(None), "");
        // Passes through unvalidated
        assert_eq!(normalize_single(Some("alien")), "Alien");
        assert!(!GENDERS.contains(&normalize_single(Some("alien")).as_str()));
    }

    #[test]
    fn test_normalize_list_drops_unknown_tokens() {
        assert_eq!(
            normalize_list(Some("record keeping, flying"), TA_NEEDS),
            "Record Keeping"
        );
        assert_eq!(
            normalize_list(Some("MARKET ACCESS,digitization , financial literacy"), TA_NEEDS),
            "Market Access, Digitization, Financial Literacy"
        );
        assert_eq!(normalize_list(Some("flying"), TA_NEEDS), "");
        // Duplicates are not collapsed
        assert_eq!(
            normalize_list(Some("Digitization, digitization"), TA_NEEDS),
            "Digitization, Digitization"
        );
        assert_eq!(normalize_list(None, TA_NEEDS), "");
    }

    #[test]
    fn test_normalize_sample_records() {
        assert_eq!(
            normalize_sample_records(Some("Receipts, other, nonsense")),
            "Receipts, Other"
        );
        assert_eq!(
            normalize_sample_records(Some("Purchase record,Record of sales")),
            "Purchase Record, Record of Sales"
        );
        assert_eq!(normalize_sample_records(Some("nothing useful")), "");
        assert_eq!(normalize_sample_records(None), "");
    }

    #[test]
    fn test_normalize_full_name() {
        assert_eq!(normalize_full_name(Some("  john "), Some("doe")), "John Doe");
        assert_eq!(normalize_full_name(None, None), "");
        assert_eq!(normalize_full_name(Some("MARY  ann"), None), "Mary Ann");
        assert_eq!(normalize_full_name(None, Some("wanjiku")), "Wanjiku");
    }

    #[test]
    fn test_names_capitalize_after_apostrophe() {
        assert_eq!(normalize_full_name(Some("o'neil"), None), "O'Neil");
        assert_eq!(normalize_full_name(Some("jane"), Some("D'SOUZA")), "Jane D'Souza");
        assert_eq!(title_case_name("o\u{2019}brien"), "O\u{2019}Brien");
        // Controlled values keep the apostrophe inside the word
        assert_eq!(title_case("murang'a"), "Murang'a");
    }
}
