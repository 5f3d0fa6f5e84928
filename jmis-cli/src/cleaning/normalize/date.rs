//! Permissive date parsing for training dates

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Output format expected by the JMIS template
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-and-time layouts, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    // Form exports: month first
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S%.f",
    "%d-%m-%Y %H:%M",
];

/// Date-only layouts, tried in order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%d %B, %Y",
    "%d %b, %Y",
];

/// Parse a loosely formatted date
///
/// Ambiguous slash dates are read month first, falling back to day first
/// when the month-first reading is impossible (e.g. `25/03/2024`).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        })
}

/// Normalize a training date to `YYYY-MM-DD`; unparseable input becomes empty
pub fn normalize_date(raw: Option<&str>) -> String {
    match raw.and_then(parse_date) {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => {
            if let Some(raw) = raw.filter(|r| !r.trim().is_empty()) {
                log::debug!("Could not parse date '{}'", raw);
            }
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_timestamps() {
        assert_eq!(normalize_date(Some("2024-01-05T10:00:00Z")), "2024-01-05");
        assert_eq!(normalize_date(Some("2024-01-05T10:00:00+03:00")), "2024-01-05");
        assert_eq!(normalize_date(Some("2024-01-05 10:00:00")), "2024-01-05");
        assert_eq!(normalize_date(Some("2024-01-05 10:00:00.250")), "2024-01-05");
        assert_eq!(normalize_date(Some("2024-03-01")), "2024-03-01");
    }

    #[test]
    fn test_form_export_timestamps() {
        assert_eq!(normalize_date(Some("3/1/2024 10:15:42")), "2024-03-01");
        assert_eq!(normalize_date(Some("03/01/2024")), "2024-03-01");
        assert_eq!(normalize_date(Some("3/1/2024 2:05:00 PM")), "2024-03-01");
    }

    #[test]
    fn test_day_first_fallback() {
        assert_eq!(normalize_date(Some("25/03/2024")), "2024-03-25");
        assert_eq!(normalize_date(Some("25-03-2024")), "2024-03-25");
        assert_eq!(normalize_date(Some("25.03.2024")), "2024-03-25");
    }

    #[test]
    fn test_written_months() {
        assert_eq!(normalize_date(Some("March 1, 2024")), "2024-03-01");
        assert_eq!(normalize_date(Some("1 Mar 2024")), "2024-03-01");
    }

    #[test]
    fn test_unparseable_is_empty() {
        assert_eq!(normalize_date(Some("not a date")), "");
        assert_eq!(normalize_date(Some("2024-13-45")), "");
        assert_eq!(normalize_date(Some("")), "");
        assert_eq!(normalize_date(None), "");
    }
}
