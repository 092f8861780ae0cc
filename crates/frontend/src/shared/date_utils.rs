//! Date helpers for forms and tables
//!
//! Dates travel as ISO "YYYY-MM-DD" strings; tables show them as DD.MM.YYYY.

use chrono::NaiveDate;

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split(['T', ' ']).next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Browser-local today as "YYYY-MM-DD"
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    iso_from_parts(now.get_full_year(), now.get_month() + 1, now.get_date())
}

/// Browser-local today; falls back to the Unix epoch if the clock is unusable
pub fn today() -> NaiveDate {
    NaiveDate::parse_from_str(&today_iso(), "%Y-%m-%d").unwrap_or_default()
}

pub fn iso_from_parts(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
        assert_eq!(format_date("2024-03-15 08:00:00"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_iso_from_parts() {
        assert_eq!(iso_from_parts(2024, 5, 1), "2024-05-01");
        assert_eq!(iso_from_parts(2023, 12, 31), "2023-12-31");
    }
}
