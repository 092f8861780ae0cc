//! Required-field checks shared by the record types

use chrono::NaiveDate;

pub fn require_text(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", label));
    }
    Ok(())
}

pub fn require_ref(value: Option<i64>, label: &str) -> Result<(), String> {
    match value {
        Some(_) => Ok(()),
        None => Err(format!("{} must be selected", label)),
    }
}

pub fn require_positive(value: f64, label: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} must be greater than zero", label));
    }
    Ok(())
}

pub fn require_non_negative(value: f64, label: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} cannot be negative", label));
    }
    Ok(())
}

/// Date fields must be present and start with a `YYYY-MM-DD` day
pub fn require_date(value: &str, label: &str) -> Result<(), String> {
    require_text(value, label)?;
    let day = value.split(['T', ' ']).next().unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| format!("{} must be a valid date (YYYY-MM-DD)", label))
}

/// Optional date fields are only checked when filled in
pub fn optional_date(value: &Option<String>, label: &str) -> Result<(), String> {
    match value {
        Some(v) if !v.trim().is_empty() => require_date(v, label),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_must_not_be_blank() {
        assert!(require_text("Alice", "Name").is_ok());
        assert_eq!(require_text("   ", "Name"), Err("Name is required".to_string()));
    }

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(require_positive(1.5, "Quantity").is_ok());
        assert!(require_positive(0.0, "Quantity").is_err());
        assert!(require_positive(f64::NAN, "Quantity").is_err());
        assert!(require_non_negative(0.0, "Fee").is_ok());
        assert!(require_non_negative(-0.1, "Fee").is_err());
    }

    #[test]
    fn dates_accept_days_and_timestamps() {
        assert!(require_date("2024-03-15", "Date").is_ok());
        assert!(require_date("2024-03-15T06:30:00Z", "Date").is_ok());
        assert!(require_date("2024-03-15 06:30:00", "Date").is_ok());
        assert!(require_date("15.03.2024", "Date").is_err());
        assert!(require_date("", "Date").is_err());
        assert!(optional_date(&None, "End").is_ok());
        assert!(optional_date(&Some("".into()), "End").is_ok());
        assert!(optional_date(&Some("2024-02-30".into()), "End").is_err());
    }
}
