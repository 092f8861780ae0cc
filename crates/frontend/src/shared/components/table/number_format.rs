//! Number formatting for tables and stat cards
//!
//! Thousands are separated with a space, decimals with a dot.

/// Format with a thousands separator and `decimals` fraction digits,
/// e.g. `1234.567` with 2 decimals gives "1 234.57"
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    // "-0.00" reads as a negative zero
    let is_zero = digits.chars().all(|c| c == '0')
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'));
    let sign = if is_zero { "" } else { sign };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money with 2 decimals
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Liters with 1 decimal and the unit
pub fn format_liters(value: f64) -> String {
    format!("{} L", format_number_with_decimals(value, 1))
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Percent value in 0..=100 with 1 decimal
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number_with_decimals(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
        assert_eq!(format_money(-0.001), "0.00");
        assert_eq!(format_money(f64::NAN), "0.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(123.0, 0), "123");
        assert_eq!(format_number_with_decimals(-123456.0, 0), "-123 456");
    }

    #[test]
    fn test_units() {
        assert_eq!(format_liters(1500.0), "1 500.0 L");
        assert_eq!(format_percent(87.5), "87.5%");
        assert_eq!(format_number_int(1234567.0), "1 234 567");
    }
}
