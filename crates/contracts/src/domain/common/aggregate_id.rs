/// Identifier types of records owned by the backend
pub trait AggregateId: Clone + Copy + PartialEq + Eq + std::hash::Hash + std::fmt::Debug {
    /// Render the id for URLs and row keys
    fn as_string(&self) -> String;

    /// Parse an id coming from a form control or a tab key
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }
}

/// Parse an optional foreign key coming from a `<select>` value ("" means none)
pub fn parse_ref(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        None
    } else {
        i64::from_string(value).ok()
    }
}

/// Render an optional foreign key for a `<select>` value
pub fn ref_to_string(value: Option<i64>) -> String {
    value.map(|v| v.as_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids() {
        assert_eq!(i64::from_string("42"), Ok(42));
        assert_eq!(i64::from_string(" 7 "), Ok(7));
        assert!(i64::from_string("abc").is_err());
    }

    #[test]
    fn select_values_round_trip() {
        assert_eq!(parse_ref(""), None);
        assert_eq!(parse_ref("12"), Some(12));
        assert_eq!(parse_ref("x"), None);
        assert_eq!(ref_to_string(Some(3)), "3");
        assert_eq!(ref_to_string(None), "");
    }
}
