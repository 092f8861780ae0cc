//! API base URL resolution
//!
//! The backend listens on port 3000 of the host serving the UI unless the
//! `api_base` localStorage key points somewhere else.

use web_sys::window;

/// Backend port used when no override is configured
pub const API_PORT: u16 = 3000;

/// localStorage key holding an explicit API base URL (e.g. "https://api.example.com")
pub const API_BASE_OVERRIDE_KEY: &str = "api_base";

/// Get the base URL for API requests
///
/// # Returns
/// - the override from localStorage, without a trailing slash, when set
/// - otherwise "http(s)://<current host>:3000"
/// - empty string if window is not available
pub fn api_base() -> String {
    let window = match window() {
        Some(w) => w,
        None => return String::new(),
    };

    let override_base = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(API_BASE_OVERRIDE_KEY).ok().flatten());
    if let Some(base) = override_base.and_then(|b| normalize_base(&b)) {
        return base;
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append URL-encoded query parameters to a path; empty values are skipped
pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    let query: Vec<String> = params
        .iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v.trim())))
        .collect();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.join("&"))
    }
}

fn normalize_base(base: &str) -> Option<String> {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_skips_empty_values_and_encodes() {
        assert_eq!(with_query("/api/attendance", &[]), "/api/attendance");
        assert_eq!(
            with_query(
                "/api/attendance",
                &[("date", "2024-05-01".to_string()), ("employee_id", "".to_string())]
            ),
            "/api/attendance?date=2024-05-01"
        );
        assert_eq!(
            with_query("/api/suppliers", &[("q", "Green Farm".to_string())]),
            "/api/suppliers?q=Green%20Farm"
        );
    }

    #[test]
    fn override_base_is_normalized() {
        assert_eq!(
            normalize_base(" https://api.example.com/ "),
            Some("https://api.example.com".to_string())
        );
        assert_eq!(normalize_base("  "), None);
    }
}
