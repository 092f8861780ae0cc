use serde::{Deserialize, Serialize};

/// Error payload returned by the backend on non-2xx responses
///
/// Backends disagree on the field name, so every common one is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// First non-blank message, in `message`, `error`, `detail` order
    pub fn user_message(&self) -> Option<String> {
        [&self.message, &self.error, &self.detail]
            .into_iter()
            .flatten()
            .map(|m| m.trim())
            .find(|m| !m.is_empty())
            .map(str::to_string)
    }

    /// Extract a message from a raw response body
    ///
    /// JSON bodies are parsed; a short plain-text body is used as is.
    pub fn message_from_text(text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        match serde_json::from_str::<ApiErrorBody>(trimmed) {
            Ok(body) => body.user_message(),
            Err(_) if !trimmed.starts_with('{') && !trimmed.starts_with('<') && trimmed.len() <= 200 => {
                Some(trimmed.to_string())
            }
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_available_field() {
        assert_eq!(
            ApiErrorBody::message_from_text(r#"{"message": "Supplier not found"}"#),
            Some("Supplier not found".to_string())
        );
        assert_eq!(
            ApiErrorBody::message_from_text(r#"{"message": " ", "error": "Duplicate phone"}"#),
            Some("Duplicate phone".to_string())
        );
        assert_eq!(
            ApiErrorBody::message_from_text(r#"{"detail": "Token expired"}"#),
            Some("Token expired".to_string())
        );
    }

    #[test]
    fn ignores_empty_and_html_bodies() {
        assert_eq!(ApiErrorBody::message_from_text(""), None);
        assert_eq!(ApiErrorBody::message_from_text("{}"), None);
        assert_eq!(
            ApiErrorBody::message_from_text("<html><body>502</body></html>"),
            None
        );
        assert_eq!(
            ApiErrorBody::message_from_text("Bad Gateway"),
            Some("Bad Gateway".to_string())
        );
    }
}
