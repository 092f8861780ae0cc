//! JSON-over-HTTP client for the REST backend
//!
//! Every request carries the bearer token from localStorage when present.
//! Non-2xx responses become [`ApiError::Status`] with the server-provided
//! message, which pages show in an error toast.

use super::api_utils::api_url;
use crate::system::auth::storage;
use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}{}", .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Browser API error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Text for a toast: the server message when there is one, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn check(response: Response, url: &str) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = ApiErrorBody::message_from_text(&text);
    log::error!("{} failed with HTTP {}: {:?}", url, status, message);
    Err(ApiError::Status { status, message })
}

async fn send(request: Request, url: &str) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|e| {
        log::error!("{} request failed: {}", url, e);
        ApiError::Network(e.to_string())
    })?;
    check(response, url).await
}

async fn send_builder(builder: RequestBuilder, url: &str) -> Result<Response, ApiError> {
    let request = builder
        .build()
        .map_err(|e| ApiError::Browser(e.to_string()))?;
    send(request, url).await
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| {
        log::error!("{} returned an unexpected payload: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

/// GET a JSON document
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    let response = send_builder(authorized(Request::get(&url)), &url).await?;
    decode(response, &url).await
}

/// POST a JSON body and decode the JSON reply
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = api_url(path);
    let request = authorized(Request::post(&url))
        .json(body)
        .map_err(|e| ApiError::Browser(e.to_string()))?;
    let response = send(request, &url).await?;
    decode(response, &url).await
}

/// PUT a JSON body and decode the JSON reply
pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = api_url(path);
    let request = authorized(Request::put(&url))
        .json(body)
        .map_err(|e| ApiError::Browser(e.to_string()))?;
    let response = send(request, &url).await?;
    decode(response, &url).await
}

/// DELETE a resource; the reply body is ignored
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    send_builder(authorized(Request::delete(&url)), &url).await?;
    log::debug!("DELETE {} ok", url);
    Ok(())
}

/// GET binary content (PDF receipts)
pub async fn get_bytes(path: &str) -> Result<Vec<u8>, ApiError> {
    let url = api_url(path);
    let response = send_builder(authorized(Request::get(&url)), &url).await?;
    response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Status {
            status: 422,
            message: Some("Phone already registered".into()),
        };
        assert_eq!(err.user_message("Failed to save"), "Phone already registered");
        assert_eq!(err.to_string(), "HTTP 422: Phone already registered");

        let bare = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.user_message("Failed to save"), "Failed to save");
        assert_eq!(bare.to_string(), "HTTP 500");

        let net = ApiError::Network("connection refused".into());
        assert_eq!(net.user_message("Failed to load data"), "Failed to load data");
    }

    #[test]
    fn unauthorized_detection() {
        assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
        assert!(!ApiError::Decode("eof".into()).is_unauthorized());
    }
}
