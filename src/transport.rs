//! HTTP transport for the MoneyMap backend API.
//!
//! Every endpoint speaks the same dialect: JSON bodies, and failures either
//! as a non-success status or as a 2xx body carrying an `{"error": "..."}`
//! field. All four operations here normalize both shapes into
//! [`TransportError::Api`] so callers see a single human-readable message
//! regardless of how the backend chose to fail.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Normalized backend failure, carrying the message from the body's
    /// `error` field or the HTTP status reason.
    #[error("{0}")]
    Api(String),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;

/// Client for the backend REST API.
///
/// Holds the base URL so tests can point it at a mock server. No retries,
/// no timeouts, no caching.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        decode_response(response).await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        decode_response(response).await
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(path, "PUT");
        let response = self.client.put(self.url(path)).json(body).send().await?;
        decode_response(response).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "DELETE");
        let response = self.client.delete(self.url(path)).send().await?;
        decode_response(response).await
    }
}

/// Shared normalization for all four operations.
async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = failure_message(status, &body);
        debug!(%status, %message, "request rejected");
        return Err(TransportError::Api(message));
    }

    let value: Value = serde_json::from_str(&body)?;
    // The backend signals some application-level failures with a 200 status
    // and an error field in the body.
    if let Some(message) = embedded_error(&value) {
        debug!(%message, "error body on success status");
        return Err(TransportError::Api(message));
    }

    Ok(serde_json::from_value(value)?)
}

/// Message for a non-success status: the body's `error` field when the body
/// decodes, otherwise the status line.
fn failure_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(embedded_error)
        .unwrap_or_else(|| match status.canonical_reason() {
            Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
            None => format!("HTTP {}", status.as_u16()),
        })
}

/// Any truthy `error` field counts as a failure, not just strings: the
/// backend is free to send `{"error": true}` and the message is whatever
/// the value renders as.
fn embedded_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::Bool(flag) => flag.then(|| "true".to_string()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::Number(number) => Some(number.to_string()),
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
