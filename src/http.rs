use serde::de::DeserializeOwned;
use std::time::Duration;
use wreq::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT},
    Client, RequestBuilder, StatusCode,
};

use crate::error::{BadgeError, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CLIENT_USER_AGENT: &str = concat!("makerbadge/", env!("CARGO_PKG_VERSION"));

/// Outbound JSON client shared by every adapter.
///
/// Retries, caching and rate limiting are not handled here.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout_secs: Option<u64>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let timeout = Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| BadgeError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// GET `url` and validate the body against `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, bearer_token: Option<&str>) -> Result<T> {
        let mut request = self.client.get(url);
        if let Some(token) = bearer_token {
            request = request.header(AUTHORIZATION, bearer_header(token)?);
        }
        self.send(request).await
    }

    /// POST `body` as JSON to `url` and validate the response body against `T`.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(&self, url: &str, body: &B) -> Result<T> {
        self.send(self.client.post(url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(|e| self.classify_error(e))?;
        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_error(e))?;

        if !status.is_success() {
            return Err(self.status_to_error(status, &body));
        }

        parse_with_schema(&body)
    }

    fn classify_error(&self, error: wreq::Error) -> BadgeError {
        if error.is_timeout() {
            BadgeError::Timeout(error.to_string())
        } else if error.is_connect() {
            BadgeError::Network(format!("Connection failed: {}", error))
        } else {
            BadgeError::Network(error.to_string())
        }
    }

    fn status_to_error(&self, status: StatusCode, body: &str) -> BadgeError {
        let detail = if body.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            format!("HTTP {}: {}", status, body.trim())
        };

        match status.as_u16() {
            404 => BadgeError::NotFound,
            401 | 403 => BadgeError::Unauthorized(detail),
            429 => BadgeError::RateLimited,
            500..=599 => BadgeError::Inaccessible(detail),
            _ => BadgeError::InvalidResponse(String::new()),
        }
    }
}

/// Two-step decode: the body must be JSON, and the JSON must match `T`.
pub fn parse_with_schema<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|_| BadgeError::InvalidResponse("unparseable json response".to_string()))?;
    serde_json::from_value(value).map_err(|e| BadgeError::SchemaViolation(e.to_string()))
}

fn bearer_header(token: &str) -> Result<HeaderValue> {
    let clean_token = token
        .strip_prefix("Bearer ")
        .or_else(|| token.strip_prefix("bearer "))
        .unwrap_or(token)
        .trim();
    HeaderValue::from_str(&format!("Bearer {}", clean_token))
        // Avoid echoing token content in errors/logs.
        .map_err(|_| BadgeError::InvalidConfig("Invalid bearer token".to_string()))
}
