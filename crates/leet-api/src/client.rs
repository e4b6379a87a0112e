//! HTTP connection management and the shared admin API client.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::session::AdminSession;

/// Errors from backend API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Configuration for talking to the admin backend.
///
/// Loaded from the `[api]` section of `leet.toml` or `LEET__API__*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Pre-issued admin access token, if any.
    #[serde(default)]
    pub token: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size used when loading complete collections.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    100
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

/// Admin backend client.
///
/// Clone is cheap: the underlying `reqwest::Client` and the session are both
/// reference counted.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
    session: AdminSession,
}

impl ApiClient {
    /// Build a client from configuration. A configured token seeds the session.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("leet-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let session = match config.token.as_deref() {
            Some(token) => AdminSession::with_token(token),
            None => AdminSession::new(),
        };

        tracing::debug!(base_url = %config.base_url, "Admin API client ready");
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size.max(1),
            session,
        })
    }

    /// Replace the session, e.g. to share one token across clients.
    pub fn with_session(mut self, session: AdminSession) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Absolute URL for an API path such as `/accounts/admin/users/`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Start a request with JSON content type and, when logged in, the bearer token.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Start a request that never carries the session token (login endpoints).
    pub fn anonymous_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send a request and decode a successful JSON body into `T`.
    ///
    /// Non-2xx responses become [`ApiError::Status`] carrying the backend's
    /// `detail`/`error` message, or `fallback` when it sent none.
    pub async fn send_json<T>(&self, builder: RequestBuilder, path: &str, fallback: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        let (status, payload) = read_payload(response).await?;

        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "Backend request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&payload, fallback),
            });
        }

        serde_json::from_value(payload).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

/// Read a body as JSON, treating an unparsable body as `null`.
async fn read_payload(response: Response) -> Result<(reqwest::StatusCode, serde_json::Value)> {
    let status = response.status();
    let body = response.text().await?;
    let payload = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    Ok((status, payload))
}

/// Pick the human-readable message out of a backend error payload.
pub fn error_message(payload: &serde_json::Value, fallback: &str) -> String {
    ["detail", "error"]
        .iter()
        .filter_map(|key| payload.get(key).and_then(|v| v.as_str()))
        .find(|msg| !msg.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_url_joining() {
        let config = ApiConfig {
            base_url: "https://api.leet.example/api/".to_string(),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.url("/accounts/admin/users/"),
            "https://api.leet.example/api/accounts/admin/users/"
        );
        assert_eq!(
            client.url("waitlist/admin/"),
            "https://api.leet.example/api/waitlist/admin/"
        );
    }

    #[test]
    fn test_configured_token_seeds_session() {
        let config = ApiConfig {
            token: Some("tok".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert!(client.session().is_authenticated());
    }

    #[test]
    fn test_error_message_precedence() {
        let both = serde_json::json!({"detail": "Not allowed", "error": "other"});
        assert_eq!(error_message(&both, "fallback"), "Not allowed");

        let only_error = serde_json::json!({"error": "Bad token"});
        assert_eq!(error_message(&only_error, "fallback"), "Bad token");

        let empty_detail = serde_json::json!({"detail": "", "error": "Bad token"});
        assert_eq!(error_message(&empty_detail, "fallback"), "Bad token");

        assert_eq!(
            error_message(&serde_json::Value::Null, "Unable to load users."),
            "Unable to load users."
        );
    }
}
