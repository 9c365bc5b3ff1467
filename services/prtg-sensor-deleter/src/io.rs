//! HTTP client abstraction for testability

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, empty if there is none
    pub reason: String,
    pub body: String,
}

impl HttpResponse {
    /// Build a response whose reason phrase is derived from the status code
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason_phrase(status),
            body: body.into(),
        }
    }
}

/// Canonical reason phrase for a status code, e.g. "Internal Server Error"
pub fn reason_phrase(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or_default()
        .to_string()
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        let logged_url = crate::auth::redact(url);
        tracing::debug!("GET {}", logged_url);
        // The URL in a reqwest error carries credentials
        let response = self.client.get(url).send().await.map_err(|e| {
            crate::DeleterError::Http(format!(
                "GET {} failed: {}",
                logged_url,
                e.without_url()
            ))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            crate::DeleterError::Http(format!("Reading response body: {}", e.without_url()))
        })?;

        tracing::debug!("GET {} -> {} ({} bytes)", logged_url, status, body.len());
        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
