//! HTTP transport abstraction
//!
//! The orchestrator talks to the engines through [`HttpTransport`] so that
//! tests can substitute canned responses. The trait exposes raw body bytes:
//! Google answers with loosely typed positional arrays and the Yandex
//! transliteration endpoint returns a bare quoted string, not JSON.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::core::errors::{Result, TranslationError};

/// Response of one GET request
///
/// Non-success statuses are returned as responses, not errors, so callers can
/// tell an access-denied answer from a generic failure. Transport-level
/// failures (connection, DNS, timeout) surface as [`TranslationError::Network`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx class
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the engine denied access (stale or missing credential)
    pub fn is_access_denied(&self) -> bool {
        self.status == 403
    }

    /// Body interpreted as UTF-8, lossy
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Minimal GET-only HTTP transport
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a GET request with the given query parameters
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse>;
}

/// Production transport backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given timeout and user agent
    pub fn new(timeout_ms: u64, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(user_agent)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse> {
        debug!("GET {} ({} query params)", url, query.len());

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| TranslationError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TranslationError::network(e.to_string()))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let ok = HttpResponse { status: 200, body: vec![] };
        assert!(ok.is_success());
        assert!(!ok.is_access_denied());

        let denied = HttpResponse { status: 403, body: vec![] };
        assert!(!denied.is_success());
        assert!(denied.is_access_denied());

        let throttled = HttpResponse { status: 429, body: vec![] };
        assert!(!throttled.is_success());
        assert!(!throttled.is_access_denied());
    }

    #[test]
    fn test_transport_construction() {
        assert!(ReqwestTransport::new(30000, "test-agent").is_ok());
    }
}
