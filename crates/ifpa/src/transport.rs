//! HTTP transport for the IFPA API
//!
//! Builders never talk to `reqwest` directly. They hold an `Arc<dyn Transport>`
//! and hand it a path plus their Parameter Set; the transport owns the
//! connection, authentication headers and status handling.

use futures::future::BoxFuture;
use ifpa_core::params::ParameterSet;
use ifpa_core::{ApiError, Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

use crate::config::IfpaConfig;

/// Executes a single GET request and returns the decoded JSON body
pub trait Transport: Send + Sync {
    fn get<'a>(
        &'a self,
        path: &'a str,
        params: &'a ParameterSet,
    ) -> BoxFuture<'a, Result<serde_json::Value>>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create an authenticated transport with the API key sent on every request
    pub fn new(config: &IfpaConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(&config.api_key)
                .map_err(|e| Error::Configuration(format!("Invalid API key header: {e}")))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, path: &str, params: &ParameterSet) -> Result<serde_json::Value> {
        let url = self.url_for(path);
        log::debug!("GET {url}?{}", params.to_query_string());

        let response = self
            .client
            .get(&url)
            .query(&params.to_pairs())
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Failed to send request to {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("GET {url} failed with {status}");
            return Err(Error::Api(ApiError::new(status.as_u16(), error_message(&body))));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Failed to read response body: {e}")))?;

        serde_json::from_str(&body).map_err(Error::from)
    }
}

impl Transport for HttpTransport {
    fn get<'a>(
        &'a self,
        path: &'a str,
        params: &'a ParameterSet,
    ) -> BoxFuture<'a, Result<serde_json::Value>> {
        Box::pin(self.send(path, params))
    }
}

/// Pull a readable message out of an error body.
///
/// The service reports errors as `{"message": "..."}` or `{"error": "..."}`;
/// anything else is passed through trimmed.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    body.trim().to_string()
}
