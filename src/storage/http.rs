//! HTTP transport
//!
//! Fetches datasets from a static deployment, e.g.
//! `https://example.org/dashboard/data/kpi_summary.json`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::{FinboardError, FinboardResult};

use super::Transport;

/// Fetches datasets relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> FinboardResult<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(FinboardError::Config(format!(
                "Base URL must start with http:// or https://: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FinboardError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// Full URL of a resource
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, path: &str) -> FinboardResult<Vec<u8>> {
        let url = self.url_for(path);
        tracing::debug!(url = %url, "fetching dataset");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FinboardError::Transport(format!("GET {} failed: {}", url, e)))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(FinboardError::not_found(path)),
            status if !status.is_success() => Err(FinboardError::Transport(format!(
                "GET {} returned {}",
                url, status
            ))),
            _ => response
                .bytes()
                .await
                .map(|b| b.to_vec())
                .map_err(|e| FinboardError::Transport(format!("Reading {} failed: {}", url, e))),
        }
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
