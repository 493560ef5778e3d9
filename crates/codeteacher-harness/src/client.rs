//! HTTP client for the proxy's `/run` endpoint.

use crate::error::HarnessError;
use crate::Result;
use codeteacher_core::config::HarnessConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Request body for `POST /run`.
#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    language: &'a str,
    code: &'a str,
}

/// Status and body of one `/run` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// HTTP status code.
    pub status: u16,

    /// Response body as text.
    pub body: String,
}

impl ExecutionResult {
    /// Whether the proxy answered 200 with `expected` somewhere in the body.
    pub fn matches(&self, expected: &str) -> bool {
        self.status == 200 && self.body.contains(expected)
    }
}

/// Client for the execution proxy.
pub struct RunClient {
    /// HTTP client.
    client: Client,

    /// Proxy base URL, without a trailing slash.
    base_url: String,

    /// Bound on each request, including reading the body.
    timeout: Duration,
}

impl RunClient {
    /// Create a client for a proxy base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| HarnessError::config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Create a client from the harness configuration.
    pub fn from_config(config: &HarnessConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_millis(config.timeout_ms))
    }

    /// Full URL of the run endpoint.
    pub fn run_url(&self) -> String {
        format!("{}/run", self.base_url)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Submit code for one language and wait for the response.
    pub async fn post_run(&self, language: &str, code: &str) -> Result<ExecutionResult> {
        let url = self.run_url();
        let timeout_ms = self.timeout.as_millis() as u64;
        debug!(%url, language, "Submitting code to proxy");

        let exchange = async {
            let response = self
                .client
                .post(&url)
                .json(&RunRequest { language, code })
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>(ExecutionResult { status, body })
        };

        match timeout(self.timeout, exchange).await {
            Ok(Ok(result)) => {
                debug!(status = result.status, bytes = result.body.len(), "Proxy responded");
                Ok(result)
            }
            Ok(Err(e)) => Err(HarnessError::from_request(e, &url, timeout_ms)),
            Err(_) => Err(HarnessError::Timeout { url, timeout_ms }),
        }
    }
}
