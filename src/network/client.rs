//! HTTP client wrapper - executes the version request and decodes the body

use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::constants::{CHECK_TIMEOUT, DEFAULT_SCHEME, SERVER_VERSION_PATH};
use crate::models::ServerVersionResponse;
use crate::network::{CheckError, VersionChecker};

/// Version checker backed by reqwest
#[derive(Clone, Debug)]
pub struct HttpVersionChecker {
    client: reqwest::Client,
    scheme: String,
    timeout: Duration,
}

impl Default for HttpVersionChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpVersionChecker {
    pub fn new() -> Self {
        HttpVersionChecker {
            client: create_client(CHECK_TIMEOUT),
            scheme: String::from(DEFAULT_SCHEME),
            timeout: CHECK_TIMEOUT,
        }
    }

    /// Use another scheme than https, e.g. plain http against a local server
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = create_client(timeout);
        self.timeout = timeout;
        self
    }

    /// Full URL of the version endpoint for a hostname, used verbatim
    pub fn version_url(&self, hostname: &str) -> String {
        format!("{}://{}{}", self.scheme, hostname, SERVER_VERSION_PATH)
    }
}

#[async_trait]
impl VersionChecker for HttpVersionChecker {
    async fn check(&self, hostname: &str) -> Result<String, CheckError> {
        let url = self.version_url(hostname);
        let start = Instant::now();
        tracing::info!(url = %url, "Checking server version");

        // The per-request timeout also covers a client that fell back to defaults
        let resp = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = ?e, "Request failed");
                CheckError::from_reqwest(url.clone(), e, self.timeout)
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| {
            tracing::warn!(url = %url, error = ?e, "Error reading body");
            CheckError::from_reqwest(url.clone(), e, self.timeout)
        })?;
        tracing::debug!(
            status,
            time_ms = start.elapsed().as_millis() as u64,
            body = %body,
            "Response received"
        );

        let version = parse_server_version(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Malformed version response");
            e
        })?;
        tracing::info!(status, version = %version, "Server version decoded");
        Ok(version)
    }
}

/// Extract `server_version` from a response body; a missing field is an empty version
pub fn parse_server_version(body: &str) -> Result<String, CheckError> {
    let parsed: ServerVersionResponse = serde_json::from_str(body)?;
    Ok(parsed.server_version)
}

/// Create an HTTP client with the given overall timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
