//! HTTP data source
//!
//! One GET to the configured endpoint. No headers, auth, pagination or retry.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{DataSource, LoadError, LoadResult, DEFAULT_ENDPOINT};

/// Configuration for [`HttpSource`]
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Full URL of the dataset endpoint
    pub endpoint: String,
    /// Request timeout; `None` waits as long as the server takes
    pub timeout: Option<Duration>,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

/// Fetches the dataset from an HTTP endpoint
pub struct HttpSource {
    client: Client,
    config: HttpSourceConfig,
}

impl HttpSource {
    /// Create a new source with the given configuration
    pub fn new(config: HttpSourceConfig) -> LoadResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LoadError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &HttpSourceConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.config.endpoint.clone()
    }

    async fn fetch(&self) -> LoadResult<String> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(map_request_error)
    }
}

fn map_request_error(e: reqwest::Error) -> LoadError {
    if e.is_timeout() {
        LoadError::Timeout
    } else {
        LoadError::Transport(e.to_string())
    }
}
