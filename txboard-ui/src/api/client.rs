//! HTTP Data Source
//!
//! Browser `fetch` of the dashboard dataset.

use async_trait::async_trait;
use gloo_net::http::Request;
use txboard::loader::{DataSource, LoadError, LoadResult, DEFAULT_ENDPOINT};

/// Local storage key holding an endpoint override
pub const API_URL_KEY: &str = "txboard_api_url";

/// Get the data endpoint from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    match stored {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}

/// Set the data endpoint in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

/// Fetches the dataset with a single GET
pub struct GlooSource {
    endpoint: String,
}

impl GlooSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Source for the configured endpoint
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }
}

#[async_trait(?Send)]
impl DataSource for GlooSource {
    fn describe(&self) -> String {
        self.endpoint.clone()
    }

    async fn fetch(&self) -> LoadResult<String> {
        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| LoadError::Transport(format!("Network error: {}", e)))?;

        if !response.ok() {
            return Err(LoadError::Status {
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Transport(format!("Read error: {}", e)))
    }
}
