//! HTTP API Client
//!
//! Browser-side fetcher for the OctoFit collections.

use async_trait::async_trait;
use gloo_net::http::Request;
use octofit::dashboard::{FetchError, Fetcher, DEFAULT_API_ROOT};
use serde_json::Value;

const API_ROOT_KEY: &str = "octofit_api_url";

/// Get the API root from local storage (`octofit_api_url`) or use default
pub fn get_api_root() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_ROOT_KEY).ok().flatten());

    normalize_root(stored.as_deref())
}

/// Blank values fall back to the default; trailing slashes are dropped
fn normalize_root(stored: Option<&str>) -> String {
    stored
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_ROOT)
        .trim_end_matches('/')
        .to_string()
}

/// `Fetcher` backed by the browser's fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooFetcher;

#[async_trait(?Send)]
impl Fetcher for GlooFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Http {
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}
