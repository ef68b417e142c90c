//! Transport seam between controllers and the network

use async_trait::async_trait;
use serde_json::Value;

use super::error::FetchError;

/// Performs the single GET a controller issues on activation.
///
/// Futures are not required to be `Send`: controllers run on a single-threaded
/// event loop (the browser, or a CLI's `block_on`).
#[async_trait(?Send)]
pub trait Fetcher {
    /// GET `url` and return its JSON body, or the reason it could not be had
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}
