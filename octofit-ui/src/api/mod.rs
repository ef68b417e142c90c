//! API access
//!
//! Where the API lives and how the browser fetches from it.

pub mod client;

pub use client::{get_api_root, GlooFetcher};
