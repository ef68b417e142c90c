//! Remote-list view-state controllers
//!
//! Each dashboard page owns one [`ListController`]: on activation it issues a
//! single GET for its collection, normalizes the payload and settles into
//! [`ViewState::Ready`] or [`ViewState::Error`].
//!
//! ```rust,ignore
//! use octofit::dashboard::{Endpoints, HttpFetcher, ListController, ViewState};
//! use octofit::model::User;
//!
//! let endpoints = Endpoints::from_api_root("http://localhost:8000");
//! let mut users = ListController::<User, _>::from_endpoints(&endpoints, HttpFetcher::new());
//!
//! match users.activate().await {
//!     ViewState::Ready(items) => println!("{} users", items.len()),
//!     ViewState::Error(message) => eprintln!("{}", message),
//!     ViewState::Loading => unreachable!(),
//! }
//! ```

mod controller;
mod endpoints;
mod error;
mod fetch;
#[cfg(feature = "native")]
mod http;
mod normalize;
mod state;

pub use controller::{decode_items, resolve, Activation, ListController};
pub use endpoints::{Endpoints, DEFAULT_API_ROOT};
pub use error::FetchError;
pub use fetch::Fetcher;
#[cfg(feature = "native")]
pub use http::HttpFetcher;
pub use normalize::normalize;
pub use state::ViewState;
