//! # OctoFit
//!
//! A fitness dashboard: five read-only list views over users, teams,
//! activities, leaderboard entries and suggested workouts, plus the
//! navigation shell that ties them together.
//!
//! ## Modules
//!
//! - [`model`]: Entity records and collection kinds
//! - [`dashboard`]: Payload normalization and the list-view controller
//! - [`view`]: Presentation rules (badges, fallbacks, rows, routes)
//! - `config`: TOML + environment configuration (native only)
//! - `store`: Seeded in-memory collections (native only)
//! - `api`: Demo REST API with Axum (native only)
//!
//! The `native` feature (on by default) pulls in the server, HTTP client
//! and terminal stack. The browser UI depends on this crate without it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use octofit::dashboard::{Endpoints, HttpFetcher, ListController};
//! use octofit::model::User;
//!
//! #[tokio::main]
//! async fn main() {
//!     let endpoints = Endpoints::from_api_root("http://localhost:8000");
//!     let mut users = ListController::<User, _>::from_endpoints(&endpoints, HttpFetcher::new());
//!
//!     match users.activate().await {
//!         octofit::ViewState::Ready(items) => println!("{} users", items.len()),
//!         octofit::ViewState::Error(message) => eprintln!("{}", message),
//!         octofit::ViewState::Loading => unreachable!(),
//!     }
//! }
//! ```

pub mod dashboard;
pub mod model;
pub mod view;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod store;

// Re-export top-level types for convenience
pub use model::{
    Activity, Entity, EntityId, EntityKind, LeaderboardEntry, Team, UnknownEntityKind, User,
    Workout,
};

pub use dashboard::{normalize, Endpoints, FetchError, Fetcher, ListController, ViewState};

#[cfg(feature = "native")]
pub use dashboard::HttpFetcher;

pub use view::{ListView, PageInfo, Present, Route};

#[cfg(feature = "native")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, DashboardConfig, LoggingConfig, ServerConfig};

#[cfg(feature = "native")]
pub use store::Store;
