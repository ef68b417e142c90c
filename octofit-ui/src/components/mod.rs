//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod badge;
pub mod list_view;
pub mod loading;
pub mod nav;

pub use badge::{BadgeLabel, TeamLabel};
pub use list_view::{list_body, PageHeader};
pub use loading::Loading;
pub use nav::Nav;
