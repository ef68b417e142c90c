//! OctoFit Dashboard
//!
//! Fitness tracker dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Users, teams, activities, leaderboard and workout listings
//! - Welcome page with the navigation shell
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every list page drives an `octofit::ListController` through a
//! gloo-net fetcher; what it shows comes from `octofit::view`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
