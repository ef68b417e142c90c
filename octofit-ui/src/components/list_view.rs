//! List page scaffolding
//!
//! Header, loading, error and empty states shared by the five list pages.

use leptos::*;
use octofit::view::{ListView, PageInfo};

use super::Loading;

/// Page title and subtitle
#[component]
pub fn PageHeader(page: PageInfo) -> impl IntoView {
    view! {
        <div class="mb-6">
            <h1 class="text-3xl font-bold">{page.title}</h1>
            <p class="text-gray-400 mt-1">{page.subtitle}</p>
        </div>
    }
}

/// Render a list view; `items` draws the ready-with-records case
pub fn list_body<R>(list: ListView<R>, items: impl FnOnce(Vec<R>) -> View) -> View {
    match list {
        ListView::Spinner => view! { <Loading /> }.into_view(),
        ListView::Failed { heading, message } => view! {
            <div class="bg-red-900/40 border border-red-700 rounded-xl p-6">
                <h4 class="text-lg font-semibold text-red-300">{heading}</h4>
                <p class="text-red-200 mt-2">{message}</p>
            </div>
        }
        .into_view(),
        ListView::Empty { message } => view! {
            <div class="text-center py-12">
                <p class="text-gray-400">{message}</p>
            </div>
        }
        .into_view(),
        ListView::Items { items: rows } => items(rows),
    }
}
