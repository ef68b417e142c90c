//! App Root Component
//!
//! Main application component with routing and the endpoint context.

use leptos::*;
use leptos_router::*;
use octofit::dashboard::Endpoints;
use octofit::Route as Page;

use crate::api;
use crate::components::Nav;
use crate::pages::{Activities, Home, Leaderboard, Teams, Users, Workouts};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Every list page reads its URL from here
    provide_context(Endpoints::from_api_root(&api::get_api_root()));

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=Page::Home.path() view=Home />
                        <Route path=Page::Users.path() view=Users />
                        <Route path=Page::Teams.path() view=Teams />
                        <Route path=Page::Activities.path() view=Activities />
                        <Route path=Page::Leaderboard.path() view=Leaderboard />
                        <Route path=Page::Workouts.path() view=Workouts />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=Page::Home.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
