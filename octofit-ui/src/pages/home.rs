//! Home Page
//!
//! Static welcome view; fetches nothing.

use leptos::*;
use octofit::view::WELCOME;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <section class="bg-gray-800 rounded-xl p-8 text-center">
                <h1 class="text-4xl font-bold mb-4">{WELCOME.heading}</h1>
                <p class="text-xl text-gray-300">{WELCOME.lead}</p>
                <hr class="my-6 border-gray-700" />
                <p class="text-gray-400">{WELCOME.hint}</p>
            </section>

            <div class="grid md:grid-cols-3 gap-4">
                {WELCOME
                    .cards
                    .iter()
                    .map(|(title, text)| view! {
                        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                            <h5 class="text-lg font-semibold mb-2">{*title}</h5>
                            <p class="text-gray-400">{*text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
