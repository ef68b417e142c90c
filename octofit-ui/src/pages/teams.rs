//! Teams Page
//!
//! One card per team.

use leptos::*;
use octofit::model::{EntityKind, Team};
use octofit::view::{ListView, PageInfo, TeamCard};

use crate::components::{list_body, BadgeLabel, PageHeader};
use crate::state::use_list_state;

#[component]
pub fn Teams() -> impl IntoView {
    let state = use_list_state::<Team>();
    let page = PageInfo::for_kind(EntityKind::Teams);

    view! {
        <div>
            <PageHeader page=page />
            {move || list_body(ListView::of(&state.get()), team_cards)}
        </div>
    }
}

fn team_cards(cards: Vec<TeamCard>) -> View {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
            {cards
                .into_iter()
                .map(|card| view! {
                    <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 flex flex-col" data-key=card.key>
                        <h5 class="text-lg font-semibold">{card.name}</h5>
                        <p class="text-gray-400 mt-2 flex-1">{card.description}</p>
                        <div class="flex items-center justify-between mt-4 text-sm">
                            <BadgeLabel badge=card.members />
                            <span class="text-gray-500">"Created: "{card.created}</span>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
    .into_view()
}
