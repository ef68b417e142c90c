//! Workouts Page
//!
//! Suggested workouts as cards.

use leptos::*;
use octofit::model::{EntityKind, Workout};
use octofit::view::{ListView, PageInfo, WorkoutCard};

use crate::components::{list_body, BadgeLabel, PageHeader};
use crate::state::use_list_state;

#[component]
pub fn Workouts() -> impl IntoView {
    let state = use_list_state::<Workout>();
    let page = PageInfo::for_kind(EntityKind::Workouts);

    view! {
        <div>
            <PageHeader page=page />
            {move || list_body(ListView::of(&state.get()), workout_cards)}
        </div>
    }
}

fn workout_cards(cards: Vec<WorkoutCard>) -> View {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
            {cards
                .into_iter()
                .map(|card| view! {
                    <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 flex flex-col" data-key=card.key>
                        <div class="flex items-start justify-between">
                            <h5 class="text-lg font-semibold">{card.title}</h5>
                            <BadgeLabel badge=card.workout_type />
                        </div>
                        <p class="text-gray-400 mt-2 flex-1">{card.description}</p>
                        <div class="flex items-center space-x-4 mt-4 text-sm text-gray-300">
                            <BadgeLabel badge=card.difficulty />
                            <span>"⏱️ "{card.duration}</span>
                            <span>"🔥 "{card.calories}</span>
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
    .into_view()
}
