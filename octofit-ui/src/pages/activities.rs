//! Activities Page

use leptos::*;
use octofit::model::{Activity, EntityKind};
use octofit::view::{ActivityRow, ListView, PageInfo};

use crate::components::{list_body, BadgeLabel, PageHeader};
use crate::state::use_list_state;

#[component]
pub fn Activities() -> impl IntoView {
    let state = use_list_state::<Activity>();
    let page = PageInfo::for_kind(EntityKind::Activities);

    view! {
        <div>
            <PageHeader page=page />
            {move || list_body(ListView::of(&state.get()), activities_table)}
        </div>
    }
}

fn activities_table(rows: Vec<ActivityRow>) -> View {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-x-auto">
            <table class="w-full text-left">
                <thead class="bg-gray-700 text-gray-300">
                    <tr>
                        <th class="px-4 py-3">"User"</th>
                        <th class="px-4 py-3">"Activity Type"</th>
                        <th class="px-4 py-3">"Duration (min)"</th>
                        <th class="px-4 py-3">"Calories Burned"</th>
                        <th class="px-4 py-3">"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr class="border-t border-gray-700" data-key=row.key>
                                <td class="px-4 py-3 font-semibold">{row.user}</td>
                                <td class="px-4 py-3"><BadgeLabel badge=row.activity_type /></td>
                                <td class="px-4 py-3">{row.duration}</td>
                                <td class="px-4 py-3">{row.calories}</td>
                                <td class="px-4 py-3">{row.date}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
