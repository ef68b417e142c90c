//! Users Page

use leptos::*;
use octofit::model::{EntityKind, User};
use octofit::view::{ListView, PageInfo, UserRow};

use crate::components::{list_body, BadgeLabel, PageHeader, TeamLabel};
use crate::state::use_list_state;

#[component]
pub fn Users() -> impl IntoView {
    let state = use_list_state::<User>();
    let page = PageInfo::for_kind(EntityKind::Users);

    view! {
        <div>
            <PageHeader page=page />
            {move || list_body(ListView::of(&state.get()), users_table)}
        </div>
    }
}

fn users_table(rows: Vec<UserRow>) -> View {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-x-auto">
            <table class="w-full text-left">
                <thead class="bg-gray-700 text-gray-300">
                    <tr>
                        <th class="px-4 py-3">"Username"</th>
                        <th class="px-4 py-3">"Email"</th>
                        <th class="px-4 py-3">"Team"</th>
                        <th class="px-4 py-3">"Fitness Level"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr class="border-t border-gray-700" data-key=row.key>
                                <td class="px-4 py-3 font-semibold">{row.username}</td>
                                <td class="px-4 py-3">{row.email}</td>
                                <td class="px-4 py-3"><TeamLabel cell=row.team /></td>
                                <td class="px-4 py-3"><BadgeLabel badge=row.fitness /></td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
