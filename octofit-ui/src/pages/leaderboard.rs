//! Leaderboard Page
//!
//! Rows keep the order the API sent; position decides the medal.

use leptos::*;
use octofit::model::{EntityKind, LeaderboardEntry};
use octofit::view::{LeaderboardRow, ListView, PageInfo};

use crate::components::{list_body, BadgeLabel, PageHeader, TeamLabel};
use crate::state::use_list_state;

#[component]
pub fn Leaderboard() -> impl IntoView {
    let state = use_list_state::<LeaderboardEntry>();
    let page = PageInfo::for_kind(EntityKind::Leaderboard);

    view! {
        <div>
            <PageHeader page=page />
            {move || list_body(ListView::of(&state.get()), leaderboard_table)}
        </div>
    }
}

fn rank_color(class: &str) -> &'static str {
    match class {
        "rank-1" => "text-yellow-400",
        "rank-2" => "text-gray-300",
        "rank-3" => "text-orange-400",
        _ => "text-gray-400",
    }
}

fn leaderboard_table(rows: Vec<LeaderboardRow>) -> View {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-x-auto">
            <table class="w-full text-left">
                <thead class="bg-gray-700 text-gray-300">
                    <tr>
                        <th class="px-4 py-3">"Rank"</th>
                        <th class="px-4 py-3">"User"</th>
                        <th class="px-4 py-3">"Team"</th>
                        <th class="px-4 py-3">"Total Points"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr class="border-t border-gray-700" data-key=row.key>
                                <td class=format!(
                                    "px-4 py-3 text-xl font-bold {} {}",
                                    row.rank_class,
                                    rank_color(row.rank_class)
                                )>
                                    {row.rank}
                                </td>
                                <td class="px-4 py-3 font-semibold">{row.user}</td>
                                <td class="px-4 py-3"><TeamLabel cell=row.team /></td>
                                <td class="px-4 py-3"><BadgeLabel badge=row.points /></td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
