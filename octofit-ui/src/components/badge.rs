//! Badge Components
//!
//! Colour roles from `octofit::view` mapped onto Tailwind classes.

use leptos::*;
use octofit::view::{Badge, BadgeStyle, Cell};

fn badge_class(style: BadgeStyle) -> &'static str {
    match style {
        BadgeStyle::Primary => "bg-blue-600",
        BadgeStyle::Secondary => "bg-gray-500",
        BadgeStyle::Success => "bg-green-600",
        BadgeStyle::Danger => "bg-red-600",
        BadgeStyle::Warning => "bg-yellow-500 text-gray-900",
        BadgeStyle::Info => "bg-cyan-600",
        BadgeStyle::Dark => "bg-gray-950",
    }
}

/// A rounded coloured label
#[component]
pub fn BadgeLabel(badge: Badge) -> impl IntoView {
    view! {
        <span class=format!(
            "{} text-xs font-medium px-2 py-0.5 rounded-full text-white",
            badge_class(badge.style)
        )>
            {badge.text}
        </span>
    }
}

/// Team column: a badge, or muted fallback text
#[component]
pub fn TeamLabel(cell: Cell) -> impl IntoView {
    match cell {
        Cell::Badge(badge) => view! { <BadgeLabel badge=badge /> }.into_view(),
        other => view! {
            <span class="text-gray-500">{other.text().to_string()}</span>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_style_has_a_colour() {
        let styles = [
            BadgeStyle::Primary,
            BadgeStyle::Secondary,
            BadgeStyle::Success,
            BadgeStyle::Danger,
            BadgeStyle::Warning,
            BadgeStyle::Info,
            BadgeStyle::Dark,
        ];
        for style in styles {
            assert!(badge_class(style).starts_with("bg-"));
        }
    }
}
