//! Page metadata and list views

use serde::Serialize;

use crate::dashboard::ViewState;
use crate::model::{Entity, EntityKind};

/// Static texts of one collection page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub kind: EntityKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub empty_message: &'static str,
    pub error_heading: &'static str,
}

impl PageInfo {
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Users => Self {
                kind,
                title: "👥 Users",
                subtitle: "View all registered users and their fitness profiles",
                empty_message: "No users found.",
                error_heading: "⚠️ Error Loading Users",
            },
            EntityKind::Teams => Self {
                kind,
                title: "🏆 Teams",
                subtitle: "Explore teams and join the competition",
                empty_message: "No teams found.",
                error_heading: "⚠️ Error Loading Teams",
            },
            EntityKind::Activities => Self {
                kind,
                title: "🏃 Activities",
                subtitle: "Track all fitness activities and progress",
                empty_message: "No activities found.",
                error_heading: "⚠️ Error Loading Activities",
            },
            EntityKind::Leaderboard => Self {
                kind,
                title: "📊 Leaderboard",
                subtitle: "Top performers in the OctoFit challenge",
                empty_message: "No leaderboard data available.",
                error_heading: "⚠️ Error Loading Leaderboard",
            },
            EntityKind::Workouts => Self {
                kind,
                title: "💪 Suggested Workouts",
                subtitle: "Personalized workout recommendations for your fitness journey",
                empty_message: "No workouts available.",
                error_heading: "⚠️ Error Loading Workouts",
            },
        }
    }
}

/// An entity that knows how it is displayed
pub trait Present: Entity {
    /// Row or card shown for one record
    type Item;

    /// Build the display item; `index` is the position in the received list
    fn present(&self, index: usize) -> Self::Item;
}

/// What a page renders for a given view state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ListView<R> {
    /// Loading indicator
    Spinner,
    /// Error panel
    Failed {
        heading: &'static str,
        message: String,
    },
    /// Ready with nothing to show
    Empty { message: &'static str },
    /// Ready with items, in the order received
    Items { items: Vec<R> },
}

impl<R> ListView<R> {
    /// Derive the list view of a controller state
    pub fn of<E: Present<Item = R>>(state: &ViewState<E>) -> Self {
        let page = PageInfo::for_kind(E::KIND);

        match state {
            ViewState::Loading => ListView::Spinner,
            ViewState::Error(message) => ListView::Failed {
                heading: page.error_heading,
                message: message.clone(),
            },
            ViewState::Ready(items) if items.is_empty() => ListView::Empty {
                message: page.empty_message,
            },
            ViewState::Ready(items) => ListView::Items {
                items: items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| item.present(index))
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Team, User};
    use crate::view::UserRow;

    #[test]
    fn test_loading_shows_spinner() {
        let view: ListView<UserRow> = ListView::of(&ViewState::<User>::Loading);
        assert_eq!(view, ListView::Spinner);
    }

    #[test]
    fn test_error_shows_heading_and_message() {
        let state = ViewState::<Team>::Error("HTTP error! status: 500".to_string());
        match ListView::of(&state) {
            ListView::Failed { heading, message } => {
                assert_eq!(heading, "⚠️ Error Loading Teams");
                assert_eq!(message, "HTTP error! status: 500");
            }
            other => panic!("expected failure view, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_ready_shows_empty_message_not_items() {
        let view = ListView::of(&ViewState::<User>::Ready(Vec::new()));
        assert_eq!(
            view,
            ListView::Empty {
                message: "No users found."
            }
        );
    }

    #[test]
    fn test_every_kind_has_texts() {
        for kind in EntityKind::all() {
            let page = PageInfo::for_kind(*kind);
            assert_eq!(page.kind, *kind);
            assert!(!page.title.is_empty());
            assert!(page.error_heading.starts_with("⚠️ Error Loading"));
        }
    }
}
