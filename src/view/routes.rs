//! Navigation shell
//!
//! Six fixed routes: a static welcome page and one page per collection.

use serde::Serialize;

use crate::model::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Users,
    Teams,
    Activities,
    Leaderboard,
    Workouts,
}

impl Route {
    /// All routes, in navigation order
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Users,
            Route::Teams,
            Route::Activities,
            Route::Leaderboard,
            Route::Workouts,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Users => "/users",
            Route::Teams => "/teams",
            Route::Activities => "/activities",
            Route::Leaderboard => "/leaderboard",
            Route::Workouts => "/workouts",
        }
    }

    /// Navigation link text
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Users => "Users",
            Route::Teams => "Teams",
            Route::Activities => "Activities",
            Route::Leaderboard => "Leaderboard",
            Route::Workouts => "Workouts",
        }
    }

    /// Collection whose controller this route activates
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Route::Home => None,
            Route::Users => Some(EntityKind::Users),
            Route::Teams => Some(EntityKind::Teams),
            Route::Activities => Some(EntityKind::Activities),
            Route::Leaderboard => Some(EntityKind::Leaderboard),
            Route::Workouts => Some(EntityKind::Workouts),
        }
    }

    /// Exact path match; a single trailing slash is tolerated
    pub fn from_path(path: &str) -> Option<Route> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };

        Route::all().iter().copied().find(|route| route.path() == path)
    }
}

/// Texts of the welcome page
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Welcome {
    pub heading: &'static str,
    pub lead: &'static str,
    pub hint: &'static str,
    /// `(title, text)` feature cards
    pub cards: [(&'static str, &'static str); 3],
}

pub const WELCOME: Welcome = Welcome {
    heading: "Welcome to OctoFit Tracker! 🏋️",
    lead: "Track your fitness activities, compete with your team, and achieve your fitness goals!",
    hint: "Use the navigation menu above to explore different sections of the app.",
    cards: [
        (
            "👥 Users",
            "View all registered users and their fitness levels",
        ),
        ("🏆 Teams", "Explore teams and join the competition"),
        ("📊 Leaderboard", "See who's leading the fitness challenge"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), Some(*route));
        }
    }

    #[test]
    fn test_trailing_slash_and_unknown_paths() {
        assert_eq!(Route::from_path("/users/"), Some(Route::Users));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/users/1"), None);
        assert_eq!(Route::from_path("/settings"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_home_activates_nothing() {
        assert_eq!(Route::Home.entity(), None);
        let kinds: Vec<_> = Route::all().iter().filter_map(|r| r.entity()).collect();
        assert_eq!(kinds, EntityKind::all());
    }
}
