//! Endpoint configuration
//!
//! Controllers receive their URL explicitly; nothing is derived from the
//! environment at fetch time.

use serde::{Deserialize, Serialize};

use crate::model::EntityKind;

/// API root used when nothing else is configured
pub const DEFAULT_API_ROOT: &str = "http://localhost:8000";

/// One absolute URL per collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub users: String,
    pub teams: String,
    pub activities: String,
    pub leaderboard: String,
    pub workouts: String,
}

impl Endpoints {
    /// Build the standard `{root}/api/{kind}/` layout
    pub fn from_api_root(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        let url = |kind: EntityKind| format!("{}{}", root, kind.api_path());

        Self {
            users: url(EntityKind::Users),
            teams: url(EntityKind::Teams),
            activities: url(EntityKind::Activities),
            leaderboard: url(EntityKind::Leaderboard),
            workouts: url(EntityKind::Workouts),
        }
    }

    /// URL of one collection
    pub fn url_for(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Users => &self.users,
            EntityKind::Teams => &self.teams,
            EntityKind::Activities => &self.activities,
            EntityKind::Leaderboard => &self.leaderboard,
            EntityKind::Workouts => &self.workouts,
        }
    }

    /// Replace the URL of one collection
    pub fn with_override(mut self, kind: EntityKind, url: impl Into<String>) -> Self {
        let slot = match kind {
            EntityKind::Users => &mut self.users,
            EntityKind::Teams => &mut self.teams,
            EntityKind::Activities => &mut self.activities,
            EntityKind::Leaderboard => &mut self.leaderboard,
            EntityKind::Workouts => &mut self.workouts,
        };
        *slot = url.into();
        self
    }

    /// Iterate `(kind, url)` pairs in navigation order
    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, &str)> + '_ {
        EntityKind::all()
            .iter()
            .map(move |kind| (*kind, self.url_for(*kind)))
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_api_root(DEFAULT_API_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_api_root() {
        let endpoints = Endpoints::from_api_root("https://fit.example.com/");
        assert_eq!(endpoints.users, "https://fit.example.com/api/users/");
        assert_eq!(
            endpoints.url_for(EntityKind::Leaderboard),
            "https://fit.example.com/api/leaderboard/"
        );
    }

    #[test]
    fn test_override_only_touches_one_kind() {
        let endpoints = Endpoints::default()
            .with_override(EntityKind::Workouts, "http://cdn.local/workouts.json");

        assert_eq!(endpoints.workouts, "http://cdn.local/workouts.json");
        assert_eq!(endpoints.teams, "http://localhost:8000/api/teams/");
    }

    #[test]
    fn test_iter_covers_all_kinds() {
        let endpoints = Endpoints::default();
        let kinds: Vec<_> = endpoints.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, EntityKind::all());
    }
}
