//! In-memory record store behind the demo API
//!
//! Collections are built once (empty or seeded) and never mutated afterwards,
//! so the store is shared between handlers as a plain `Arc<Store>`.

mod seed;

use serde::Serialize;
use serde_json::Value;

use crate::model::{Activity, EntityKind, LeaderboardEntry, Team, User, Workout};

pub use seed::DEFAULT_SEED;

/// Read-only collections served by the API
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub users: Vec<User>,
    pub teams: Vec<Team>,
    pub activities: Vec<Activity>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub workouts: Vec<Workout>,
}

impl Store {
    /// A store with every collection empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store filled with deterministic demo data
    pub fn seeded(seed: u64) -> Self {
        seed::build(seed)
    }

    /// Number of records in a collection
    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Users => self.users.len(),
            EntityKind::Teams => self.teams.len(),
            EntityKind::Activities => self.activities.len(),
            EntityKind::Leaderboard => self.leaderboard.len(),
            EntityKind::Workouts => self.workouts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        EntityKind::all().iter().all(|kind| self.len(*kind) == 0)
    }

    /// A collection as JSON records, in stored order
    pub fn records(&self, kind: EntityKind) -> Result<Vec<Value>, serde_json::Error> {
        match kind {
            EntityKind::Users => to_values(&self.users),
            EntityKind::Teams => to_values(&self.teams),
            EntityKind::Activities => to_values(&self.activities),
            EntityKind::Leaderboard => to_values(&self.leaderboard),
            EntityKind::Workouts => to_values(&self.workouts),
        }
    }
}

fn to_values<T: Serialize>(items: &[T]) -> Result<Vec<Value>, serde_json::Error> {
    items.iter().map(serde_json::to_value).collect()
}
