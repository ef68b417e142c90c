//! Entity records served by the OctoFit API
//!
//! Every entity is a passive, read-only record. Fields the dashboard can live
//! without are optional and default when absent, so partially populated
//! payloads still decode. Field aliases accept the older backend names
//! (`name`, `duration`, `calories`, ...).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a record: numeric ids and stringified object ids both occur
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Number(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::Text(s.to_string())
    }
}

/// The five collections exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Users,
    Teams,
    Activities,
    Leaderboard,
    Workouts,
}

impl EntityKind {
    /// All kinds, in navigation order
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Users,
            EntityKind::Teams,
            EntityKind::Activities,
            EntityKind::Leaderboard,
            EntityKind::Workouts,
        ]
    }

    /// Collection name as used in URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Teams => "teams",
            EntityKind::Activities => "activities",
            EntityKind::Leaderboard => "leaderboard",
            EntityKind::Workouts => "workouts",
        }
    }

    /// Path of the collection relative to the API host
    pub fn api_path(&self) -> String {
        format!("/api/{}/", self.as_str())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

/// Returned when a string names no known collection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown collection: {0}")]
pub struct UnknownEntityKind(pub String);

/// A record type belonging to one collection
pub trait Entity: DeserializeOwned + Serialize + Clone + 'static {
    const KIND: EntityKind;
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<EntityId>,
    #[serde(default, alias = "name", deserialize_with = "lenient::text_or_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub email: String,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub fitness_level: Option<String>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::Users;
}

/// A team users compete in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::whole",
        skip_serializing_if = "Option::is_none"
    )]
    pub member_count: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl Entity for Team {
    const KIND: EntityKind = EntityKind::Teams;
}

/// One logged workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<EntityId>,
    #[serde(
        default,
        alias = "user_id",
        deserialize_with = "lenient::id",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<EntityId>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub activity_type: String,
    #[serde(
        default,
        alias = "duration",
        deserialize_with = "lenient::whole",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_minutes: Option<u32>,
    #[serde(
        default,
        alias = "calories",
        deserialize_with = "lenient::whole",
        skip_serializing_if = "Option::is_none"
    )]
    pub calories_burned: Option<u32>,
    /// Kilometres, only for distance sports
    #[serde(
        default,
        deserialize_with = "lenient::decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub distance: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,
}

impl Entity for Activity {
    const KIND: EntityKind = EntityKind::Activities;
}

/// A leaderboard standing. Entries arrive already ordered by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(
        default,
        deserialize_with = "lenient::id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<EntityId>,
    #[serde(
        default,
        alias = "user_id",
        deserialize_with = "lenient::id",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<EntityId>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub team_name: Option<String>,
    #[serde(
        default,
        alias = "total_calories",
        deserialize_with = "lenient::whole",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_points: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::whole",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_activities: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::whole",
        skip_serializing_if = "Option::is_none"
    )]
    pub rank: Option<u32>,
}

impl Entity for LeaderboardEntry {
    const KIND: EntityKind = EntityKind::Leaderboard;
}

/// A suggested workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(default, alias = "category", deserialize_with = "lenient::text_or_empty")]
    pub workout_type: String,
    #[serde(default, alias = "difficulty", deserialize_with = "lenient::text_or_empty")]
    pub difficulty_level: String,
    #[serde(
        default,
        alias = "duration",
        deserialize_with = "lenient::whole",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_minutes: Option<u32>,
    #[serde(
        default,
        alias = "calories_estimate",
        deserialize_with = "lenient::whole",
        skip_serializing_if = "Option::is_none"
    )]
    pub calories_burned: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Entity for Workout {
    const KIND: EntityKind = EntityKind::Workouts;
}

/// Field decoders that never reject a record.
///
/// `null`, or a value of the wrong JSON type, reads as missing. Numbers may
/// arrive as floats or numeric strings and are rounded to the nearest whole
/// value; anything out of range for the field reads as missing.
mod lenient {
    use super::EntityId;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn raw<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Value>, D::Error> {
        Option::<Value>::deserialize(d)
    }

    fn as_f64(value: &Value) -> Option<f64> {
        let n = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|n| n.is_finite())
    }

    fn as_i64(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) if n.is_i64() => n.as_i64(),
            _ => {
                let n = as_f64(value)?.round();
                (n >= i64::MIN as f64 && n <= i64::MAX as f64).then_some(n as i64)
            }
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match raw(d)? {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn text_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(text(d)?.unwrap_or_default())
    }

    pub fn whole<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<i64>,
    {
        Ok(raw(d)?
            .as_ref()
            .and_then(as_i64)
            .and_then(|n| T::try_from(n).ok()))
    }

    pub fn decimal<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(raw(d)?.as_ref().and_then(as_f64))
    }

    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<EntityId>, D::Error> {
        Ok(match raw(d)? {
            Some(Value::String(s)) => Some(EntityId::Text(s)),
            Some(value @ Value::Number(_)) => match value.as_i64() {
                Some(n) => Some(EntityId::Number(n)),
                None => Some(EntityId::Text(value.to_string())),
            },
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_id_accepts_numbers_and_strings() {
        let n: EntityId = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(n, EntityId::Number(7));

        let s: EntityId = serde_json::from_value(json!("64f1c0ffee")).unwrap();
        assert_eq!(s.to_string(), "64f1c0ffee");
    }

    #[test]
    fn test_entity_kind_parse() {
        assert_eq!("users".parse::<EntityKind>(), Ok(EntityKind::Users));
        assert_eq!(EntityKind::Leaderboard.api_path(), "/api/leaderboard/");
        assert!("steps".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_user_accepts_backend_field_names() {
        let user: User = serde_json::from_value(json!({
            "id": "abc",
            "name": "Tony Stark",
            "email": "ironman@marvel.com",
            "team_id": "1"
        }))
        .unwrap();

        assert_eq!(user.username, "Tony Stark");
        assert_eq!(user.team_name, None);
        assert_eq!(user.fitness_level, None);
    }

    #[test]
    fn test_workout_aliases() {
        let workout: Workout = serde_json::from_value(json!({
            "name": "Flash Speed Circuit",
            "category": "HIIT",
            "difficulty": "Hard",
            "duration": 30,
            "calories_estimate": 500
        }))
        .unwrap();

        assert_eq!(workout.workout_type, "HIIT");
        assert_eq!(workout.difficulty_level, "Hard");
        assert_eq!(workout.duration_minutes, Some(30));
        assert_eq!(workout.calories_burned, Some(500));
        assert_eq!(workout.description, None);
    }

    #[test]
    fn test_null_fields_read_as_missing() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "username": "alice",
            "email": null,
            "team_name": null,
            "fitness_level": null
        }))
        .unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "");
        assert_eq!(user.team_name, None);
        assert_eq!(user.fitness_level, None);

        let activity: Activity = serde_json::from_value(json!({
            "activity_type": null,
            "duration_minutes": null,
            "distance": null,
            "user": null
        }))
        .unwrap();
        assert_eq!(activity.activity_type, "");
        assert_eq!(activity.duration_minutes, None);
        assert_eq!(activity.user, None);
    }

    #[test]
    fn test_float_numbers_are_rounded() {
        let entry: LeaderboardEntry = serde_json::from_value(json!({
            "user_name": "first",
            "total_points": 120.5,
            "total_activities": "7",
            "rank": 1.0
        }))
        .unwrap();
        assert_eq!(entry.total_points, Some(121));
        assert_eq!(entry.total_activities, Some(7));
        assert_eq!(entry.rank, Some(1));

        let activity: Activity = serde_json::from_value(json!({
            "duration": 29.6,
            "calories": -10,
            "distance": "5.2"
        }))
        .unwrap();
        assert_eq!(activity.duration_minutes, Some(30));
        // negative counts do not fit the field
        assert_eq!(activity.calories_burned, None);
        assert_eq!(activity.distance, Some(5.2));
    }

    #[test]
    fn test_wrong_types_read_as_missing() {
        let team: Team = serde_json::from_value(json!({
            "id": 2.5,
            "name": 42,
            "description": ["not", "text"],
            "member_count": {"n": 3}
        }))
        .unwrap();

        assert_eq!(team.id, Some(EntityId::Text("2.5".to_string())));
        assert_eq!(team.name, "42");
        assert_eq!(team.description, None);
        assert_eq!(team.member_count, None);
    }

    #[test]
    fn test_leaderboard_total_calories_alias() {
        let entry: LeaderboardEntry = serde_json::from_value(json!({
            "user": "64f1c0ffee",
            "total_calories": 2450
        }))
        .unwrap();

        assert_eq!(entry.total_points, Some(2450));
        assert_eq!(entry.user, Some(EntityId::from("64f1c0ffee")));
    }

    #[test]
    fn test_missing_fields_default() {
        let entry: LeaderboardEntry = serde_json::from_value(json!({})).unwrap();
        assert_eq!(entry.total_points, None);
        assert_eq!(entry.id, None);
    }
}
