//! Display rows and cards for each collection

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::badge::{
    activity_type_style, difficulty_style, fitness_level_style, workout_type_style, Badge,
    BadgeStyle,
};
use super::page::Present;
use crate::model::{Activity, EntityId, LeaderboardEntry, Team, User, Workout};

pub const NO_TEAM: &str = "No Team";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description available";

/// One table cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    Text(String),
    Strong(String),
    /// De-emphasized fallback text
    Muted(String),
    Badge(Badge),
}

impl Cell {
    /// Plain text content, without styling
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Strong(s) | Cell::Muted(s) => s,
            Cell::Badge(badge) => &badge.text,
        }
    }
}

/// Tabular form of a display item
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRow {
    pub key: String,
    pub username: String,
    pub email: String,
    pub team: Cell,
    pub fitness: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCard {
    pub key: String,
    pub name: String,
    pub description: String,
    pub members: Badge,
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRow {
    pub key: String,
    pub user: String,
    pub activity_type: Badge,
    pub duration: String,
    pub calories: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub key: String,
    pub rank: String,
    pub rank_class: &'static str,
    pub user: String,
    pub team: Cell,
    pub points: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutCard {
    pub key: String,
    pub title: String,
    pub workout_type: Badge,
    pub description: String,
    pub difficulty: Badge,
    pub duration: String,
    pub calories: String,
}

/// Medal for the top three positions, 1-based rank otherwise
pub fn rank_glyph(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        _ => (index + 1).to_string(),
    }
}

pub fn rank_class(index: usize) -> &'static str {
    match index {
        0 => "rank-1",
        1 => "rank-2",
        2 => "rank-3",
        _ => "rank-other",
    }
}

/// Format an API timestamp as `M/D/YYYY`.
///
/// Accepts RFC 3339, naive date-times and plain dates; anything else is `None`.
pub fn format_date(raw: &str) -> Option<String> {
    let date = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        dt.date_naive()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        dt.date()
    } else {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?
    };

    Some(date.format("%-m/%-d/%Y").to_string())
}

fn display_date(raw: Option<&str>) -> String {
    raw.and_then(format_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Empty strings count as missing
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

fn row_key(id: Option<&EntityId>, index: usize) -> String {
    id.map(ToString::to_string)
        .unwrap_or_else(|| index.to_string())
}

fn user_label(user_name: Option<&String>, user: Option<&EntityId>) -> String {
    non_empty(user_name)
        .map(str::to_string)
        .or_else(|| user.map(ToString::to_string))
        .unwrap_or_default()
}

fn team_cell(team_name: Option<&String>) -> Cell {
    match non_empty(team_name) {
        Some(name) => Cell::Badge(Badge::new(name, BadgeStyle::Primary)),
        None => Cell::Muted(NO_TEAM.to_string()),
    }
}

impl Present for User {
    type Item = UserRow;

    fn present(&self, index: usize) -> UserRow {
        let level = non_empty(self.fitness_level.as_ref());

        UserRow {
            key: row_key(self.id.as_ref(), index),
            username: self.username.clone(),
            email: self.email.clone(),
            team: team_cell(self.team_name.as_ref()),
            fitness: Badge::new(
                level.unwrap_or(NOT_AVAILABLE),
                fitness_level_style(level.unwrap_or_default()),
            ),
        }
    }
}

impl Present for Team {
    type Item = TeamCard;

    fn present(&self, index: usize) -> TeamCard {
        let members = self.member_count.unwrap_or(0);
        let noun = if members == 1 { "Member" } else { "Members" };

        TeamCard {
            key: row_key(self.id.as_ref(), index),
            name: self.name.clone(),
            description: non_empty(self.description.as_ref())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            members: Badge::new(format!("👥 {} {}", members, noun), BadgeStyle::Primary),
            created: display_date(self.created_at.as_deref()),
        }
    }
}

impl Present for Activity {
    type Item = ActivityRow;

    fn present(&self, index: usize) -> ActivityRow {
        ActivityRow {
            key: row_key(self.id.as_ref(), index),
            user: user_label(self.user_name.as_ref(), self.user.as_ref()),
            activity_type: Badge::new(
                self.activity_type.clone(),
                activity_type_style(&self.activity_type),
            ),
            duration: format!("{} min", self.duration_minutes.unwrap_or(0)),
            calories: format!("{} kcal", self.calories_burned.unwrap_or(0)),
            date: display_date(self.date.as_deref()),
        }
    }
}

impl Present for LeaderboardEntry {
    type Item = LeaderboardRow;

    fn present(&self, index: usize) -> LeaderboardRow {
        LeaderboardRow {
            key: row_key(self.id.as_ref(), index),
            rank: rank_glyph(index),
            rank_class: rank_class(index),
            user: user_label(self.user_name.as_ref(), self.user.as_ref()),
            team: team_cell(self.team_name.as_ref()),
            points: Badge::new(
                format!("{} pts", self.total_points.unwrap_or(0)),
                BadgeStyle::Success,
            ),
        }
    }
}

impl Present for Workout {
    type Item = WorkoutCard;

    fn present(&self, index: usize) -> WorkoutCard {
        WorkoutCard {
            key: row_key(self.id.as_ref(), index),
            title: self.name.clone(),
            workout_type: Badge::new(
                self.workout_type.clone(),
                workout_type_style(&self.workout_type),
            ),
            description: non_empty(self.description.as_ref())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            difficulty: Badge::new(
                self.difficulty_level.clone(),
                difficulty_style(&self.difficulty_level),
            ),
            duration: format!("{} min", self.duration_minutes.unwrap_or(0)),
            calories: format!("{} calories", self.calories_burned.unwrap_or(0)),
        }
    }
}

impl TableRow for UserRow {
    fn headers() -> &'static [&'static str] {
        &["Username", "Email", "Team", "Fitness Level"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Strong(self.username.clone()),
            Cell::Text(self.email.clone()),
            self.team.clone(),
            Cell::Badge(self.fitness.clone()),
        ]
    }
}

impl TableRow for TeamCard {
    fn headers() -> &'static [&'static str] {
        &["Team", "Description", "Members", "Created"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Strong(self.name.clone()),
            Cell::Text(self.description.clone()),
            Cell::Badge(self.members.clone()),
            Cell::Muted(self.created.clone()),
        ]
    }
}

impl TableRow for ActivityRow {
    fn headers() -> &'static [&'static str] {
        &["User", "Activity Type", "Duration (min)", "Calories Burned", "Date"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Strong(self.user.clone()),
            Cell::Badge(self.activity_type.clone()),
            Cell::Text(self.duration.clone()),
            Cell::Text(self.calories.clone()),
            Cell::Text(self.date.clone()),
        ]
    }
}

impl TableRow for LeaderboardRow {
    fn headers() -> &'static [&'static str] {
        &["Rank", "User", "Team", "Total Points"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.rank.clone()),
            Cell::Strong(self.user.clone()),
            self.team.clone(),
            Cell::Badge(self.points.clone()),
        ]
    }
}

impl TableRow for WorkoutCard {
    fn headers() -> &'static [&'static str] {
        &["Workout", "Type", "Difficulty", "Duration", "Calories", "Description"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Strong(self.title.clone()),
            Cell::Badge(self.workout_type.clone()),
            Cell::Badge(self.difficulty.clone()),
            Cell::Text(self.duration.clone()),
            Cell::Text(self.calories.clone()),
            Cell::Muted(self.description.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{resolve, ViewState};
    use crate::view::ListView;
    use serde_json::json;

    fn items<E: Present>(payload: serde_json::Value) -> Vec<E::Item> {
        let state: ViewState<E> = resolve(Ok(payload));
        match ListView::of(&state) {
            ListView::Items { items } => items,
            _ => panic!("expected items"),
        }
    }

    #[test]
    fn test_user_row_scenario() {
        let rows = items::<User>(json!([{
            "id": 1,
            "username": "alice",
            "email": "a@x.com",
            "team_name": "Red",
            "fitness_level": "Advanced"
        }]));

        let row = &rows[0];
        assert_eq!(row.key, "1");
        assert_eq!(row.username, "alice");
        assert_eq!(row.team, Cell::Badge(Badge::new("Red", BadgeStyle::Primary)));
        assert_eq!(row.fitness, Badge::new("Advanced", BadgeStyle::Success));
    }

    #[test]
    fn test_user_row_fallbacks() {
        let rows = items::<User>(json!([{"id": 2, "username": "bob", "team_name": ""}]));

        assert_eq!(rows[0].team, Cell::Muted("No Team".to_string()));
        assert_eq!(rows[0].fitness, Badge::new("N/A", BadgeStyle::Secondary));
    }

    #[test]
    fn test_user_with_null_fields_still_renders() {
        let rows = items::<User>(json!([{
            "id": 1,
            "username": "alice",
            "email": null,
            "team_name": null,
            "fitness_level": null
        }]));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].username, "alice");
        assert_eq!(rows[0].email, "");
        assert_eq!(rows[0].team, Cell::Muted(NO_TEAM.to_string()));
        assert_eq!(rows[0].fitness, Badge::new(NOT_AVAILABLE, BadgeStyle::Secondary));
    }

    #[test]
    fn test_workout_card_scenario() {
        let cards = items::<Workout>(json!([{
            "id": 1,
            "name": "Core Blast",
            "workout_type": "HIIT",
            "difficulty_level": "Beginner",
            "duration_minutes": 30,
            "calories_burned": 250
        }]));

        let card = &cards[0];
        assert_eq!(card.title, "Core Blast");
        assert_eq!(card.workout_type, Badge::new("HIIT", BadgeStyle::Warning));
        assert_eq!(card.difficulty, Badge::new("Beginner", BadgeStyle::Success));
        assert_eq!(card.duration, "30 min");
        assert_eq!(card.calories, "250 calories");
        assert_eq!(card.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_leaderboard_keeps_order_and_ranks() {
        let rows = items::<LeaderboardEntry>(json!([
            {"user_name": "low", "total_points": 5},
            {"user_name": "high", "total_points": 500},
            {"user_name": "mid", "total_points": 50, "team_name": "Blue"},
            {"user": 42},
            {"user_name": "fifth"}
        ]));

        let users: Vec<_> = rows.iter().map(|r| r.user.as_str()).collect();
        assert_eq!(users, ["low", "high", "mid", "42", "fifth"]);

        let ranks: Vec<_> = rows.iter().map(|r| r.rank.as_str()).collect();
        assert_eq!(ranks, ["🥇", "🥈", "🥉", "4", "5"]);

        assert_eq!(rows[0].rank_class, "rank-1");
        assert_eq!(rows[4].rank_class, "rank-other");
        assert_eq!(rows[3].key, "3");
        assert_eq!(rows[3].points, Badge::new("0 pts", BadgeStyle::Success));
        assert_eq!(rows[2].team.text(), "Blue");
        assert_eq!(rows[0].team.text(), "No Team");
    }

    #[test]
    fn test_fractional_points_do_not_shift_ranks() {
        let rows = items::<LeaderboardEntry>(json!([
            {"user_name": "first", "total_points": 120.5},
            {"user_name": "second", "total_points": 100},
            {"user_name": "third", "total_points": null},
            {"user_name": "fourth", "total_calories": 40}
        ]));

        let ranked: Vec<_> = rows
            .iter()
            .map(|r| format!("{} {}", r.rank, r.user))
            .collect();
        assert_eq!(ranked, ["🥇 first", "🥈 second", "🥉 third", "4 fourth"]);

        assert_eq!(rows[0].points, Badge::new("121 pts", BadgeStyle::Success));
        assert_eq!(rows[2].points, Badge::new("0 pts", BadgeStyle::Success));
        assert_eq!(rows[3].points, Badge::new("40 pts", BadgeStyle::Success));
    }

    #[test]
    fn test_team_card_members_and_dates() {
        let cards = items::<Team>(json!([
            {"id": "a", "name": "Solo", "member_count": 1, "created_at": "2024-03-05T10:00:00Z"},
            {"id": "b", "name": "Empty", "description": "", "created_at": "garbage"}
        ]));

        assert_eq!(cards[0].members.text, "👥 1 Member");
        assert_eq!(cards[0].created, "3/5/2024");
        assert_eq!(cards[1].members.text, "👥 0 Members");
        assert_eq!(cards[1].description, NO_DESCRIPTION);
        assert_eq!(cards[1].created, "N/A");
    }

    #[test]
    fn test_activity_row() {
        let rows = items::<Activity>(json!([{
            "id": 9,
            "user": 3,
            "activity_type": "Yoga",
            "duration_minutes": 45,
            "calories_burned": 180,
            "date": "2024-11-20"
        }]));

        let row = &rows[0];
        assert_eq!(row.user, "3");
        assert_eq!(row.activity_type.style, BadgeStyle::Success);
        assert_eq!(row.duration, "45 min");
        assert_eq!(row.calories, "180 kcal");
        assert_eq!(row.date, "11/20/2024");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-01-09T08:30:00.123456"), Some("1/9/2024".to_string()));
        assert_eq!(format_date("2024-12-31T23:00:00+02:00"), Some("12/31/2024".to_string()));
        assert_eq!(format_date("yesterday"), None);
    }

    #[test]
    fn test_cells_match_headers() {
        let row = User {
            id: None,
            username: "x".to_string(),
            email: "x@y.z".to_string(),
            team_name: None,
            fitness_level: None,
        }
        .present(0);
        assert_eq!(row.cells().len(), UserRow::headers().len());
    }
}
