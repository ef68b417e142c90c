//! Demo data
//!
//! Two superhero teams, twelve members, a few weeks of random activities, a
//! leaderboard computed from them and a fixed set of suggested workouts. The
//! same seed always yields the same records (dates are relative to the anchor).

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::Store;
use crate::model::{Activity, EntityId, LeaderboardEntry, Team, User, Workout};

pub const DEFAULT_SEED: u64 = 8000;

const TEAMS: [(&str, &str); 2] = [
    ("Team Marvel", "Earth's Mightiest Heroes"),
    ("Team DC", "Justice League Members"),
];

/// `(username, email, team index)`
const HEROES: [(&str, &str, usize); 12] = [
    ("ironman", "ironman@marvel.com", 0),
    ("captainamerica", "captainamerica@marvel.com", 0),
    ("thor", "thor@marvel.com", 0),
    ("blackwidow", "blackwidow@marvel.com", 0),
    ("hulk", "hulk@marvel.com", 0),
    ("spiderman", "spiderman@marvel.com", 0),
    ("superman", "superman@dc.com", 1),
    ("batman", "batman@dc.com", 1),
    ("wonderwoman", "wonderwoman@dc.com", 1),
    ("flash", "flash@dc.com", 1),
    ("aquaman", "aquaman@dc.com", 1),
    ("greenlantern", "greenlantern@dc.com", 1),
];

const FITNESS_LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

const ACTIVITY_TYPES: [&str; 6] = [
    "Running",
    "Swimming",
    "Cycling",
    "Weightlifting",
    "Yoga",
    "Boxing",
];

const DISTANCE_SPORTS: [&str; 3] = ["Running", "Cycling", "Swimming"];

/// `(name, description, difficulty, minutes, calories, type)`
const WORKOUTS: [(&str, &str, &str, u32, u32, &str); 8] = [
    (
        "Super Soldier Strength",
        "High-intensity strength training inspired by Captain America",
        "Advanced",
        60,
        600,
        "Strength",
    ),
    (
        "Web-Slinger Cardio",
        "Fast-paced cardio workout like Spider-Man swinging through the city",
        "Intermediate",
        45,
        450,
        "Cardio",
    ),
    (
        "Amazon Warrior Training",
        "Combat-focused workout inspired by Wonder Woman",
        "Advanced",
        75,
        700,
        "Combat",
    ),
    (
        "Flash Speed Circuit",
        "High-speed interval training for maximum calorie burn",
        "Advanced",
        30,
        500,
        "HIIT",
    ),
    (
        "Zen Master Meditation",
        "Mindfulness and flexibility workout",
        "Beginner",
        30,
        150,
        "Flexibility",
    ),
    (
        "Dark Knight Endurance",
        "Batman-inspired endurance and stamina training",
        "Intermediate",
        60,
        550,
        "Endurance",
    ),
    (
        "Asgardian Power Lift",
        "Thor-inspired heavy lifting and power training",
        "Advanced",
        50,
        600,
        "Strength",
    ),
    (
        "Atlantean Swimming",
        "Aquaman-inspired swimming workout for full-body conditioning",
        "Intermediate",
        45,
        400,
        "Swimming",
    ),
];

pub(super) fn build(seed: u64) -> Store {
    build_at(seed, Utc::now())
}

pub(super) fn build_at(seed: u64, anchor: DateTime<Utc>) -> Store {
    let mut rng = StdRng::seed_from_u64(seed);

    let teams: Vec<Team> = TEAMS
        .iter()
        .enumerate()
        .map(|(i, (name, description))| Team {
            id: Some(EntityId::Number(i as i64 + 1)),
            name: name.to_string(),
            description: Some(description.to_string()),
            member_count: Some(HEROES.iter().filter(|h| h.2 == i).count() as u32),
            created_at: Some((anchor - Duration::days(60)).to_rfc3339()),
        })
        .collect();

    let users: Vec<User> = HEROES
        .iter()
        .enumerate()
        .map(|(i, (username, email, team))| User {
            id: Some(EntityId::Number(i as i64 + 1)),
            username: username.to_string(),
            email: email.to_string(),
            team_name: Some(TEAMS[*team].0.to_string()),
            fitness_level: FITNESS_LEVELS.choose(&mut rng).map(|l| l.to_string()),
        })
        .collect();

    let mut activities = Vec::new();
    let mut leaderboard = Vec::new();

    for user in &users {
        let count = rng.random_range(5..=15);
        let mut total_calories: i64 = 0;

        for _ in 0..count {
            let activity_type = ACTIVITY_TYPES.choose(&mut rng).copied().unwrap_or("Running");
            let duration: u32 = rng.random_range(20..=120);
            let distance = DISTANCE_SPORTS
                .contains(&activity_type)
                .then(|| (rng.random_range(1.0..20.0_f64) * 100.0).round() / 100.0);
            let calories = duration * rng.random_range(5..=10);
            let date = anchor - Duration::days(rng.random_range(1..=30));

            total_calories += i64::from(calories);
            activities.push(Activity {
                id: Some(EntityId::Number(activities.len() as i64 + 1)),
                user: user.id.clone(),
                user_name: Some(user.username.clone()),
                activity_type: activity_type.to_string(),
                duration_minutes: Some(duration),
                calories_burned: Some(calories),
                distance,
                date: Some(date.to_rfc3339()),
            });
        }

        leaderboard.push(LeaderboardEntry {
            id: None,
            user: user.id.clone(),
            user_name: Some(user.username.clone()),
            team_name: user.team_name.clone(),
            total_points: Some(total_calories),
            total_activities: Some(count),
            rank: None,
        });
    }

    // Stable sort keeps user order among ties
    leaderboard.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for (i, entry) in leaderboard.iter_mut().enumerate() {
        entry.id = Some(EntityId::Number(i as i64 + 1));
        entry.rank = Some(i as u32 + 1);
    }

    let workouts = WORKOUTS
        .iter()
        .enumerate()
        .map(
            |(i, (name, description, difficulty, minutes, calories, workout_type))| Workout {
                id: Some(EntityId::Number(i as i64 + 1)),
                name: name.to_string(),
                workout_type: workout_type.to_string(),
                difficulty_level: difficulty.to_string(),
                duration_minutes: Some(*minutes),
                calories_burned: Some(*calories),
                description: Some(description.to_string()),
            },
        )
        .collect();

    Store {
        users,
        teams,
        activities,
        leaderboard,
        workouts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = build_at(7, anchor());
        let b = build_at(7, anchor());

        assert_eq!(a.users, b.users);
        assert_eq!(a.activities, b.activities);
        assert_eq!(a.leaderboard, b.leaderboard);
    }

    #[test]
    fn test_collection_sizes() {
        let store = build_at(DEFAULT_SEED, anchor());

        assert_eq!(store.teams.len(), 2);
        assert_eq!(store.users.len(), 12);
        assert_eq!(store.leaderboard.len(), 12);
        assert_eq!(store.workouts.len(), 8);
        assert!(store.activities.len() >= 12 * 5 && store.activities.len() <= 12 * 15);
        assert_eq!(store.teams[0].member_count, Some(6));
    }

    #[test]
    fn test_leaderboard_sorted_and_ranked() {
        let store = build_at(DEFAULT_SEED, anchor());

        for pair in store.leaderboard.windows(2) {
            assert!(pair[0].total_points >= pair[1].total_points);
        }
        assert_eq!(store.leaderboard[0].rank, Some(1));
        assert_eq!(store.leaderboard[11].rank, Some(12));
    }

    #[test]
    fn test_points_match_activities() {
        let store = build_at(DEFAULT_SEED, anchor());
        let top = &store.leaderboard[0];

        let calories: i64 = store
            .activities
            .iter()
            .filter(|a| a.user == top.user)
            .map(|a| i64::from(a.calories_burned.unwrap_or(0)))
            .sum();
        assert_eq!(top.total_points, Some(calories));
    }

    #[test]
    fn test_distance_only_for_distance_sports() {
        let store = build_at(DEFAULT_SEED, anchor());

        for activity in &store.activities {
            let is_distance_sport = DISTANCE_SPORTS.contains(&activity.activity_type.as_str());
            assert_eq!(activity.distance.is_some(), is_distance_sport);
        }
    }
}
