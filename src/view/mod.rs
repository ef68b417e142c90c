//! Presentation layer
//!
//! Framework-independent description of what each page shows. The browser
//! front-end and the terminal renderer both consume [`ListView`]s built here,
//! so fallback labels and badge styling live in one place.

mod badge;
mod page;
mod rows;
mod routes;
#[cfg(feature = "native")]
pub mod terminal;

pub use badge::{
    activity_type_style, difficulty_style, fitness_level_style, workout_type_style, Badge,
    BadgeStyle,
};
pub use page::{ListView, PageInfo, Present};
pub use rows::{
    format_date, rank_class, rank_glyph, ActivityRow, Cell, LeaderboardRow, TableRow, TeamCard,
    UserRow, WorkoutCard, NO_DESCRIPTION, NO_TEAM, NOT_AVAILABLE,
};
pub use routes::{Route, Welcome, WELCOME};
