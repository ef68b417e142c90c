//! Badges and their colour rules

use serde::Serialize;

/// Colour role of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Dark,
}

impl BadgeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Primary => "primary",
            BadgeStyle::Secondary => "secondary",
            BadgeStyle::Success => "success",
            BadgeStyle::Danger => "danger",
            BadgeStyle::Warning => "warning",
            BadgeStyle::Info => "info",
            BadgeStyle::Dark => "dark",
        }
    }
}

/// A short coloured label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: String,
    pub style: BadgeStyle,
}

impl Badge {
    pub fn new(text: impl Into<String>, style: BadgeStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// User fitness level
pub fn fitness_level_style(level: &str) -> BadgeStyle {
    match level {
        "Advanced" => BadgeStyle::Success,
        "Intermediate" => BadgeStyle::Info,
        "Beginner" => BadgeStyle::Warning,
        _ => BadgeStyle::Secondary,
    }
}

/// Logged activity type
pub fn activity_type_style(activity_type: &str) -> BadgeStyle {
    match activity_type {
        "Running" => BadgeStyle::Danger,
        "Cycling" => BadgeStyle::Info,
        "Swimming" => BadgeStyle::Primary,
        "Weightlifting" => BadgeStyle::Dark,
        "Yoga" => BadgeStyle::Success,
        _ => BadgeStyle::Secondary,
    }
}

/// Suggested workout type
pub fn workout_type_style(workout_type: &str) -> BadgeStyle {
    match workout_type {
        "Cardio" => BadgeStyle::Danger,
        "Strength" => BadgeStyle::Dark,
        "Flexibility" => BadgeStyle::Success,
        "HIIT" => BadgeStyle::Warning,
        _ => BadgeStyle::Info,
    }
}

/// Workout difficulty
pub fn difficulty_style(difficulty: &str) -> BadgeStyle {
    match difficulty {
        "Advanced" => BadgeStyle::Danger,
        "Intermediate" => BadgeStyle::Warning,
        _ => BadgeStyle::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_levels() {
        assert_eq!(fitness_level_style("Advanced"), BadgeStyle::Success);
        assert_eq!(fitness_level_style("Intermediate"), BadgeStyle::Info);
        assert_eq!(fitness_level_style("Beginner"), BadgeStyle::Warning);
        assert_eq!(fitness_level_style("advanced"), BadgeStyle::Secondary);
        assert_eq!(fitness_level_style(""), BadgeStyle::Secondary);
    }

    #[test]
    fn test_activity_types() {
        assert_eq!(activity_type_style("Running"), BadgeStyle::Danger);
        assert_eq!(activity_type_style("Weightlifting"), BadgeStyle::Dark);
        assert_eq!(activity_type_style("Boxing"), BadgeStyle::Secondary);
    }

    #[test]
    fn test_workout_styles() {
        assert_eq!(workout_type_style("HIIT"), BadgeStyle::Warning);
        assert_eq!(workout_type_style("Combat"), BadgeStyle::Info);
        assert_eq!(difficulty_style("Advanced"), BadgeStyle::Danger);
        assert_eq!(difficulty_style("Beginner"), BadgeStyle::Success);
        assert_eq!(difficulty_style(""), BadgeStyle::Success);
    }
}
