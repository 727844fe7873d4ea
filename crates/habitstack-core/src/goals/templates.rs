//! Goal templates per habit category.

use crate::habit::{HabitCategory, Priority};

/// A long-term goal shape, instantiated against a source habit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub target: f64,
    pub unit: &'static str,
    /// Deadline offset from creation
    pub deadline_days: i64,
    pub priority: Priority,
    pub category: HabitCategory,
}

const fn template(
    title: &'static str,
    description: &'static str,
    target: f64,
    unit: &'static str,
    deadline_days: i64,
    priority: Priority,
    category: HabitCategory,
) -> GoalTemplate {
    GoalTemplate {
        title,
        description,
        target,
        unit,
        deadline_days,
        priority,
        category,
    }
}

const HEALTH: &[GoalTemplate] = &[
    template(
        "Walk 100 Kilometers",
        "Build endurance by walking a little every day.",
        100.0,
        "km",
        60,
        Priority::High,
        HabitCategory::Health,
    ),
    template(
        "Hydration Month",
        "Hit your water target every day for a month.",
        30.0,
        "days",
        30,
        Priority::Medium,
        HabitCategory::Health,
    ),
    template(
        "Sleep Seven Hours",
        "Get at least seven hours of sleep on most nights.",
        21.0,
        "nights",
        30,
        Priority::Medium,
        HabitCategory::Health,
    ),
    template(
        "Strength Foundation",
        "Complete regular strength sessions for eight weeks.",
        24.0,
        "workouts",
        56,
        Priority::High,
        HabitCategory::Health,
    ),
    template(
        "Cook at Home",
        "Prepare your own meals instead of ordering in.",
        20.0,
        "meals",
        30,
        Priority::Low,
        HabitCategory::Health,
    ),
];

const PRODUCTIVITY: &[GoalTemplate] = &[
    template(
        "Forty Hours of Deep Work",
        "Accumulate focused, distraction-free work time.",
        40.0,
        "hours",
        30,
        Priority::High,
        HabitCategory::Productivity,
    ),
    template(
        "Read Three Books",
        "Finish three books this quarter.",
        3.0,
        "books",
        90,
        Priority::Medium,
        HabitCategory::Productivity,
    ),
    template(
        "Inbox Zero Days",
        "End the day with an empty inbox.",
        15.0,
        "days",
        30,
        Priority::Low,
        HabitCategory::Productivity,
    ),
    template(
        "Ship Project Milestones",
        "Deliver concrete milestones on a personal project.",
        5.0,
        "milestones",
        60,
        Priority::High,
        HabitCategory::Productivity,
    ),
];

const MINDFULNESS: &[GoalTemplate] = &[
    template(
        "Thirty Days of Meditation",
        "Meditate at least once a day for thirty days.",
        30.0,
        "sessions",
        30,
        Priority::High,
        HabitCategory::Mindfulness,
    ),
    template(
        "Mindful Minutes",
        "Collect minutes of mindful practice.",
        300.0,
        "minutes",
        45,
        Priority::Medium,
        HabitCategory::Mindfulness,
    ),
    template(
        "Reflective Journal",
        "Write reflective journal entries.",
        20.0,
        "entries",
        30,
        Priority::Medium,
        HabitCategory::Mindfulness,
    ),
    template(
        "Digital Sabbaths",
        "Take full days away from screens.",
        4.0,
        "days",
        28,
        Priority::Low,
        HabitCategory::Mindfulness,
    ),
];

const SOCIAL: &[GoalTemplate] = &[
    template(
        "Reconnect with Friends",
        "Have meaningful conversations with people you miss.",
        12.0,
        "conversations",
        30,
        Priority::Medium,
        HabitCategory::Social,
    ),
    template(
        "Host a Gathering",
        "Bring people together at your place.",
        2.0,
        "events",
        60,
        Priority::Low,
        HabitCategory::Social,
    ),
    template(
        "Volunteer Hours",
        "Give time to a cause you care about.",
        10.0,
        "hours",
        90,
        Priority::Medium,
        HabitCategory::Social,
    ),
];

const GENERIC: &[GoalTemplate] = &[
    template(
        "Build Consistency",
        "Show up for your habit three weeks in a row.",
        21.0,
        "days",
        21,
        Priority::Medium,
        HabitCategory::Other,
    ),
    template(
        "Fifty Completions",
        "Complete your habit fifty times.",
        50.0,
        "completions",
        60,
        Priority::Medium,
        HabitCategory::Other,
    ),
    template(
        "Monthly Check-ins",
        "Review your progress once a month.",
        4.0,
        "reviews",
        120,
        Priority::Low,
        HabitCategory::Other,
    ),
];

/// Complementary goal templates for a habit category. Never empty.
pub fn templates_for(category: HabitCategory) -> &'static [GoalTemplate] {
    match category {
        HabitCategory::Health => HEALTH,
        HabitCategory::Productivity => PRODUCTIVITY,
        HabitCategory::Mindfulness => MINDFULNESS,
        HabitCategory::Social => SOCIAL,
        HabitCategory::Other => GENERIC,
    }
}
