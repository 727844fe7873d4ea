//! Replacement tables for habits to break.

use crate::habit::HabitCategory;

/// A positive habit that can stand in for a bad one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alternative {
    pub title: &'static str,
    pub description: &'static str,
    pub category: HabitCategory,
}

const fn alt(
    title: &'static str,
    description: &'static str,
    category: HabitCategory,
) -> Alternative {
    Alternative {
        title,
        description,
        category,
    }
}

use HabitCategory::{Health, Mindfulness, Productivity, Social};

/// Keyed by lowercase substring of the bad habit's title. First match wins.
const BY_TITLE: &[(&str, &[Alternative])] = &[
    (
        "smoking",
        &[
            alt(
                "Deep Breathing Exercise",
                "Take ten slow breaths whenever a craving hits.",
                Mindfulness,
            ),
            alt(
                "Chew Sugar-Free Gum",
                "Keep gum nearby to occupy your mouth during cravings.",
                Health,
            ),
            alt("Take a Short Walk", "Walk for five minutes until the urge passes.", Health),
        ],
    ),
    (
        "drinking",
        &[
            alt(
                "Drink Sparkling Water",
                "Swap the usual drink for sparkling water with lemon.",
                Health,
            ),
            alt(
                "Evening Journaling",
                "Write about your day instead of unwinding with a drink.",
                Mindfulness,
            ),
            alt("Call a Supportive Friend", "Reach out to someone when you feel the pull.", Social),
        ],
    ),
    (
        "junk food",
        &[
            alt("Eat a Piece of Fruit", "Reach for fruit first when you feel snacky.", Health),
            alt("Prepare Healthy Snacks", "Prep cut vegetables and nuts for the week.", Health),
            alt(
                "Drink Water Before Snacking",
                "Have a glass of water and wait ten minutes.",
                Health,
            ),
        ],
    ),
    (
        "procrastination",
        &[
            alt("Two-Minute Start", "Work on the task for just two minutes.", Productivity),
            alt("Pomodoro Session", "Do one 25-minute focused session.", Productivity),
            alt("Daily Top Three", "Pick the three tasks that matter most today.", Productivity),
        ],
    ),
    (
        "social media",
        &[
            alt("Read a Book Chapter", "Read one chapter instead of scrolling.", Productivity),
            alt("Phone-Free Hour", "Keep your phone in another room for an hour.", Mindfulness),
            alt("Call a Friend", "Have a real conversation instead of a feed.", Social),
        ],
    ),
    (
        "negative thinking",
        &[
            alt("Gratitude Journal", "Write down three things you are grateful for.", Mindfulness),
            alt("Positive Reframe", "Rewrite one negative thought in a balanced way.", Mindfulness),
            alt(
                "Mindful Minute",
                "Sit quietly and observe your thoughts for one minute.",
                Mindfulness,
            ),
        ],
    ),
    (
        "overspending",
        &[
            alt(
                "24-Hour Purchase Rule",
                "Wait a full day before any non-essential purchase.",
                Productivity,
            ),
            alt("Track Daily Expenses", "Log every purchase at the end of the day.", Productivity),
            alt(
                "Weekly Budget Review",
                "Review spending against your budget each week.",
                Productivity,
            ),
        ],
    ),
    (
        "skipping exercise",
        &[
            alt("Ten-Minute Workout", "Do a short bodyweight routine at home.", Health),
            alt("Lay Out Workout Clothes", "Prepare your gear the night before.", Health),
            alt("Walk After Dinner", "Take a fifteen-minute walk after your evening meal.", Health),
        ],
    ),
    (
        "staying up late",
        &[
            alt("Wind-Down Routine", "Start a calming routine an hour before bed.", Mindfulness),
            alt("Screens Off by 10pm", "Turn off screens at a fixed time each night.", Health),
            alt("Consistent Bedtime", "Go to bed at the same time every night.", Health),
        ],
    ),
    (
        "complaining",
        &[
            alt("Share a Compliment", "Say something positive to someone each day.", Social),
            alt(
                "Solution Journaling",
                "Write one possible fix for each frustration.",
                Productivity,
            ),
            alt("Gratitude Moment", "Name one good thing before voicing a complaint.", Mindfulness),
        ],
    ),
];

const HEALTH_FALLBACK: &[Alternative] = &[alt(
    "Healthy Replacement Habit",
    "Do something good for your body whenever the urge appears.",
    Health,
)];
const PRODUCTIVITY_FALLBACK: &[Alternative] = &[alt(
    "Focused Work Block",
    "Spend ten focused minutes on something that matters.",
    Productivity,
)];
const MINDFULNESS_FALLBACK: &[Alternative] = &[alt(
    "Mindful Pause",
    "Stop, breathe and notice what you feel before acting.",
    Mindfulness,
)];
const SOCIAL_FALLBACK: &[Alternative] = &[alt(
    "Connect with Someone",
    "Reach out to a friend or family member instead.",
    Social,
)];
const GENERIC_FALLBACK: &[Alternative] = &[alt(
    "Positive Replacement Habit",
    "Replace the old habit with a small positive action.",
    Mindfulness,
)];

/// Alternatives for a bad habit.
///
/// Matches the known keys as case-insensitive substrings of the title. When
/// nothing matches, returns the single fallback for the category. Never empty.
pub fn alternatives_for(title: &str, category: HabitCategory) -> &'static [Alternative] {
    let lowered = title.to_lowercase();
    BY_TITLE
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map(|(_, alternatives)| *alternatives)
        .unwrap_or_else(|| category_fallback(category))
}

fn category_fallback(category: HabitCategory) -> &'static [Alternative] {
    match category {
        HabitCategory::Health => HEALTH_FALLBACK,
        HabitCategory::Productivity => PRODUCTIVITY_FALLBACK,
        HabitCategory::Mindfulness => MINDFULNESS_FALLBACK,
        HabitCategory::Social => SOCIAL_FALLBACK,
        HabitCategory::Other => GENERIC_FALLBACK,
    }
}
