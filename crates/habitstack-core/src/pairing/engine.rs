//! Bad-habit replacement pairing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::alternatives::{alternatives_for, Alternative};
use crate::habit::{normalize_title, Habit, HabitType};

/// Weekly target given to generated replacement habits.
pub const REPLACEMENT_WEEKLY_TARGET: u32 = 7;

/// A bad habit together with its generated replacement.
///
/// Both records are meant to be inserted into the host collection as one
/// batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedHabits {
    pub bad_habit: Habit,
    pub positive_habit: Habit,
}

/// Pair a newly registered bad habit with a positive replacement.
///
/// `existing` is the current habit collection. Replacements already paired to
/// a bad habit with the same normalized title are not offered again; once
/// every alternative is used the titles cycle with a numeric suffix
/// ("Deep Breathing Exercise 2").
///
/// The bad habit's reminder is disabled and the replacement receives a copy
/// of it, enabled.
pub fn pair_bad_habit(bad_habit: Habit, existing: &[Habit]) -> PairedHabits {
    let mut bad_habit = bad_habit;
    bad_habit.habit_type = HabitType::Bad;
    bad_habit.normalize_bad();

    let group_key = normalize_title(&bad_habit.title);
    let used: HashSet<String> = existing
        .iter()
        .filter(|h| !h.is_bad())
        .filter(|h| {
            h.paired_bad_habit_title
                .as_deref()
                .map(normalize_title)
                .is_some_and(|t| t == group_key)
        })
        .map(|h| normalize_title(&h.title))
        .collect();

    let alternatives = alternatives_for(&bad_habit.title, bad_habit.category);
    let (alternative, title) = choose_alternative(alternatives, &used);

    tracing::debug!(
        bad_habit = %bad_habit.title,
        used = used.len(),
        chosen = %title,
        "selected replacement habit"
    );

    let mut reminder = bad_habit.reminder.clone().unwrap_or_default();
    reminder.enabled = true;
    if let Some(bad_reminder) = bad_habit.reminder.as_mut() {
        bad_reminder.enabled = false;
    }

    let mut positive = Habit::new(title, alternative.category)
        .with_description(alternative.description)
        .with_reminder(reminder);
    positive.weekly_target = REPLACEMENT_WEEKLY_TARGET;
    positive.ai_generated = true;
    positive.ai_suggestion = Some(format!(
        "Paired replacement to help you break \"{}\"",
        bad_habit.title
    ));
    positive.paired_bad_habit_id = Some(bad_habit.id.clone());
    positive.paired_bad_habit_title = Some(bad_habit.title.clone());
    positive.created_at = bad_habit.created_at;

    bad_habit.paired_habit_id = Some(positive.id.clone());

    PairedHabits {
        bad_habit,
        positive_habit: positive,
    }
}

/// First unused alternative in table order, or a suffixed cycle title once
/// every alternative has been used.
fn choose_alternative(
    alternatives: &'static [Alternative],
    used: &HashSet<String>,
) -> (&'static Alternative, String) {
    if let Some(fresh) = alternatives
        .iter()
        .find(|a| !used.contains(&normalize_title(a.title)))
    {
        return (fresh, fresh.title.to_string());
    }

    let len = alternatives.len();
    let used_count = used.len();
    let overflow = used_count.saturating_sub(len);
    let base = &alternatives[used_count % len];
    let mut suffix = overflow / len + 2;

    // Deleted pairs can shift the count onto a title that still exists
    loop {
        let title = format!("{} {}", base.title, suffix);
        if !used.contains(&normalize_title(&title)) {
            return (base, title);
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{BadHabitDetail, HabitCategory, Reminder};
    use chrono::NaiveTime;

    fn smoking() -> Habit {
        Habit::new_bad("Smoking", HabitCategory::Health, BadHabitDetail::default())
    }

    fn register(existing: &mut Vec<Habit>, bad: Habit) -> PairedHabits {
        let pair = pair_bad_habit(bad, existing);
        existing.push(pair.bad_habit.clone());
        existing.push(pair.positive_habit.clone());
        pair
    }

    #[test]
    fn first_pair_uses_first_alternative() {
        let pair = pair_bad_habit(smoking(), &[]);
        assert_eq!(pair.positive_habit.title, "Deep Breathing Exercise");
        assert_eq!(pair.positive_habit.habit_type, HabitType::Good);
        assert_eq!(pair.positive_habit.weekly_target, 7);
        assert_eq!(pair.positive_habit.streak, 0);
        assert!(pair.positive_habit.ai_generated);
        assert!(pair.positive_habit.ai_suggestion.as_deref().unwrap().contains("Smoking"));
    }

    #[test]
    fn back_references_link_both_sides() {
        let pair = pair_bad_habit(smoking(), &[]);
        assert_eq!(
            pair.positive_habit.paired_bad_habit_id.as_deref(),
            Some(pair.bad_habit.id.as_str())
        );
        assert_eq!(pair.positive_habit.paired_bad_habit_title.as_deref(), Some("Smoking"));
        assert_eq!(
            pair.bad_habit.paired_habit_id.as_deref(),
            Some(pair.positive_habit.id.as_str())
        );
    }

    #[test]
    fn reminder_moves_to_positive_habit() {
        let time = NaiveTime::from_hms_opt(21, 30, 0).unwrap();
        let bad = smoking().with_reminder(Reminder::daily_at(time));
        let pair = pair_bad_habit(bad, &[]);

        let bad_reminder = pair.bad_habit.reminder.unwrap();
        assert!(!bad_reminder.enabled);
        let positive_reminder = pair.positive_habit.reminder.unwrap();
        assert!(positive_reminder.enabled);
        assert_eq!(positive_reminder.time, time);
    }

    #[test]
    fn missing_reminder_gets_enabled_default() {
        let pair = pair_bad_habit(smoking(), &[]);
        assert!(pair.bad_habit.reminder.is_none());
        assert!(pair.positive_habit.reminder.unwrap().enabled);
    }

    #[test]
    fn cycles_without_repeats_and_suffixes_after_exhaustion() {
        let mut existing = Vec::new();
        let titles: Vec<String> = (0..7)
            .map(|_| register(&mut existing, smoking()).positive_habit.title)
            .collect();

        assert_eq!(
            titles,
            vec![
                "Deep Breathing Exercise",
                "Chew Sugar-Free Gum",
                "Take a Short Walk",
                "Deep Breathing Exercise 2",
                "Chew Sugar-Free Gum 2",
                "Take a Short Walk 2",
                "Deep Breathing Exercise 3",
            ]
        );
    }

    #[test]
    fn grouping_ignores_case_and_whitespace() {
        let mut existing = Vec::new();
        register(&mut existing, smoking());
        let bad = Habit::new_bad("  smoking ", HabitCategory::Health, BadHabitDetail::default());
        let pair = register(&mut existing, bad);
        assert_eq!(pair.positive_habit.title, "Chew Sugar-Free Gum");
    }

    #[test]
    fn different_titles_do_not_share_history() {
        let mut existing = Vec::new();
        register(&mut existing, smoking());
        let bad = Habit::new_bad(
            "Smoking at work",
            HabitCategory::Health,
            BadHabitDetail::default(),
        );
        let pair = register(&mut existing, bad);
        assert_eq!(pair.positive_habit.title, "Deep Breathing Exercise");
    }

    #[test]
    fn fallback_category_cycles_with_suffix() {
        let mut existing = Vec::new();
        let make = || Habit::new_bad("", HabitCategory::Social, BadHabitDetail::default());
        let first = register(&mut existing, make()).positive_habit.title;
        let second = register(&mut existing, make()).positive_habit.title;
        let third = register(&mut existing, make()).positive_habit.title;
        assert_eq!(first, "Connect with Someone");
        assert_eq!(second, "Connect with Someone 2");
        assert_eq!(third, "Connect with Someone 3");
    }

    #[test]
    fn bad_habit_progress_is_zeroed() {
        let mut bad = smoking();
        bad.weekly_target = 5;
        bad.current_week_completed = 3;
        let pair = pair_bad_habit(bad, &[]);
        assert_eq!(pair.bad_habit.weekly_target, 0);
        assert_eq!(pair.bad_habit.current_week_completed, 0);
    }
}
