//! Integration tests for category-based goal generation.

use chrono::Utc;
use habitstack_core::goals::templates_for;
use habitstack_core::{GoalTemplateService, Habit, HabitCategory};

#[test]
fn test_mindfulness_habit_yields_mindfulness_goal() {
    let habit = Habit::new("Evening meditation", HabitCategory::Mindfulness);
    let allowed: Vec<_> = templates_for(HabitCategory::Mindfulness)
        .iter()
        .map(|t| t.title)
        .collect();

    let mut service = GoalTemplateService::default();
    for _ in 0..25 {
        let now = Utc::now();
        let goal = service.generate(&habit, now);
        assert_eq!(goal.category, HabitCategory::Mindfulness);
        assert!(allowed.contains(&goal.title.as_str()));
        assert!(goal.deadline > goal.created_at);
        assert_eq!(goal.current, 0.0);
    }
}

#[test]
fn test_seeded_service_is_reproducible() {
    let habit = Habit::new("Read", HabitCategory::Productivity);
    let now = Utc::now();
    let a: Vec<_> = {
        let mut s = GoalTemplateService::from_seed(Some(99));
        (0..5).map(|_| s.generate(&habit, now).title).collect()
    };
    let b: Vec<_> = {
        let mut s = GoalTemplateService::from_seed(Some(99));
        (0..5).map(|_| s.generate(&habit, now).title).collect()
    };
    assert_eq!(a, b);
}

#[test]
fn test_goal_ids_are_unique() {
    let habit = Habit::new("Call mom", HabitCategory::Social);
    let mut service = GoalTemplateService::with_seed(5);
    let now = Utc::now();
    let first = service.generate(&habit, now);
    let second = service.generate(&habit, now);
    assert_ne!(first.id, second.id);
}
