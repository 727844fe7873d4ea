//! Habit records.
//!
//! A [`Habit`] is the durable unit of tracked behavior. Good habits carry weekly
//! progress; bad habits ("habits to break") carry a detail block describing
//! when and why they happen, and are paired with a positive replacement.
//!
//! The pair link is a plain lookup key stored on both records
//! (`paired_bad_habit_id` on the positive side, `paired_habit_id` on the bad
//! side). Neither record owns the other; see [`HabitCollection`] for the
//! lookup and cascade rules.

mod collection;

pub use collection::HabitCollection;

use chrono::{DateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weekly target of a good habit unless the host sets one.
pub const DEFAULT_WEEKLY_TARGET: u32 = 7;

fn default_weekly_target() -> u32 {
    DEFAULT_WEEKLY_TARGET
}

/// Habit category.
///
/// Unknown category names deserialize to [`HabitCategory::Other`], which the
/// pairing and goal engines route to their generic fallback tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitCategory {
    Health,
    Productivity,
    Mindfulness,
    Social,
    #[serde(other)]
    Other,
}

impl HabitCategory {
    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            HabitCategory::Health => "health",
            HabitCategory::Productivity => "productivity",
            HabitCategory::Mindfulness => "mindfulness",
            HabitCategory::Social => "social",
            HabitCategory::Other => "other",
        }
    }

    /// Parse a category name, case-insensitively. Unknown names map to `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "health" => HabitCategory::Health,
            "productivity" => HabitCategory::Productivity,
            "mindfulness" => HabitCategory::Mindfulness,
            "social" => HabitCategory::Social,
            _ => HabitCategory::Other,
        }
    }
}

impl fmt::Display for HabitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Habit polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitType {
    #[default]
    Good,
    Bad,
}

/// Low/medium/high ranking shared by candidate priority, goal priority and
/// bad-habit severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Bad-habit severity uses the same three levels.
pub type Severity = Priority;

/// How often a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderFrequency {
    #[default]
    Daily,
    Weekdays,
    Weekends,
    /// Only on the listed `days`
    Custom,
    /// Every `interval_days` days
    Interval,
}

/// Reminder descriptor attached to a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub enabled: bool,
    pub time: NaiveTime,
    #[serde(default)]
    pub frequency: ReminderFrequency,
    /// Applicable days for `Custom` frequency
    #[serde(default)]
    pub days: Vec<Weekday>,
    /// Interval for `Interval` frequency
    #[serde(default)]
    pub interval_days: Option<u32>,
}

impl Reminder {
    /// Enabled daily reminder at the given time.
    pub fn daily_at(time: NaiveTime) -> Self {
        Self {
            enabled: true,
            time,
            frequency: ReminderFrequency::Daily,
            days: Vec::new(),
            interval_days: None,
        }
    }
}

impl Default for Reminder {
    fn default() -> Self {
        Self {
            enabled: false,
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            frequency: ReminderFrequency::Daily,
            days: Vec::new(),
            interval_days: None,
        }
    }
}

/// Unit for a bad habit's occurrence frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyUnit {
    #[default]
    Day,
    Week,
    Month,
}

/// Details recorded only for habits to break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadHabitDetail {
    /// Occurrences per `frequency_unit`
    pub frequency: u32,
    pub frequency_unit: FrequencyUnit,
    #[serde(default)]
    pub time_of_day: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    pub severity: Severity,
    #[serde(default)]
    pub impact: String,
}

impl Default for BadHabitDetail {
    fn default() -> Self {
        Self {
            frequency: 1,
            frequency_unit: FrequencyUnit::Day,
            time_of_day: Vec::new(),
            triggers: Vec::new(),
            severity: Severity::Medium,
            impact: String::new(),
        }
    }
}

/// A tracked habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: HabitCategory,
    #[serde(default)]
    pub habit_type: HabitType,

    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub best_streak: u32,
    #[serde(default)]
    pub completed_today: bool,
    /// Zero on bad habits, see [`HabitCollection`]
    #[serde(default = "default_weekly_target")]
    pub weekly_target: u32,
    #[serde(default)]
    pub current_week_completed: u32,
    /// Percentage 0-100
    #[serde(default)]
    pub completion_rate: f64,

    #[serde(default)]
    pub target_time: Option<NaiveTime>,
    #[serde(default)]
    pub reminder: Option<Reminder>,

    #[serde(default)]
    pub ai_generated: bool,
    #[serde(default)]
    pub ai_suggestion: Option<String>,
    /// Set on a positive habit generated as a replacement
    #[serde(default)]
    pub paired_bad_habit_id: Option<String>,
    #[serde(default)]
    pub paired_bad_habit_title: Option<String>,
    /// Set on a bad habit once its replacement exists
    #[serde(default)]
    pub paired_habit_id: Option<String>,

    #[serde(default)]
    pub bad_habit_detail: Option<BadHabitDetail>,

    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a good habit with a weekly target of [`DEFAULT_WEEKLY_TARGET`].
    pub fn new(title: impl Into<String>, category: HabitCategory) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            category,
            habit_type: HabitType::Good,
            streak: 0,
            best_streak: 0,
            completed_today: false,
            weekly_target: DEFAULT_WEEKLY_TARGET,
            current_week_completed: 0,
            completion_rate: 0.0,
            target_time: None,
            reminder: None,
            ai_generated: false,
            ai_suggestion: None,
            paired_bad_habit_id: None,
            paired_bad_habit_title: None,
            paired_habit_id: None,
            bad_habit_detail: None,
            created_at: Utc::now(),
        }
    }

    /// Create a habit to break. Weekly progress fields are zero.
    pub fn new_bad(
        title: impl Into<String>,
        category: HabitCategory,
        detail: BadHabitDetail,
    ) -> Self {
        let mut habit = Self::new(title, category);
        habit.habit_type = HabitType::Bad;
        habit.weekly_target = 0;
        habit.bad_habit_detail = Some(detail);
        habit
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_target_time(mut self, time: NaiveTime) -> Self {
        self.target_time = Some(time);
        self
    }

    pub fn with_reminder(mut self, reminder: Reminder) -> Self {
        self.reminder = Some(reminder);
        self
    }

    pub fn is_bad(&self) -> bool {
        self.habit_type == HabitType::Bad
    }

    /// True when this record is one side of a bad/positive pair.
    pub fn is_paired(&self) -> bool {
        self.paired_bad_habit_id.is_some() || self.paired_habit_id.is_some()
    }

    /// Flip today's completion.
    ///
    /// Completing adds one to `streak` and `current_week_completed`;
    /// uncompleting removes exactly one from both, so a double toggle restores
    /// the record. Bad habits never accumulate weekly progress. `best_streak`
    /// is left to the host's end-of-day rollover.
    ///
    /// Returns the new `completed_today` value.
    pub fn toggle_completion(&mut self) -> bool {
        if self.completed_today {
            self.completed_today = false;
            self.streak = self.streak.saturating_sub(1);
            if !self.is_bad() {
                self.current_week_completed = self.current_week_completed.saturating_sub(1);
            }
        } else {
            self.completed_today = true;
            self.streak = self.streak.saturating_add(1);
            if !self.is_bad() {
                self.current_week_completed = self.current_week_completed.saturating_add(1);
            }
        }
        self.completed_today
    }

    /// Enforce bad-habit invariants: no weekly progress semantics.
    pub(crate) fn normalize_bad(&mut self) {
        if self.is_bad() {
            self.weekly_target = 0;
            self.current_week_completed = 0;
            self.completion_rate = 0.0;
            if self.bad_habit_detail.is_none() {
                self.bad_habit_detail = Some(BadHabitDetail::default());
            }
        }
    }
}

/// Normalize a title for pair grouping: trimmed and case-folded.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}
