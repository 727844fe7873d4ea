//! Category-based goal generation.
//!
//! A habit's category selects a short list of complementary long-term goal
//! templates; one is picked at random and instantiated with a deadline.

mod service;
mod templates;

pub use service::GoalTemplateService;
pub use templates::{templates_for, GoalTemplate};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::habit::{HabitCategory, Priority};

/// A long-term goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    pub deadline: DateTime<Utc>,
    pub category: HabitCategory,
    pub priority: Priority,
    #[serde(default)]
    pub ai_generated: bool,
    /// Title of the habit this goal was derived from
    #[serde(default)]
    pub source_habit: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GoalRecord {
    /// Progress toward the target, 0-100.
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).clamp(0.0, 100.0)
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        now > self.deadline && self.current < self.target
    }
}
