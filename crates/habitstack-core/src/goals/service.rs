//! Goal template service.

use chrono::{DateTime, Duration, Utc};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

use super::templates::templates_for;
use super::GoalRecord;
use crate::habit::Habit;

/// Picks a complementary goal template for a habit and instantiates it.
///
/// Selection is uniformly random. Seed the service for reproducible output.
#[derive(Debug, Clone)]
pub struct GoalTemplateService {
    rng: Mcg128Xsl64,
}

impl GoalTemplateService {
    /// Service seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Service with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Generate a goal derived from the habit's category.
    ///
    /// The deadline is always strictly after `now`.
    pub fn generate(&mut self, source: &Habit, now: DateTime<Utc>) -> GoalRecord {
        let templates = templates_for(source.category);
        let template = templates[self.rng.gen_range(0..templates.len())];

        let goal = GoalRecord {
            id: uuid::Uuid::new_v4().to_string(),
            title: template.title.to_string(),
            description: template.description.to_string(),
            target: template.target,
            current: 0.0,
            unit: template.unit.to_string(),
            deadline: now + Duration::days(template.deadline_days.max(1)),
            category: template.category,
            priority: template.priority,
            ai_generated: true,
            source_habit: Some(source.title.clone()),
            created_at: now,
        };

        tracing::info!(
            goal = %goal.id,
            title = %goal.title,
            source_habit = %source.title,
            "generated goal from habit"
        );
        goal
    }
}

impl Default for GoalTemplateService {
    fn default() -> Self {
        Self::new()
    }
}
