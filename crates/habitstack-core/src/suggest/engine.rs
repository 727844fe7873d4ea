//! Suggestion engine.
//!
//! Ranks the micro-habit catalog for the current context and turns an
//! accepted suggestion into a habit record.

use chrono::{DateTime, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::{calculate_score, is_eligible, ScoreBreakdown};
use crate::catalog::{MicroHabitCandidate, MicroHabitCatalog};
use crate::context::{EnergyLevel, HabitContext, TimeBucket};
use crate::habit::{Habit, Reminder};

/// Upper bound on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 3;

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionSource {
    /// No habits yet; first catalog entries, unscored
    Bootstrap,
    /// Nothing passed the filter; first catalog entries, unscored
    Fallback,
    /// Filtered and ranked for the context
    Scored,
}

/// Why a candidate scored above its base rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SuggestionReason {
    TimeOfDayMatch { bucket: TimeBucket },
    StressRelief,
    EnergyMatch { level: EnergyLevel },
    PersonalityAffinity { personality: String },
}

/// A ranked micro-habit suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub candidate: MicroHabitCandidate,
    /// Contextual score; the base success rate for unscored suggestions
    pub score: f64,
    pub reasons: Vec<SuggestionReason>,
    pub source: SuggestionSource,
}

impl Suggestion {
    fn unscored(candidate: &MicroHabitCandidate, source: SuggestionSource) -> Self {
        Self {
            candidate: candidate.clone(),
            score: f64::from(candidate.base_success_rate),
            reasons: Vec::new(),
            source,
        }
    }

    fn scored(
        candidate: &MicroHabitCandidate,
        breakdown: ScoreBreakdown,
        context: &HabitContext,
        personality: Option<&str>,
    ) -> Self {
        let mut reasons = Vec::new();
        if breakdown.time_match > 0.0 {
            reasons.push(SuggestionReason::TimeOfDayMatch {
                bucket: context.time_bucket,
            });
        }
        if breakdown.stress_relief > 0.0 {
            reasons.push(SuggestionReason::StressRelief);
        }
        if breakdown.energy_match > 0.0 {
            reasons.push(SuggestionReason::EnergyMatch {
                level: context.energy_level,
            });
        }
        if let (true, Some(p)) = (breakdown.personality > 0.0, personality) {
            reasons.push(SuggestionReason::PersonalityAffinity {
                personality: p.to_string(),
            });
        }

        Self {
            candidate: candidate.clone(),
            score: breakdown.total(),
            reasons,
            source: SuggestionSource::Scored,
        }
    }
}

/// Suggestion engine over a catalog.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: MicroHabitCatalog,
    max_suggestions: usize,
}

impl SuggestionEngine {
    /// Engine over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(MicroHabitCatalog::builtin())
    }

    pub fn with_catalog(catalog: MicroHabitCatalog) -> Self {
        Self {
            catalog,
            max_suggestions: MAX_SUGGESTIONS,
        }
    }

    /// Limit the result length. Clamped to 1..=3.
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max.clamp(1, MAX_SUGGESTIONS);
        self
    }

    pub fn catalog(&self) -> &MicroHabitCatalog {
        &self.catalog
    }

    /// Get the top suggestions for the current context.
    ///
    /// Never empty unless the catalog is. Deterministic for identical inputs;
    /// equal scores keep catalog order.
    pub fn suggest(
        &self,
        habits: &[Habit],
        context: &HabitContext,
        personality: Option<&str>,
    ) -> Vec<Suggestion> {
        if self.catalog.is_empty() {
            tracing::warn!("micro-habit catalog is empty, no suggestions");
            return Vec::new();
        }

        if habits.is_empty() {
            tracing::debug!("no habits yet, returning bootstrap suggestions");
            return self.first_entries(SuggestionSource::Bootstrap);
        }

        let mut scored: Vec<Suggestion> = self
            .catalog
            .iter()
            .filter(|candidate| is_eligible(candidate, context))
            .map(|candidate| {
                let breakdown = calculate_score(candidate, context, personality);
                Suggestion::scored(candidate, breakdown, context, personality)
            })
            .collect();

        if scored.is_empty() {
            tracing::debug!(
                time_bucket = context.time_bucket.name(),
                energy = context.energy_level.name(),
                "no eligible candidates, falling back to catalog head"
            );
            return self.first_entries(SuggestionSource::Fallback);
        }

        // Stable sort keeps catalog order on ties
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(self.max_suggestions);

        tracing::debug!(
            count = scored.len(),
            top = %scored[0].candidate.id,
            "ranked micro-habit suggestions"
        );
        scored
    }

    fn first_entries(&self, source: SuggestionSource) -> Vec<Suggestion> {
        self.catalog
            .iter()
            .take(self.max_suggestions)
            .map(|candidate| Suggestion::unscored(candidate, source))
            .collect()
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn an accepted candidate into a habit.
///
/// Stamps provenance (`ai_generated`, a justification quoting the candidate's
/// reasoning and the acceptance time) and seeds an enabled daily reminder at
/// the acceptance time of day.
pub fn accept_suggestion<Tz: TimeZone>(
    candidate: &MicroHabitCandidate,
    accepted_at: &DateTime<Tz>,
) -> Habit
where
    Tz::Offset: std::fmt::Display,
{
    let reminder_time = NaiveTime::from_hms_opt(accepted_at.hour(), accepted_at.minute(), 0)
        .unwrap_or(NaiveTime::MIN);

    let mut habit = Habit::new(candidate.title.clone(), candidate.category)
        .with_description(candidate.description.clone())
        .with_reminder(Reminder::daily_at(reminder_time));
    habit.ai_generated = true;
    habit.ai_suggestion = Some(format!(
        "Suggested because {} (accepted {})",
        candidate.reasoning,
        accepted_at.format("%Y-%m-%d %H:%M")
    ));
    habit.created_at = accepted_at.with_timezone(&Utc);

    tracing::info!(candidate = %candidate.id, habit = %habit.id, "accepted micro-habit suggestion");
    habit
}
