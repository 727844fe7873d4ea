//! In-memory habit collection.
//!
//! The surrounding application owns the collection; the engines only read it
//! and, for pairing, append a bad habit and its replacement as one batch.
//! Not synchronized: a host with several writers must serialize access.

use serde::{Deserialize, Serialize};

use super::Habit;
use crate::error::ValidationError;
use crate::pairing::{pair_bad_habit, PairedHabits};

/// Ordered set of habit records, keyed by id.
///
/// Serialized as a plain array. Loading a snapshot clears weekly progress
/// fields on bad habits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Habit>", into = "Vec<Habit>")]
pub struct HabitCollection {
    habits: Vec<Habit>,
}

impl HabitCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_habits(mut habits: Vec<Habit>) -> Self {
        habits.iter_mut().for_each(Habit::normalize_bad);
        Self { habits }
    }

    pub fn as_slice(&self) -> &[Habit] {
        &self.habits
    }

    pub fn iter(&self) -> impl Iterator<Item = &Habit> {
        self.habits.iter()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Add a habit.
    ///
    /// Bad habits are routed through [`HabitCollection::register_bad_habit`],
    /// so the result holds the ids of every record inserted.
    pub fn add(&mut self, habit: Habit) -> Vec<String> {
        if habit.is_bad() {
            let pair = self.register_bad_habit(habit);
            return vec![pair.bad_habit.id, pair.positive_habit.id];
        }
        tracing::info!(habit = %habit.id, title = %habit.title, "added habit");
        let id = habit.id.clone();
        self.habits.push(habit);
        vec![id]
    }

    /// Pair a bad habit with a replacement and insert both together.
    pub fn register_bad_habit(&mut self, bad_habit: Habit) -> PairedHabits {
        let pair = pair_bad_habit(bad_habit, &self.habits);
        tracing::info!(
            bad_habit = %pair.bad_habit.id,
            positive_habit = %pair.positive_habit.id,
            title = %pair.positive_habit.title,
            "registered bad habit with replacement"
        );
        self.habits
            .extend([pair.bad_habit.clone(), pair.positive_habit.clone()]);
        pair
    }

    /// Toggle today's completion for a habit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::HabitNotFound`] for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Result<&Habit, ValidationError> {
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| ValidationError::HabitNotFound(id.to_string()))?;
        let completed = habit.toggle_completion();
        tracing::debug!(habit = %habit.id, completed, streak = habit.streak, "toggled habit");
        Ok(habit)
    }

    /// Resolve the other side of a pair by id lookup.
    ///
    /// Returns `None` when the habit is unpaired or its partner is gone.
    pub fn paired_partner(&self, id: &str) -> Option<&Habit> {
        let habit = self.get(id)?;
        let partner_id = if habit.is_bad() {
            habit.paired_habit_id.as_deref()
        } else {
            habit.paired_bad_habit_id.as_deref()
        };
        partner_id
            .and_then(|pid| self.get(pid))
            .or_else(|| {
                // Partner may have been paired from the other side only
                self.habits.iter().find(|h| {
                    h.id != habit.id
                        && (h.paired_bad_habit_id.as_deref() == Some(id)
                            || h.paired_habit_id.as_deref() == Some(id))
                })
            })
    }

    /// Delete a habit. Deleting either side of a pair deletes both.
    ///
    /// Returns the removed records, the requested one first.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::HabitNotFound`] for an unknown id.
    pub fn delete(&mut self, id: &str) -> Result<Vec<Habit>, ValidationError> {
        let target = self
            .get(id)
            .ok_or_else(|| ValidationError::HabitNotFound(id.to_string()))?;

        let mut doomed = vec![target.id.clone()];
        for linked in [&target.paired_bad_habit_id, &target.paired_habit_id]
            .into_iter()
            .flatten()
        {
            doomed.push(linked.clone());
        }
        doomed.extend(
            self.habits
                .iter()
                .filter(|h| {
                    h.paired_bad_habit_id.as_deref() == Some(id)
                        || h.paired_habit_id.as_deref() == Some(id)
                })
                .map(|h| h.id.clone()),
        );

        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.habits.len());
        for habit in self.habits.drain(..) {
            if doomed.contains(&habit.id) {
                removed.push(habit);
            } else {
                kept.push(habit);
            }
        }
        self.habits = kept;

        // Requested record first
        if let Some(pos) = removed.iter().position(|h| h.id == id) {
            removed.swap(0, pos);
        }

        if removed.len() > 1 {
            tracing::info!(habit = %id, cascaded = removed.len() - 1, "deleted habit pair");
        } else {
            tracing::info!(habit = %id, "deleted habit");
        }
        Ok(removed)
    }
}

impl From<Vec<Habit>> for HabitCollection {
    fn from(habits: Vec<Habit>) -> Self {
        Self::from_habits(habits)
    }
}

impl From<HabitCollection> for Vec<Habit> {
    fn from(collection: HabitCollection) -> Self {
        collection.habits
    }
}

impl IntoIterator for HabitCollection {
    type Item = Habit;
    type IntoIter = std::vec::IntoIter<Habit>;

    fn into_iter(self) -> Self::IntoIter {
        self.habits.into_iter()
    }
}
