//! # Habitstack Core Library
//!
//! This library provides the adaptive recommendation and strength engine
//! behind Habitstack. Every engine is a synchronous, in-memory function of
//! its inputs; persistence and presentation belong to the host (the
//! standalone CLI binary is one such host).
//!
//! ## Architecture
//!
//! - **Context**: classifies the clock and mood into a time bucket, energy
//!   level and stress flag
//! - **Suggestions**: filters and ranks the micro-habit catalog for the
//!   current context
//! - **Strength**: condenses a habit's progress into a score and tier
//! - **Pairing**: generates a positive replacement for every habit to break
//! - **Goals**: derives a long-term goal from a habit's category
//!
//! ## Key Components
//!
//! - [`SuggestionEngine`]: ranked micro-habit suggestions
//! - [`StrengthCalculator`]: habit strength score and tier
//! - [`HabitCollection`]: host-side collection with pair-aware add/delete
//! - [`GoalTemplateService`]: category-based goal generation
//! - [`Config`]: engine configuration management

pub mod catalog;
pub mod context;
pub mod error;
pub mod goals;
pub mod habit;
pub mod pairing;
pub mod storage;
pub mod strength;
pub mod suggest;

pub use catalog::{MicroHabitCandidate, MicroHabitCatalog};
pub use context::{EnergyLevel, HabitContext, Mood, TimeBucket};
pub use error::{ConfigError, CoreError, ValidationError};
pub use goals::{GoalRecord, GoalTemplate, GoalTemplateService};
pub use habit::{
    BadHabitDetail, FrequencyUnit, Habit, HabitCategory, HabitCollection, HabitType, Priority,
    Reminder, ReminderFrequency, Severity,
};
pub use pairing::{pair_bad_habit, PairedHabits};
pub use storage::Config;
pub use strength::{StrengthCalculator, StrengthScore, StrengthTier};
pub use suggest::{
    accept_suggestion, Suggestion, SuggestionEngine, SuggestionReason, SuggestionSource,
};
