//! Context-aware micro-habit suggestions.
//!
//! Suggestions are derived values: callers recompute them whenever the habit
//! list, the clock or the mood changes. Nothing here holds mutable state.
//!
//! Flow:
//! - no habits yet: bootstrap with the first catalog entries
//! - otherwise filter the catalog by context tag OR energy fit, score, and
//!   keep the top three
//! - an empty filter result falls back to the bootstrap entries

mod engine;
mod scoring;

pub use engine::{
    accept_suggestion, Suggestion, SuggestionEngine, SuggestionReason, SuggestionSource,
};
pub use scoring::{
    calculate_score, context_match, energy_match, is_eligible, personality_affinity, ScoreBreakdown,
};
