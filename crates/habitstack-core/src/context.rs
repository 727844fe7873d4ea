//! Context classification for micro-habit suggestions.
//!
//! Turns the wall clock and the user's current mood into the discrete
//! context the candidate scorer works with: a time bucket, an expected
//! energy level and a stress flag.

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mood at or below this value counts as stressful.
pub const DEFAULT_STRESS_MOOD_THRESHOLD: u8 = 2;

/// Highest value on the mood scale.
pub const MAX_MOOD: u8 = 4;

/// Part of the day, derived from the hour only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    /// Before 10:00
    Morning,
    /// 10:00-13:59
    Afternoon,
    /// 14:00-17:59
    LateAfternoon,
    /// 18:00 onwards
    Evening,
}

impl TimeBucket {
    /// Get display name. Matches the context tags used in the catalog.
    pub fn name(&self) -> &'static str {
        match self {
            TimeBucket::Morning => "morning",
            TimeBucket::Afternoon => "afternoon",
            TimeBucket::LateAfternoon => "late_afternoon",
            TimeBucket::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Energy level classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl EnergyLevel {
    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mood on a 0-4 scale; low values mean more stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u8")]
pub struct Mood(u8);

impl Mood {
    /// Create a mood value. Values above 4 saturate.
    pub fn new(value: u8) -> Self {
        if value > MAX_MOOD {
            tracing::warn!(value, "mood out of range, saturating to {}", MAX_MOOD);
        }
        Self(value.min(MAX_MOOD))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Mood {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self(MAX_MOOD)
    }
}

/// Classified context for the candidate scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitContext {
    pub time_bucket: TimeBucket,
    pub energy_level: EnergyLevel,
    pub is_stressful: bool,
}

impl HabitContext {
    /// Classify with the default stress threshold.
    pub fn classify<T: Timelike>(at: &T, mood: Mood) -> Self {
        Self::classify_with_threshold(at, mood, DEFAULT_STRESS_MOOD_THRESHOLD)
    }

    /// Classify a timestamp and mood. Minutes and seconds are ignored.
    pub fn classify_with_threshold<T: Timelike>(at: &T, mood: Mood, stress_threshold: u8) -> Self {
        let (time_bucket, energy_level) = bucket_for_hour(at.hour());
        Self {
            time_bucket,
            energy_level,
            is_stressful: mood.value() <= stress_threshold,
        }
    }

    /// Context tags a candidate may carry to count as a context match.
    pub fn eligible_tags(&self) -> Vec<&'static str> {
        let mut tags = vec![self.time_bucket.name(), "general", "breaks", "transitions"];
        if self.is_stressful {
            tags.push("stressful_moments");
            tags.push("challenging_moments");
        }
        tags
    }
}

/// Time bucket and expected energy for an hour of day.
pub fn bucket_for_hour(hour: u32) -> (TimeBucket, EnergyLevel) {
    match hour {
        h if h < 10 => (TimeBucket::Morning, EnergyLevel::High),
        h if h < 14 => (TimeBucket::Afternoon, EnergyLevel::Medium),
        h if h < 18 => (TimeBucket::LateAfternoon, EnergyLevel::Low),
        _ => (TimeBucket::Evening, EnergyLevel::Low),
    }
}
