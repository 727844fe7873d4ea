//! Habit strength scoring.
//!
//! Condenses a habit's progress fields into one comparable number and a tier.
//!
//! ```text
//! raw = completion_rate                        * 0.40
//!     + min(streak / 30 * 100, 100)            * 0.25
//!     + (target_time set ? 100 : 0)            * 0.15
//!     + (completed_today ? 100 : 0)            * 0.20
//!     + min(week_completed / weekly_target * 100, 100) * 0.20
//! ```
//!
//! The weights add up to 1.20, so `raw` can reach 120. `score` is the rounded
//! raw value clamped to 0-100 and drives the tier. With normalization enabled
//! the raw value is divided by 1.20 first.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::habit::Habit;

pub const COMPLETION_RATE_WEIGHT: f64 = 0.40;
pub const STREAK_WEIGHT: f64 = 0.25;
pub const TARGET_TIME_WEIGHT: f64 = 0.15;
pub const COMPLETED_TODAY_WEIGHT: f64 = 0.20;
pub const WEEKLY_PROGRESS_WEIGHT: f64 = 0.20;

/// Streak length that earns the full streak component.
pub const FULL_STREAK_DAYS: u32 = 30;

const WEIGHT_SUM: f64 = COMPLETION_RATE_WEIGHT
    + STREAK_WEIGHT
    + TARGET_TIME_WEIGHT
    + COMPLETED_TODAY_WEIGHT
    + WEEKLY_PROGRESS_WEIGHT;

/// Maturity tier for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    /// 0-24
    Seed,
    /// 25-49
    Rooted,
    /// 50-74
    Established,
    /// 75-89
    Automatic,
    /// 90-100
    Identity,
}

impl StrengthTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            StrengthTier::Identity
        } else if score >= 75.0 {
            StrengthTier::Automatic
        } else if score >= 50.0 {
            StrengthTier::Established
        } else if score >= 25.0 {
            StrengthTier::Rooted
        } else {
            StrengthTier::Seed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Seed => "Seed",
            StrengthTier::Rooted => "Rooted",
            StrengthTier::Established => "Established",
            StrengthTier::Automatic => "Automatic",
            StrengthTier::Identity => "Identity",
        }
    }

    /// Compact label for narrow displays.
    pub fn short_label(&self) -> &'static str {
        match self {
            StrengthTier::Seed => "Seed",
            StrengthTier::Rooted => "Root",
            StrengthTier::Established => "Est.",
            StrengthTier::Automatic => "Auto",
            StrengthTier::Identity => "Identity",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed strength of one habit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthScore {
    /// Weighted sum before clamping (up to 120 unnormalized)
    pub raw: f64,
    /// Rounded and clamped to 0-100
    pub score: u8,
    pub tier: StrengthTier,
}

impl StrengthScore {
    fn zero() -> Self {
        Self {
            raw: 0.0,
            score: 0,
            tier: StrengthTier::Seed,
        }
    }
}

/// Strength calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthCalculator {
    normalize: bool,
}

impl StrengthCalculator {
    /// Calculator using the raw 1.20 weight sum.
    pub fn new() -> Self {
        Self { normalize: false }
    }

    /// Calculator that rescales the raw sum back into 0-100.
    pub fn normalized() -> Self {
        Self { normalize: true }
    }

    pub fn with_normalize(normalize: bool) -> Self {
        Self { normalize }
    }

    /// Compute the strength of a habit. Pure and idempotent.
    ///
    /// Bad habits carry no progress semantics and always score zero.
    pub fn calculate(&self, habit: &Habit) -> StrengthScore {
        if habit.is_bad() {
            return StrengthScore::zero();
        }

        let mut raw = weighted_sum(habit);
        if self.normalize {
            raw /= WEIGHT_SUM;
        }

        let score = raw.round().clamp(0.0, 100.0) as u8;
        StrengthScore {
            raw,
            score,
            tier: StrengthTier::from_score(f64::from(score)),
        }
    }
}

fn weighted_sum(habit: &Habit) -> f64 {
    let completion = clamp_percent(habit.completion_rate);
    let streak = clamp_percent(f64::from(habit.streak) / f64::from(FULL_STREAK_DAYS) * 100.0);
    let target_time = if habit.target_time.is_some() { 100.0 } else { 0.0 };
    let today = if habit.completed_today { 100.0 } else { 0.0 };
    let weekly = if habit.weekly_target == 0 {
        0.0
    } else {
        clamp_percent(
            f64::from(habit.current_week_completed) / f64::from(habit.weekly_target) * 100.0,
        )
    };

    completion * COMPLETION_RATE_WEIGHT
        + streak * STREAK_WEIGHT
        + target_time * TARGET_TIME_WEIGHT
        + today * COMPLETED_TODAY_WEIGHT
        + weekly * WEEKLY_PROGRESS_WEIGHT
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
