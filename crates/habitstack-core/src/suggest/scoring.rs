//! Candidate filtering and scoring.
//!
//! A candidate is eligible when it matches the context by tag OR fits the
//! current energy. The OR keeps low-energy candidates eligible everywhere,
//! which is what keeps the suggestion list from running dry.
//!
//! Score = base success rate plus:
//! - +15 when tagged with the current time bucket
//! - +20 for mindfulness candidates in a stressful moment
//! - +10 when both the context and the candidate are low energy
//! - +10 when both the context and the candidate are high energy
//! - +8 when the candidate's category matches the personality affinity

use serde::{Deserialize, Serialize};

use crate::catalog::MicroHabitCandidate;
use crate::context::{EnergyLevel, HabitContext};
use crate::habit::HabitCategory;

pub const TIME_MATCH_BONUS: f64 = 15.0;
pub const STRESS_RELIEF_BONUS: f64 = 20.0;
pub const LOW_ENERGY_BONUS: f64 = 10.0;
pub const HIGH_ENERGY_BONUS: f64 = 10.0;
pub const PERSONALITY_BONUS: f64 = 8.0;

/// Candidate tags intersect the context's eligible tags.
pub fn context_match(candidate: &MicroHabitCandidate, context: &HabitContext) -> bool {
    context
        .eligible_tags()
        .iter()
        .any(|tag| candidate.has_tag(tag))
}

/// Candidate energy fits the current energy level.
pub fn energy_match(required: EnergyLevel, current: EnergyLevel) -> bool {
    match (current, required) {
        (_, EnergyLevel::Low) => true,
        (EnergyLevel::High, _) => true,
        (EnergyLevel::Medium, EnergyLevel::Medium) => true,
        _ => false,
    }
}

/// Eligibility filter: context match OR energy match.
pub fn is_eligible(candidate: &MicroHabitCandidate, context: &HabitContext) -> bool {
    context_match(candidate, context)
        || energy_match(candidate.energy_required, context.energy_level)
}

/// Category a personality tag is drawn to. Unknown tags have no affinity.
pub fn personality_affinity(personality: &str) -> Option<HabitCategory> {
    match personality.trim().to_lowercase().as_str() {
        "achiever" | "planner" => Some(HabitCategory::Productivity),
        "calm" | "reflective" => Some(HabitCategory::Mindfulness),
        "active" | "energetic" => Some(HabitCategory::Health),
        "connector" | "social" => Some(HabitCategory::Social),
        _ => None,
    }
}

/// Individual contributions to a candidate's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub time_match: f64,
    pub stress_relief: f64,
    pub energy_match: f64,
    pub personality: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.base + self.time_match + self.stress_relief + self.energy_match + self.personality
    }
}

/// Score a candidate for the given context.
pub fn calculate_score(
    candidate: &MicroHabitCandidate,
    context: &HabitContext,
    personality: Option<&str>,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        base: f64::from(candidate.base_success_rate),
        ..ScoreBreakdown::default()
    };

    if candidate.has_tag(context.time_bucket.name()) {
        breakdown.time_match = TIME_MATCH_BONUS;
    }

    if context.is_stressful && candidate.category == HabitCategory::Mindfulness {
        breakdown.stress_relief = STRESS_RELIEF_BONUS;
    }

    breakdown.energy_match = match (context.energy_level, candidate.energy_required) {
        (EnergyLevel::Low, EnergyLevel::Low) => LOW_ENERGY_BONUS,
        (EnergyLevel::High, EnergyLevel::High) => HIGH_ENERGY_BONUS,
        _ => 0.0,
    };

    if personality.and_then(personality_affinity) == Some(candidate.category) {
        breakdown.personality = PERSONALITY_BONUS;
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TimeBucket;
    use crate::habit::Priority;

    fn candidate(
        category: HabitCategory,
        energy: EnergyLevel,
        tags: &[&str],
        rate: u8,
    ) -> MicroHabitCandidate {
        MicroHabitCandidate {
            id: "c-1".to_string(),
            title: "Candidate".to_string(),
            description: String::new(),
            duration_minutes: 2,
            category,
            energy_required: energy,
            context_tags: tags.iter().map(|t| t.to_string()).collect(),
            base_success_rate: rate,
            stacking_hints: Vec::new(),
            reasoning: "it helps".to_string(),
            priority: Priority::Medium,
        }
    }

    fn context(bucket: TimeBucket, energy: EnergyLevel, stressful: bool) -> HabitContext {
        HabitContext {
            time_bucket: bucket,
            energy_level: energy,
            is_stressful: stressful,
        }
    }

    #[test]
    fn test_energy_match_table() {
        assert!(energy_match(EnergyLevel::Low, EnergyLevel::Low));
        assert!(energy_match(EnergyLevel::Low, EnergyLevel::Medium));
        assert!(energy_match(EnergyLevel::Low, EnergyLevel::High));
        assert!(energy_match(EnergyLevel::Medium, EnergyLevel::Medium));
        assert!(energy_match(EnergyLevel::High, EnergyLevel::High));
        assert!(energy_match(EnergyLevel::Medium, EnergyLevel::High));

        assert!(!energy_match(EnergyLevel::High, EnergyLevel::Medium));
        assert!(!energy_match(EnergyLevel::Medium, EnergyLevel::Low));
        assert!(!energy_match(EnergyLevel::High, EnergyLevel::Low));
    }

    #[test]
    fn test_context_match_stress_tags_only_when_stressful() {
        let c = candidate(
            HabitCategory::Mindfulness,
            EnergyLevel::High,
            &["stressful_moments"],
            50,
        );
        assert!(!context_match(&c, &context(TimeBucket::Evening, EnergyLevel::Low, false)));
        assert!(context_match(&c, &context(TimeBucket::Evening, EnergyLevel::Low, true)));
    }

    #[test]
    fn test_eligible_by_energy_without_tag() {
        let c = candidate(HabitCategory::Health, EnergyLevel::Low, &["morning"], 50);
        assert!(is_eligible(&c, &context(TimeBucket::Evening, EnergyLevel::Low, false)));
    }

    #[test]
    fn test_ineligible_when_neither_matches() {
        let c = candidate(HabitCategory::Health, EnergyLevel::High, &["morning"], 50);
        assert!(!is_eligible(&c, &context(TimeBucket::Evening, EnergyLevel::Low, false)));
    }

    #[test]
    fn test_score_base_only() {
        let c = candidate(HabitCategory::Health, EnergyLevel::Medium, &["general"], 70);
        let ctx = context(TimeBucket::Afternoon, EnergyLevel::Medium, false);
        let s = calculate_score(&c, &ctx, None);
        assert_eq!(s.total(), 70.0);
    }

    #[test]
    fn test_score_all_bonuses_low_energy() {
        let c = candidate(HabitCategory::Mindfulness, EnergyLevel::Low, &["evening"], 60);
        let s = calculate_score(
            &c,
            &context(TimeBucket::Evening, EnergyLevel::Low, true),
            Some("calm"),
        );
        assert_eq!(s.time_match, 15.0);
        assert_eq!(s.stress_relief, 20.0);
        assert_eq!(s.energy_match, 10.0);
        assert_eq!(s.personality, 8.0);
        assert_eq!(s.total(), 113.0);
    }

    #[test]
    fn test_high_energy_bonus() {
        let c = candidate(HabitCategory::Health, EnergyLevel::High, &[], 50);
        let s = calculate_score(&c, &context(TimeBucket::Morning, EnergyLevel::High, false), None);
        assert_eq!(s.energy_match, 10.0);
    }

    #[test]
    fn test_personality_affinity_table() {
        assert_eq!(personality_affinity("Achiever"), Some(HabitCategory::Productivity));
        assert_eq!(personality_affinity("reflective"), Some(HabitCategory::Mindfulness));
        assert_eq!(personality_affinity("energetic"), Some(HabitCategory::Health));
        assert_eq!(personality_affinity("social"), Some(HabitCategory::Social));
        assert_eq!(personality_affinity("pirate"), None);
    }

    #[test]
    fn test_personality_mismatch_no_bonus() {
        let c = candidate(HabitCategory::Social, EnergyLevel::Medium, &[], 50);
        let s = calculate_score(
            &c,
            &context(TimeBucket::Afternoon, EnergyLevel::Medium, false),
            Some("achiever"),
        );
        assert_eq!(s.personality, 0.0);
    }
}
