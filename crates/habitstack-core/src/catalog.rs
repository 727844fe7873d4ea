//! Micro-habit catalog.
//!
//! Static table of small, quick actions the suggestion engine can recommend,
//! each annotated with the context it fits best. Catalog order is meaningful:
//! the first three entries are the bootstrap suggestions, and ties in scoring
//! keep catalog order.

use serde::{Deserialize, Serialize};

use crate::context::EnergyLevel;
use crate::habit::{HabitCategory, Priority};

/// A catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroHabitCandidate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub category: HabitCategory,
    pub energy_required: EnergyLevel,
    /// Situational labels, e.g. "morning" or "stressful_moments"
    pub context_tags: Vec<String>,
    /// Expected success rate (0-100)
    pub base_success_rate: u8,
    /// Ids of candidates that stack well with this one
    pub stacking_hints: Vec<String>,
    pub reasoning: String,
    pub priority: Priority,
}

impl MicroHabitCandidate {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.context_tags.iter().any(|t| t == tag)
    }
}

/// Ordered collection of candidates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MicroHabitCatalog {
    candidates: Vec<MicroHabitCandidate>,
}

impl MicroHabitCatalog {
    /// Build a catalog from explicit candidates, keeping their order.
    pub fn from_candidates(candidates: Vec<MicroHabitCandidate>) -> Self {
        Self { candidates }
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::from_candidates(
            BUILTIN
                .iter()
                .map(|row| MicroHabitCandidate {
                    id: row.id.to_string(),
                    title: row.title.to_string(),
                    description: row.description.to_string(),
                    duration_minutes: row.duration_minutes,
                    category: row.category,
                    energy_required: row.energy,
                    context_tags: row.tags.iter().map(|t| t.to_string()).collect(),
                    base_success_rate: row.success_rate,
                    stacking_hints: row.stacks_with.iter().map(|s| s.to_string()).collect(),
                    reasoning: row.reasoning.to_string(),
                    priority: row.priority,
                })
                .collect(),
        )
    }

    pub fn candidates(&self) -> &[MicroHabitCandidate] {
        &self.candidates
    }

    pub fn iter(&self) -> impl Iterator<Item = &MicroHabitCandidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MicroHabitCandidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Resolve a candidate's stacking hints. Unknown ids are skipped.
    pub fn stack_partners(&self, id: &str) -> Vec<&MicroHabitCandidate> {
        self.get(id)
            .map(|candidate| {
                candidate
                    .stacking_hints
                    .iter()
                    .filter_map(|hint| self.get(hint))
                    .collect()
            })
            .unwrap_or_default()
    }
}

struct CatalogRow {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    duration_minutes: u32,
    category: HabitCategory,
    energy: EnergyLevel,
    tags: &'static [&'static str],
    success_rate: u8,
    stacks_with: &'static [&'static str],
    reasoning: &'static str,
    priority: Priority,
}

const BUILTIN: &[CatalogRow] = &[
    CatalogRow {
        id: "deep-breathing",
        title: "Three Deep Breaths",
        description: "Breathe in for four counts, out for six, three times.",
        duration_minutes: 1,
        category: HabitCategory::Mindfulness,
        energy: EnergyLevel::Low,
        tags: &["stressful_moments", "transitions", "general"],
        success_rate: 85,
        stacks_with: &["gratitude-note", "body-scan"],
        reasoning: "slow exhales calm the nervous system in under a minute",
        priority: Priority::High,
    },
    CatalogRow {
        id: "glass-of-water",
        title: "Drink a Glass of Water",
        description: "Drink one full glass of water right now.",
        duration_minutes: 1,
        category: HabitCategory::Health,
        energy: EnergyLevel::Low,
        tags: &["morning", "general"],
        success_rate: 90,
        stacks_with: &["morning-stretch"],
        reasoning: "hydration is the easiest win to anchor a routine on",
        priority: Priority::High,
    },
    CatalogRow {
        id: "morning-stretch",
        title: "Two-Minute Stretch",
        description: "Stretch your neck, shoulders and back for two minutes.",
        duration_minutes: 2,
        category: HabitCategory::Health,
        energy: EnergyLevel::Medium,
        tags: &["morning", "breaks"],
        success_rate: 80,
        stacks_with: &["glass-of-water", "top-priority"],
        reasoning: "gentle movement wakes the body without needing motivation",
        priority: Priority::Medium,
    },
    CatalogRow {
        id: "top-priority",
        title: "Name Today's Top Priority",
        description: "Write down the single most important thing for today.",
        duration_minutes: 2,
        category: HabitCategory::Productivity,
        energy: EnergyLevel::Medium,
        tags: &["morning"],
        success_rate: 75,
        stacks_with: &["focus-sprint"],
        reasoning: "deciding early protects your best hours for what matters",
        priority: Priority::High,
    },
    CatalogRow {
        id: "focus-sprint",
        title: "Ten-Minute Focus Sprint",
        description: "Work on one task for ten minutes with notifications off.",
        duration_minutes: 10,
        category: HabitCategory::Productivity,
        energy: EnergyLevel::High,
        tags: &["morning", "afternoon"],
        success_rate: 65,
        stacks_with: &["top-priority"],
        reasoning: "a short sprint lowers the barrier to starting hard work",
        priority: Priority::Medium,
    },
    CatalogRow {
        id: "ten-pushups",
        title: "Ten Push-ups",
        description: "Do ten push-ups, on your knees if needed.",
        duration_minutes: 2,
        category: HabitCategory::Health,
        energy: EnergyLevel::High,
        tags: &["morning"],
        success_rate: 60,
        stacks_with: &["glass-of-water"],
        reasoning: "a quick burst of effort raises alertness for hours",
        priority: Priority::Low,
    },
    CatalogRow {
        id: "walk-break",
        title: "Five-Minute Walk",
        description: "Step away from your desk and walk for five minutes.",
        duration_minutes: 5,
        category: HabitCategory::Health,
        energy: EnergyLevel::Medium,
        tags: &["afternoon", "breaks"],
        success_rate: 72,
        stacks_with: &["message-friend"],
        reasoning: "movement after lunch counters the afternoon slump",
        priority: Priority::Medium,
    },
    CatalogRow {
        id: "message-friend",
        title: "Message a Friend",
        description: "Send a short, friendly message to someone you care about.",
        duration_minutes: 2,
        category: HabitCategory::Social,
        energy: EnergyLevel::Low,
        tags: &["afternoon", "evening"],
        success_rate: 68,
        stacks_with: &["give-compliment"],
        reasoning: "small moments of connection add up to stronger relationships",
        priority: Priority::Medium,
    },
    CatalogRow {
        id: "body-scan",
        title: "One-Minute Body Scan",
        description: "Notice tension from head to toe and let it go.",
        duration_minutes: 1,
        category: HabitCategory::Mindfulness,
        energy: EnergyLevel::Low,
        tags: &["stressful_moments", "late_afternoon"],
        success_rate: 76,
        stacks_with: &["deep-breathing"],
        reasoning: "releasing physical tension interrupts the stress loop",
        priority: Priority::Medium,
    },
    CatalogRow {
        id: "desk-reset",
        title: "Clear Your Desk",
        description: "Put away three things that do not belong on your desk.",
        duration_minutes: 3,
        category: HabitCategory::Productivity,
        energy: EnergyLevel::Low,
        tags: &["late_afternoon", "transitions"],
        success_rate: 70,
        stacks_with: &["inbox-triage"],
        reasoning: "a tidy space makes tomorrow's start easier",
        priority: Priority::Low,
    },
    CatalogRow {
        id: "inbox-triage",
        title: "Two-Minute Inbox Triage",
        description: "Archive or answer anything that takes under two minutes.",
        duration_minutes: 2,
        category: HabitCategory::Productivity,
        energy: EnergyLevel::Medium,
        tags: &["transitions", "late_afternoon"],
        success_rate: 66,
        stacks_with: &["desk-reset"],
        reasoning: "clearing small items frees attention for bigger work",
        priority: Priority::Low,
    },
    CatalogRow {
        id: "gratitude-note",
        title: "Write One Gratitude",
        description: "Write down one thing that went well today.",
        duration_minutes: 2,
        category: HabitCategory::Mindfulness,
        energy: EnergyLevel::Low,
        tags: &["evening", "challenging_moments"],
        success_rate: 78,
        stacks_with: &["screens-off"],
        reasoning: "noticing good moments shifts attention away from worries",
        priority: Priority::Medium,
    },
    CatalogRow {
        id: "screens-off",
        title: "Screens Off Before Bed",
        description: "Put your phone away thirty minutes before sleeping.",
        duration_minutes: 5,
        category: HabitCategory::Health,
        energy: EnergyLevel::Medium,
        tags: &["evening"],
        success_rate: 55,
        stacks_with: &["gratitude-note"],
        reasoning: "less evening light helps you fall asleep faster",
        priority: Priority::Medium,
    },
    CatalogRow {
        id: "give-compliment",
        title: "Give a Genuine Compliment",
        description: "Tell someone one specific thing you appreciate about them.",
        duration_minutes: 1,
        category: HabitCategory::Social,
        energy: EnergyLevel::Low,
        tags: &["general"],
        success_rate: 74,
        stacks_with: &["message-friend"],
        reasoning: "kind words cost nothing and lift both people",
        priority: Priority::Low,
    },
];
