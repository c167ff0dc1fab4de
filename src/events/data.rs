//! Static per-category event configuration: durations, resolving actions,
//! and the penalty charged when a demand is left to expire.

use crate::events::types::EventCategory;
use crate::state::Stat;
use crate::tasks::ActionKind;

pub struct EventConfig {
    /// Inclusive duration range in seconds; the actual deadline is drawn
    /// uniformly from it.
    pub duration_secs: (i64, i64),
    pub required: &'static [ActionKind],
    /// Applied to state when the event expires unresolved.
    pub expiry_penalty: &'static [(Stat, i32)],
    pub positive: bool,
    pub description: &'static str,
}

pub fn config(category: EventCategory) -> &'static EventConfig {
    match category {
        EventCategory::Crying => &EventConfig {
            duration_secs: (30, 300),
            required: &[ActionKind::Comfort, ActionKind::RockToSleep],
            expiry_penalty: &[
                (Stat::Wellbeing, -10),
                (Stat::Comfort, -10),
                (Stat::Stress, 15),
                (Stat::PerformanceScore, -10),
            ],
            positive: false,
            description: "Full-volume crying; something needs fixing",
        },
        EventCategory::FeedingCall => &EventConfig {
            duration_secs: (60, 300),
            required: &[ActionKind::Feed],
            expiry_penalty: &[
                (Stat::Hunger, 10),
                (Stat::Wellbeing, -8),
                (Stat::Stress, 10),
                (Stat::PerformanceScore, -10),
            ],
            positive: false,
            description: "The hungry cry, unmistakable and rising",
        },
        EventCategory::DiaperFull => &EventConfig {
            duration_secs: (60, 180),
            required: &[ActionKind::ChangeDiaper],
            expiry_penalty: &[
                (Stat::Hygiene, -15),
                (Stat::Comfort, -10),
                (Stat::Stress, 8),
                (Stat::PerformanceScore, -8),
            ],
            positive: false,
            description: "The smell precedes the evidence",
        },
        EventCategory::SleepDisruption => &EventConfig {
            duration_secs: (120, 600),
            required: &[ActionKind::RockToSleep, ActionKind::Comfort],
            expiry_penalty: &[
                (Stat::SleepDebt, 15),
                (Stat::Wellbeing, -8),
                (Stat::Stress, 12),
                (Stat::PerformanceScore, -10),
            ],
            positive: false,
            description: "Wide awake at the worst possible moment",
        },
        EventCategory::ColicAttack => &EventConfig {
            duration_secs: (180, 600),
            required: &[ActionKind::Comfort, ActionKind::GiveMedicine],
            expiry_penalty: &[
                (Stat::Comfort, -20),
                (Stat::Wellbeing, -12),
                (Stat::Stress, 18),
                (Stat::PerformanceScore, -15),
            ],
            positive: false,
            description: "Inconsolable colic; knees pulled up, fists tight",
        },
        EventCategory::ExplosiveDiaper => &EventConfig {
            duration_secs: (120, 300),
            required: &[ActionKind::ChangeDiaper, ActionKind::ApplyCream],
            expiry_penalty: &[
                (Stat::Hygiene, -25),
                (Stat::Comfort, -25),
                (Stat::Stress, 20),
                (Stat::PerformanceScore, -20),
            ],
            positive: false,
            description: "Containment breach; this one went up the back",
        },
        EventCategory::MidnightTerror => &EventConfig {
            duration_secs: (300, 900),
            required: &[ActionKind::Comfort, ActionKind::RockToSleep],
            expiry_penalty: &[
                (Stat::Wellbeing, -15),
                (Stat::Comfort, -20),
                (Stat::Stress, 25),
                (Stat::PerformanceScore, -20),
            ],
            positive: false,
            description: "The 3 a.m. scream that ends all sleep",
        },
        EventCategory::GiggleFit => &EventConfig {
            duration_secs: (60, 300),
            required: &[ActionKind::Play, ActionKind::Comfort],
            expiry_penalty: &[(Stat::Intimacy, -3), (Stat::PerformanceScore, -2)],
            positive: true,
            description: "Unprompted giggles, free for the joining",
        },
        EventCategory::BabbleShow => &EventConfig {
            duration_secs: (60, 300),
            required: &[ActionKind::Play, ActionKind::Comfort],
            expiry_penalty: &[(Stat::Intimacy, -2), (Stat::PerformanceScore, -2)],
            positive: true,
            description: "A full babbled monologue awaiting an audience",
        },
    }
}

/// Everyday negative pool, available in every mode.
pub const NEGATIVE_POOL: &[EventCategory] = &[
    EventCategory::Crying,
    EventCategory::FeedingCall,
    EventCategory::DiaperFull,
    EventCategory::SleepDisruption,
    EventCategory::ColicAttack,
    EventCategory::ExplosiveDiaper,
];

/// Positive pool; personality decides how often it is drawn from.
pub const POSITIVE_POOL: &[EventCategory] = &[EventCategory::GiggleFit, EventCategory::BabbleShow];

/// Restricted categories layered onto the negative pool by nocturnal modes
/// during the small-hours window.
pub const NOCTURNAL_POOL: &[EventCategory] = &[EventCategory::MidnightTerror];

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EventCategory; 9] = [
        EventCategory::Crying,
        EventCategory::FeedingCall,
        EventCategory::DiaperFull,
        EventCategory::SleepDisruption,
        EventCategory::ColicAttack,
        EventCategory::ExplosiveDiaper,
        EventCategory::MidnightTerror,
        EventCategory::GiggleFit,
        EventCategory::BabbleShow,
    ];

    #[test]
    fn test_every_category_has_coherent_config() {
        for category in ALL {
            let cfg = config(category);
            assert!(cfg.duration_secs.0 > 0, "{:?}", category);
            assert!(cfg.duration_secs.0 <= cfg.duration_secs.1, "{:?}", category);
            assert!(!cfg.required.is_empty(), "{:?}", category);
            assert!(!cfg.expiry_penalty.is_empty(), "{:?}", category);
        }
    }

    #[test]
    fn test_positive_categories_carry_mild_penalties() {
        for category in POSITIVE_POOL {
            let cfg = config(*category);
            assert!(cfg.positive);
            for (_, delta) in cfg.expiry_penalty {
                assert!(delta.abs() <= 5, "{:?} penalty too harsh", category);
            }
        }
    }

    #[test]
    fn test_pools_are_disjoint() {
        for cat in NEGATIVE_POOL {
            assert!(!POSITIVE_POOL.contains(cat));
            assert!(!NOCTURNAL_POOL.contains(cat));
        }
    }
}
