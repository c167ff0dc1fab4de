//! Static achievement definitions and the idempotent unlock check.

use crate::achievements::types::{AchievementDef, AchievementId, AchievementLedger, CareStats};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::HazmatHero,
        name: "Hazmat Hero",
        description: "Handle an explosive diaper without a single splash",
        predicate: |s| s.perfect_explosive_cleanups >= 1,
    },
    AchievementDef {
        id: AchievementId::SteadyHands,
        name: "Steady Hands",
        description: "Ten successful interventions in a row",
        predicate: |s| s.best_success_streak >= 10,
    },
    AchievementDef {
        id: AchievementId::QuickDraw,
        name: "Quick Draw",
        description: "Answer ten demands within thirty seconds",
        predicate: |s| s.fast_responses >= 10,
    },
    AchievementDef {
        id: AchievementId::NightWatch,
        name: "Night Watch",
        description: "Resolve five demands in the small hours",
        predicate: |s| s.nocturnal_resolutions >= 5,
    },
    AchievementDef {
        id: AchievementId::SurvivalWeek,
        name: "Survival Week",
        description: "Last seven days of hell week",
        predicate: |s| s.hard_mode_days >= 7,
    },
    AchievementDef {
        id: AchievementId::CalmKeeper,
        name: "Calm Keeper",
        description: "Twenty actions in without stress passing fifty",
        predicate: |s| s.actions >= 20 && s.peak_stress <= 50,
    },
    AchievementDef {
        id: AchievementId::FirstWords,
        name: "First Words",
        description: "Catch the first word on tape",
        predicate: |s| s.first_words_recorded >= 1,
    },
    AchievementDef {
        id: AchievementId::FullHouse,
        name: "Full House",
        description: "Deliver fifty feeds",
        predicate: |s| s.feeds_completed >= 50,
    },
];

pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|d| d.id == id)
}

/// Evaluates every locked achievement against the stats; satisfied ones are
/// added to the ledger and returned. Already-unlocked ids are never
/// re-evaluated, so no id is ever returned twice across calls.
pub fn check(stats: &CareStats, ledger: &mut AchievementLedger) -> Vec<AchievementId> {
    let mut newly = Vec::new();
    for def in ALL_ACHIEVEMENTS {
        if ledger.is_unlocked(def.id) {
            continue;
        }
        if (def.predicate)(stats) && ledger.unlock(def.id) {
            newly.push(def.id);
        }
    }
    newly
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_unlocks_satisfied_predicates() {
        let mut ledger = AchievementLedger::new();
        let mut stats = CareStats::default();
        stats.first_words_recorded = 1;
        stats.perfect_explosive_cleanups = 2;

        let mut newly = check(&stats, &mut ledger);
        newly.sort();
        assert_eq!(
            newly,
            vec![AchievementId::HazmatHero, AchievementId::FirstWords]
        );
    }

    #[test]
    fn test_check_is_idempotent() {
        let mut ledger = AchievementLedger::new();
        let mut stats = CareStats::default();
        stats.fast_responses = 10;

        let first = check(&stats, &mut ledger);
        assert_eq!(first, vec![AchievementId::QuickDraw]);

        // Same stats, second call: nothing new.
        let second = check(&stats, &mut ledger);
        assert!(second.is_empty());
    }

    #[test]
    fn test_calm_keeper_needs_volume() {
        let mut ledger = AchievementLedger::new();
        let mut stats = CareStats::default();
        stats.peak_stress = 20;
        stats.actions = 5;
        assert!(check(&stats, &mut ledger).is_empty());
        stats.actions = 20;
        assert_eq!(check(&stats, &mut ledger), vec![AchievementId::CalmKeeper]);
    }

    #[test]
    fn test_every_id_has_a_def() {
        for id in [
            AchievementId::HazmatHero,
            AchievementId::SteadyHands,
            AchievementId::QuickDraw,
            AchievementId::NightWatch,
            AchievementId::SurvivalWeek,
            AchievementId::CalmKeeper,
            AchievementId::FirstWords,
            AchievementId::FullHouse,
        ] {
            assert!(get_achievement_def(id).is_some(), "{:?}", id);
        }
    }
}
