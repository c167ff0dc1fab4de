use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unique identifier for each unlockable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    /// Cleaned up a containment breach without a single splash.
    HazmatHero,
    /// Ten successful interventions in a row.
    SteadyHands,
    /// Ten demands answered inside thirty seconds.
    QuickDraw,
    /// Five demands resolved in the small hours.
    NightWatch,
    /// Seven days survived in hell week.
    SurvivalWeek,
    /// Twenty actions in, stress never crossed the halfway mark.
    CalmKeeper,
    /// Caught the first word on tape.
    FirstWords,
    /// Fifty feeds delivered.
    FullHouse,
}

/// Static definition of an achievement. The predicate is pure over
/// [`CareStats`] and nothing else.
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub predicate: fn(&CareStats) -> bool,
}

/// Cumulative per-session statistics feeding achievement predicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareStats {
    pub actions: u32,
    pub successes: u32,
    pub failures: u32,
    pub feeds_completed: u32,
    pub perfect_explosive_cleanups: u32,
    pub fast_responses: u32,
    pub events_resolved: u32,
    pub events_expired: u32,
    pub nocturnal_resolutions: u32,
    pub current_success_streak: u32,
    pub best_success_streak: u32,
    /// Highest caregiver stress ever observed after an action.
    pub peak_stress: i32,
    pub hard_mode_days: u32,
    pub first_words_recorded: u32,
}

impl CareStats {
    pub fn record_outcome(&mut self, success: bool) {
        self.actions += 1;
        if success {
            self.successes += 1;
            self.current_success_streak += 1;
            self.best_success_streak = self.best_success_streak.max(self.current_success_streak);
        } else {
            self.failures += 1;
            self.current_success_streak = 0;
        }
    }

    pub fn observe_stress(&mut self, stress: i32) {
        self.peak_stress = self.peak_stress.max(stress);
    }
}

/// Append-only set of unlocked achievement ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementLedger {
    unlocked: BTreeSet<AchievementId>,
}

impl AchievementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains(&id)
    }

    /// Returns true only on the first unlock.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        self.unlocked.insert(id)
    }

    pub fn unlocked(&self) -> impl Iterator<Item = AchievementId> + '_ {
        self.unlocked.iter().copied()
    }

    pub fn count(&self) -> usize {
        self.unlocked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_is_append_only() {
        let mut ledger = AchievementLedger::new();
        assert!(ledger.unlock(AchievementId::HazmatHero));
        assert!(!ledger.unlock(AchievementId::HazmatHero));
        assert!(ledger.is_unlocked(AchievementId::HazmatHero));
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn test_streak_tracking() {
        let mut stats = CareStats::default();
        for _ in 0..3 {
            stats.record_outcome(true);
        }
        stats.record_outcome(false);
        stats.record_outcome(true);
        assert_eq!(stats.best_success_streak, 3);
        assert_eq!(stats.current_success_streak, 1);
        assert_eq!(stats.actions, 5);
        assert_eq!(stats.failures, 1);
    }

    #[test]
    fn test_peak_stress_is_monotone() {
        let mut stats = CareStats::default();
        stats.observe_stress(30);
        stats.observe_stress(70);
        stats.observe_stress(40);
        assert_eq!(stats.peak_stress, 70);
    }
}
