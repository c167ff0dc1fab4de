use crate::core::constants::PERFORMANCE_SCORE_MAX;
use crate::state::stat::Stat;
use serde::{Deserialize, Serialize};

/// Bounded caregiver attributes plus monotone intervention counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaregiverState {
    pub confidence: i32,
    pub stress: i32,
    pub patience: i32,
    pub skill: i32,
    /// Cumulative score, clamped to `[0, 1000]`.
    pub performance_score: i32,
    pub successful_interventions: u32,
    pub failed_interventions: u32,
}

impl Default for CaregiverState {
    fn default() -> Self {
        Self::new()
    }
}

impl CaregiverState {
    pub fn new() -> Self {
        Self {
            confidence: 50,
            stress: 0,
            patience: 100,
            skill: 30,
            performance_score: 100,
            successful_interventions: 0,
            failed_interventions: 0,
        }
    }

    /// Applies a bounded delta to one of the caregiver's attributes.
    ///
    /// Returns `false` (and does nothing) when the stat belongs to the child.
    pub fn apply(&mut self, stat: Stat, delta: i32) -> bool {
        match stat {
            Stat::Confidence => self.confidence = (self.confidence + delta).clamp(0, 100),
            Stat::Stress => self.stress = (self.stress + delta).clamp(0, 100),
            Stat::Patience => self.patience = (self.patience + delta).clamp(0, 100),
            Stat::Skill => self.skill = (self.skill + delta).clamp(0, 100),
            Stat::PerformanceScore => {
                self.performance_score =
                    (self.performance_score + delta).clamp(0, PERFORMANCE_SCORE_MAX)
            }
            _ => return false,
        }
        true
    }
}
