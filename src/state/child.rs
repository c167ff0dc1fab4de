use crate::core::constants::{BODY_TEMP_MAX, BODY_TEMP_MIN, BODY_TEMP_NOMINAL};
use crate::state::stat::Stat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The child's visible mood, derived from wellbeing after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    Happy,
    Worried,
    Upset,
}

/// Bounded needs and development attributes for the simulated dependent.
///
/// Every integer attribute lives in `[0, 100]`; `body_temperature` is clamped
/// to `[35.0, 40.0]` °C. All writes go through [`ChildState::apply`] or
/// [`ChildState::set_temperature`] so no caller ever observes an out-of-range
/// value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildState {
    pub age_months: u32,
    pub wellbeing: i32,
    pub energy: i32,
    /// 0 = full, 100 = starving.
    pub hunger: i32,
    pub sleep_debt: i32,
    /// Inverse of soiling: 100 = freshly changed.
    pub hygiene: i32,
    pub comfort: i32,
    pub health: i32,
    pub intimacy: i32,
    pub body_temperature: f64,
    pub motor_skill: i32,
    pub language_skill: i32,
    pub emotional_regulation: i32,
    pub social_confidence: i32,
    pub learning_motivation: i32,
    pub emotion: Emotion,
    pub last_fed_at: DateTime<Utc>,
    pub last_slept_at: DateTime<Utc>,
}

impl ChildState {
    /// Creates a child with age-appropriate development baselines.
    pub fn new(age_months: u32, now: DateTime<Utc>) -> Self {
        Self {
            age_months,
            wellbeing: 100,
            energy: 100,
            hunger: 0,
            sleep_debt: 0,
            hygiene: 100,
            comfort: 100,
            health: 100,
            intimacy: 50,
            body_temperature: BODY_TEMP_NOMINAL,
            motor_skill: (age_months as i32 * 3).min(60),
            language_skill: (age_months as i32 * 2).min(60),
            emotional_regulation: (age_months as i32).min(50),
            social_confidence: 50,
            learning_motivation: 50,
            emotion: Emotion::Happy,
            last_fed_at: now,
            last_slept_at: now,
        }
    }

    /// Applies a bounded delta to one of the child's attributes.
    ///
    /// Returns `false` (and does nothing) when the stat belongs to the
    /// caregiver side.
    pub fn apply(&mut self, stat: Stat, delta: i32) -> bool {
        let field = match stat {
            Stat::Wellbeing => &mut self.wellbeing,
            Stat::Energy => &mut self.energy,
            Stat::Hunger => &mut self.hunger,
            Stat::SleepDebt => &mut self.sleep_debt,
            Stat::Hygiene => &mut self.hygiene,
            Stat::Comfort => &mut self.comfort,
            Stat::Health => &mut self.health,
            Stat::Intimacy => &mut self.intimacy,
            Stat::MotorSkill => &mut self.motor_skill,
            Stat::LanguageSkill => &mut self.language_skill,
            Stat::EmotionalRegulation => &mut self.emotional_regulation,
            Stat::SocialConfidence => &mut self.social_confidence,
            Stat::LearningMotivation => &mut self.learning_motivation,
            _ => return false,
        };
        *field = (*field + delta).clamp(0, 100);
        true
    }

    /// Shifts body temperature, clamped to the physical range.
    pub fn shift_temperature(&mut self, delta: f64) {
        self.set_temperature(self.body_temperature + delta);
    }

    pub fn set_temperature(&mut self, value: f64) {
        self.body_temperature = value.clamp(BODY_TEMP_MIN, BODY_TEMP_MAX);
    }

    /// Re-derives the visible emotion from current wellbeing.
    pub fn refresh_emotion(&mut self) {
        self.emotion = if self.wellbeing >= 60 {
            Emotion::Happy
        } else if self.wellbeing >= 30 {
            Emotion::Worried
        } else {
            Emotion::Upset
        };
    }

    pub fn hours_since_fed(&self, now: DateTime<Utc>) -> f64 {
        (now - self.last_fed_at).num_seconds().max(0) as f64 / 3600.0
    }

    pub fn hours_since_slept(&self, now: DateTime<Utc>) -> f64 {
        (now - self.last_slept_at).num_seconds().max(0) as f64 / 3600.0
    }
}
